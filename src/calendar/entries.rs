//! Column set and rows of the selected day's entries table.

use crate::models::{RoleFilter, VisitRecord};

/// Name, Type, Time In, Time Out, [Purpose], Room. Purpose only for the
/// Visitor filter.
pub fn headers(role: RoleFilter) -> Vec<&'static str> {
    let mut h = vec!["Name", "Type", "Time In", "Time Out"];
    if role.shows_purpose() {
        h.push("Purpose");
    }
    h.push("Room");
    h
}

pub fn entry_row(record: &VisitRecord, role: RoleFilter) -> Vec<String> {
    let mut row = vec![
        record.display_name(),
        record.display_type(),
        record.time_in(),
        record.time_out(),
    ];
    if role.shows_purpose() {
        row.push(record.purpose());
    }
    row.push(record.room());
    row
}

pub fn entries_table(records: &[&VisitRecord], role: RoleFilter) -> Vec<Vec<String>> {
    records.iter().map(|r| entry_row(r, role)).collect()
}
