//! History view: record loading and terminal rendering.

use crate::calendar::entries::{entries_table, headers};
use crate::calendar::{HistoryView, month_grids};
use crate::db::pool::DbPool;
use crate::db::records::load_records;
use crate::errors::{AppError, AppResult};
use crate::models::VisitRecord;
use crate::utils::colors::colorize_optional;
use crate::utils::table::Table;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Where the history view takes its records from.
pub enum RecordSource<'a> {
    Store(&'a mut DbPool),
    JsonFile(&'a Path),
}

/// Parse a JSON file holding an array of records. `null` counts as no records.
pub fn load_json_records(path: &Path) -> AppResult<Vec<VisitRecord>> {
    let content = fs::read_to_string(path)?;
    match serde_json::from_str::<Value>(&content)? {
        Value::Array(items) => Ok(items.into_iter().map(VisitRecord::from_value).collect()),
        Value::Null => Ok(Vec::new()),
        _ => Err(AppError::Other(format!(
            "{}: expected a JSON array of visit records",
            path.display()
        ))),
    }
}

pub struct HistoryLogic;

impl HistoryLogic {
    pub fn load(source: RecordSource<'_>) -> AppResult<Vec<VisitRecord>> {
        match source {
            RecordSource::Store(pool) => load_records(pool),
            RecordSource::JsonFile(path) => load_json_records(path),
        }
    }

    /// Both month grids followed by the selected day's entries.
    pub fn render(view: &HistoryView) -> String {
        let state = view.state();
        let buckets = view.buckets();
        let grids = month_grids(&buckets, state.selected.as_ref());

        let mut out = format!("Role: {}\n\n", state.role);
        for grid in &grids {
            out.push_str(&grid.render());
            out.push('\n');
        }

        match &state.selected {
            None => out.push_str("Select a day\nClick on a date in the calendar to view entries.\n"),
            Some(day) => {
                out.push_str(&format!("Entries for {day}\n"));
                let entries = buckets.entries(day);
                if entries.is_empty() {
                    out.push_str("No entries for this day.\n");
                } else {
                    let mut table = Table::new(headers(state.role));
                    for row in entries_table(entries, state.role) {
                        table.add_row(row.iter().map(|c| colorize_optional(c)).collect());
                    }
                    out.push_str(&table.render());
                }
            }
        }

        out
    }
}
