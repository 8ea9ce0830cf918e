// src/export/model.rs

use crate::calendar::HistoryView;
use crate::calendar::entries::{entry_row, headers};
use crate::errors::{AppError, AppResult};
use crate::models::{RoleFilter, VisitRecord};
use serde::Serialize;

/// Flat row of the daily report (CSV / JSON).
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ReportEntry {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub time_in: String,
    pub time_out: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    pub room: String,
}

impl ReportEntry {
    fn from_record(index: usize, record: &VisitRecord, role: RoleFilter) -> Self {
        Self {
            id: record.key(index),
            name: record.display_name(),
            kind: record.display_type(),
            time_in: record.time_in(),
            time_out: record.time_out(),
            purpose: role.shows_purpose().then(|| record.purpose()),
            room: record.room(),
        }
    }
}

/// Everything a daily report contains, independent of the output format.
#[derive(Serialize, Clone, Debug)]
pub struct DailyReport {
    pub date: String,
    pub role: RoleFilter,
    pub total: usize,
    #[serde(skip)]
    pub headers: Vec<&'static str>,
    #[serde(skip)]
    pub rows: Vec<Vec<String>>,
    pub entries: Vec<ReportEntry>,
}

impl DailyReport {
    /// Snapshot of the selected day.
    ///
    /// Fails when no day is selected or the selected day has no entries.
    pub fn from_view(view: &HistoryView) -> AppResult<Self> {
        let state = view.state();
        let day = state.selected.ok_or(AppError::NoDaySelected)?;

        let records = view.selected_entries();
        if records.is_empty() {
            return Err(AppError::NoEntriesForDay(day.to_string()));
        }

        let role = state.role;
        Ok(Self {
            date: day.to_string(),
            role,
            total: records.len(),
            headers: headers(role),
            rows: records.iter().map(|r| entry_row(r, role)).collect(),
            entries: records
                .iter()
                .enumerate()
                .map(|(i, r)| ReportEntry::from_record(i, r, role))
                .collect(),
        })
    }

    pub fn title(&self) -> String {
        format!("Daily Report - {}", self.date)
    }

    pub fn role_line(&self) -> String {
        format!("Role Filter: {}", self.role)
    }

    pub fn total_line(&self) -> String {
        format!("Total Entries: {}", self.total)
    }
}
