// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;
pub mod model;
pub mod pdf;
mod pdf_export;
mod xlsx;

pub use logic::ExportLogic;
pub use model::{DailyReport, ReportEntry};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Pdf,
    Csv,
    Json,
    Xlsx,
}

impl ReportFormat {
    /// File extension, also used in the report file name.
    pub fn ext(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "pdf",
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
            ReportFormat::Xlsx => "xlsx",
        }
    }
}
