// src/export/logic.rs

use crate::calendar::HistoryView;
use crate::errors::AppResult;
use crate::export::ReportFormat;
use crate::export::fs_utils::{ensure_dir, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::DailyReport;
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::utils::path::daily_report_path;
use std::path::{Path, PathBuf};

/// High level logic of the daily report export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the selected day of `view` into `out_dir`.
    ///
    /// The preconditions (a selected day with at least one entry) are checked
    /// before anything touches the file system, so a refused export never
    /// leaves a partial file behind.
    pub fn export_daily_report(
        view: &HistoryView,
        format: ReportFormat,
        out_dir: &Path,
        force: bool,
    ) -> AppResult<PathBuf> {
        let report = DailyReport::from_view(view)?;

        let path = daily_report_path(out_dir, &report.date, format.ext());
        ensure_dir(out_dir)?;
        ensure_writable(&path, force)?;

        match format {
            ReportFormat::Pdf => export_pdf(&report, &path)?,
            ReportFormat::Csv => export_csv(&report, &path)?,
            ReportFormat::Json => export_json(&report, &path)?,
            ReportFormat::Xlsx => export_xlsx(&report, &path)?,
        }

        Ok(path)
    }
}
