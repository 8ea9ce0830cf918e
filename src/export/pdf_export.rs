// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::DailyReport;
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::ui::messages::info;
use std::path::Path;

/// PDF daily report: title block plus the paginated entries table.
pub(crate) fn export_pdf(report: &DailyReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let mut pdf = PdfManager::new();
    pdf.write_report(
        &report.title(),
        &[report.role_line(), report.total_line()],
        &report.headers,
        &report.rows,
    );

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
