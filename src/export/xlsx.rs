// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::DailyReport;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// First row of the entries table (title block above it).
const TABLE_ROW: u32 = 4;

/// XLSX daily report with title block, styled header and auto column widths.
pub(crate) fn export_xlsx(report: &DailyReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(format!("Report {}", report.date))
        .map_err(to_app_error)?;

    // ---------------------------
    // Title block
    // ---------------------------
    let title_format = Format::new().set_bold().set_font_size(16);
    worksheet
        .write_with_format(0, 0, report.title(), &title_format)
        .map_err(to_app_error)?;
    worksheet
        .write(1, 0, report.role_line())
        .map_err(to_app_error)?;
    worksheet
        .write(2, 0, report.total_line())
        .map_err(to_app_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2980B9))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in report.headers.iter().enumerate() {
        worksheet
            .write_with_format(TABLE_ROW, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(TABLE_ROW + 1, 0).ok();

    let mut col_widths: Vec<usize> = report
        .headers
        .iter()
        .map(|h| UnicodeWidthStr::width(*h))
        .collect();

    // ---------------------------
    // Rows (striped)
    // ---------------------------
    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (i, values) in report.rows.iter().enumerate() {
        let row = TABLE_ROW + 1 + i as u32;
        let band = if i % 2 == 0 { band2 } else { band1 };

        for (col, value) in values.iter().enumerate() {
            write_text_cell(worksheet, row, col as u16, value, band)?;
            if let Some(w) = col_widths.get_mut(col) {
                *w = (*w).max(UnicodeWidthStr::width(value.as_str()));
            }
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_text_cell(worksheet: &mut Worksheet, row: u32, col: u16, s: &str, bg: Color) -> AppResult<()> {
    let fmt = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    worksheet
        .write_with_format(row, col, s, &fmt)
        .map_err(to_app_error)?;

    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
