// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{date_serial, time_serial};
use crate::export::model::{ExportCell, get_headers, row_to_cells};
use crate::models::Row;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Write `rows` to an XLSX file, filling highlighted rows with `highlight`.
pub(crate) fn export_xlsx(rows: &[Row], path: &Path, highlight: Color) -> AppResult<()> {
    if rows.is_empty() {
        return Err(AppError::NoDataToExport);
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new().set_bold().set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    // ---------------------------
    // Data rows
    // ---------------------------
    for (row_index, r) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let fill = r.highlight.then_some(highlight);

        for (col, cell) in row_to_cells(r).iter().enumerate() {
            write_xlsx_cell(worksheet, row, col as u16, cell, fill)?;
            col_widths[col] = col_widths[col].max(cell.display_width());
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;
    Ok(())
}

/// Write one cell with its number format and, for highlighted rows, the fill.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &ExportCell,
    fill: Option<Color>,
) -> AppResult<()> {
    let mut fmt = Format::new();
    if let Some(color) = fill {
        fmt = fmt
            .set_background_color(color)
            .set_pattern(FormatPattern::Solid);
    }

    let written = match cell {
        ExportCell::Date(d) => worksheet.write_with_format(
            row,
            col,
            date_serial(*d),
            &fmt.set_num_format("dd/mm"),
        ),
        ExportCell::Time(t) => worksheet.write_with_format(
            row,
            col,
            time_serial(*t),
            &fmt.set_num_format("hh:mm"),
        ),
        ExportCell::Code(n) => worksheet.write_with_format(
            row,
            col,
            *n as f64,
            &fmt.set_num_format("0000000000"),
        ),
        ExportCell::Number(n) => {
            worksheet.write_with_format(row, col, *n, &fmt.set_align(FormatAlign::Right))
        }
        ExportCell::Text(s) => worksheet.write_with_format(row, col, s.as_str(), &fmt),
    };

    written.map_err(to_export_error)?;
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::ExportFailure(e.to_string())
}
