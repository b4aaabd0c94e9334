// src/export/model.rs

use crate::models::{Field, Row};
use chrono::{NaiveDate, NaiveTime};
use unicode_width::UnicodeWidthStr;

/// Largest integer Excel stores without losing digits.
const EXCEL_MAX_DIGITS: usize = 15;

/// Typed value of one sheet cell.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ExportCell {
    Date(NaiveDate),
    Time(NaiveTime),
    /// National code: numeric, shown with its leading zeros.
    Code(u64),
    Number(f64),
    Text(String),
}

impl ExportCell {
    /// Characters the cell occupies once rendered, for column sizing.
    pub(crate) fn display_width(&self) -> usize {
        match self {
            ExportCell::Date(_) | ExportCell::Time(_) => 5,
            ExportCell::Code(_) => 10,
            ExportCell::Number(n) => n.to_string().len(),
            ExportCell::Text(s) => UnicodeWidthStr::width(s.as_str()),
        }
    }
}

/// Header row, same order as [`row_to_cells`].
pub(crate) fn get_headers() -> Vec<&'static str> {
    Field::ALL.iter().map(Field::header).collect()
}

pub(crate) fn row_to_cells(r: &Row) -> Vec<ExportCell> {
    Field::ALL
        .iter()
        .map(|field| match field {
            Field::Date => ExportCell::Date(r.date),
            Field::Name => ExportCell::Text(r.name.clone()),
            Field::NationalCode => ExportCell::Code(r.national_code.value()),
            Field::DriverName => ExportCell::Text(r.driver_name.clone()),
            Field::Items => ExportCell::Text(r.items.clone()),
            Field::InvoiceNumber => invoice_cell(r.invoice_no.as_str()),
            Field::TimeOut => ExportCell::Time(r.time_out),
            Field::TimeIn => ExportCell::Time(r.time_in),
            Field::Category => ExportCell::Text(r.category.label().to_string()),
        })
        .collect()
}

/// Numeric when Excel can hold it exactly and nothing is lost
/// (no leading zeros), text otherwise.
fn invoice_cell(digits: &str) -> ExportCell {
    let leading_zero = digits.len() > 1 && digits.starts_with('0');
    if digits.len() > EXCEL_MAX_DIGITS || leading_zero {
        return ExportCell::Text(digits.to_string());
    }
    match digits.parse::<u64>() {
        Ok(n) => ExportCell::Number(n as f64),
        Err(_) => ExportCell::Text(digits.to_string()),
    }
}
