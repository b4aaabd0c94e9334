//! Field validation: raw chat text → typed value.
//!
//! Every function trims surrounding whitespace first and reports bad input
//! as `AppError::InvalidFormat` so the caller can ask for the same field again.

use crate::errors::{AppError, AppResult};
use crate::models::{Category, Field, InvoiceNumber, NationalCode};

pub fn national_code(input: &str) -> AppResult<NationalCode> {
    NationalCode::from_digits(input.trim()).ok_or(AppError::InvalidFormat(Field::NationalCode))
}

pub fn invoice_number(input: &str) -> AppResult<InvoiceNumber> {
    InvoiceNumber::from_digits(input.trim()).ok_or(AppError::InvalidFormat(Field::InvoiceNumber))
}

pub fn category(input: &str) -> AppResult<Category> {
    Category::from_label(input.trim()).ok_or(AppError::InvalidFormat(Field::Category))
}

/// Driver name and items: anything that is not blank.
pub fn free_text(field: Field, input: &str) -> AppResult<String> {
    let s = input.trim();
    if s.is_empty() {
        return Err(AppError::InvalidFormat(field));
    }
    Ok(s.to_string())
}
