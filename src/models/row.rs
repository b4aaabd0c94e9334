use super::category::Category;
use chrono::{NaiveDate, NaiveTime};
use std::fmt;

/// Ten-digit national identification number.
///
/// Kept as an integer; leading zeros come back through [`fmt::Display`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NationalCode(u64);

impl NationalCode {
    pub const DIGITS: usize = 10;

    /// Build from an already validated digit string.
    pub(crate) fn from_digits(digits: &str) -> Option<Self> {
        if digits.len() != Self::DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok().map(NationalCode)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NationalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.0, width = Self::DIGITS)
    }
}

/// Invoice number: a non-empty run of ASCII digits, unbounded in length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceNumber(String);

impl InvoiceNumber {
    pub(crate) fn from_digits(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(InvoiceNumber(digits.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvoiceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One completed record, i.e. one line of the exported sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub date: NaiveDate,
    pub name: String,
    pub national_code: NationalCode,
    pub driver_name: String,
    pub items: String,
    pub invoice_no: InvoiceNumber,
    pub time_out: NaiveTime,
    pub time_in: NaiveTime,
    pub category: Category,
    /// Driver already bought on another date.
    pub highlight: bool,
}
