// src/export/excel_date.rs

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

/// Days from 0001-01-01 (CE day 1) to 1899-12-30, the Excel serial epoch.
const EXCEL_EPOCH_CE_DAYS: i32 = 693_594;

/// Excel serial number of a calendar date.
pub(crate) fn date_serial(d: NaiveDate) -> f64 {
    (d.num_days_from_ce() - EXCEL_EPOCH_CE_DAYS) as f64
}

/// Fraction of a day, as Excel stores times.
pub(crate) fn time_serial(t: NaiveTime) -> f64 {
    t.num_seconds_from_midnight() as f64 / 86400.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serials_match_excel() {
        let d = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        assert_eq!(date_serial(d), 45778.0);

        let t = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        assert_eq!(time_serial(t), 0.5);
    }
}
