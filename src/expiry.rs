//! Expiry date validation.
//!
//! A card stays usable through the last calendar day of its expiry month,
//! so the check compares that day against a caller-supplied `today` at date
//! granularity. Injecting the date keeps the validator deterministic;
//! callers at the boundary pass `chrono::Local::now().date_naive()`.
//!
//! # Example
//!
//! ```
//! use ccparse::expiry::is_valid_expiry;
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
//! assert!(is_valid_expiry("12", "2030", today));
//! assert!(!is_valid_expiry("01", "2020", today));
//! ```

use chrono::{Datelike, NaiveDate};

/// Years in the past an expiry year may lie and still be considered
/// plausible input.
pub const PAST_WINDOW_YEARS: i32 = 10;

/// Years in the future an expiry year may lie; cards are not issued with
/// longer validity.
pub const FUTURE_WINDOW_YEARS: i32 = 20;

/// Checks that an expiry month/year is well-formed and not in the past.
///
/// Accepts the record's canonical two-digit month and four-digit year, but
/// is tolerant of raw fields: any numeric year below 100 is read as 2000+YY
/// and the month may carry leading zeros. Rules, in order:
///
/// - month and year must parse as integers, else invalid
/// - month must lie in 1-12
/// - the (normalized) year must lie within
///   `[today.year() - PAST_WINDOW_YEARS, today.year() + FUTURE_WINDOW_YEARS]`
/// - the last day of the expiry month must not be before `today`
///
/// Parse failures yield `false`, never an error.
pub fn is_valid_expiry(month: &str, year: &str, today: NaiveDate) -> bool {
    let month: u32 = match month.trim().parse() {
        Ok(m) => m,
        Err(_) => return false,
    };
    let year: i32 = match year.trim().parse() {
        Ok(y) => y,
        Err(_) => return false,
    };

    // Two-digit years are always read as 2000-2099.
    let year = if (0..100).contains(&year) { year + 2000 } else { year };

    if !(1..=12).contains(&month) {
        return false;
    }

    let current_year = today.year();
    if year < current_year - PAST_WINDOW_YEARS || year > current_year + FUTURE_WINDOW_YEARS {
        return false;
    }

    match last_day_of_month(year, month) {
        Some(last_day) => last_day >= today,
        None => false,
    }
}

/// Returns the last calendar day of the given month.
///
/// Computed as the day before the first of the following month, which gets
/// December and leap-year February right without a day table.
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}
