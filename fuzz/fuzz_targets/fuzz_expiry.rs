//! Fuzz target for expiry validation.
//!
//! Tests that the expiry check never panics for arbitrary month/year pairs.

#![no_main]

use ccparse::expiry;
use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, &str)| {
    let (month, year) = data;
    let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();

    // Should never panic, only answer yes or no
    let _ = expiry::is_valid_expiry(month, year, today);
});
