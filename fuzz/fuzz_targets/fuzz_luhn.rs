//! Fuzz target for the Luhn checksum.
//!
//! Tests that validation never panics and that check digit generation
//! round-trips for digit-only input.

#![no_main]

use ccparse::luhn;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Should never panic
    let _ = luhn::is_luhn_valid(data);

    // Check digit round-trip over the digit content
    let digits: Vec<u8> = data
        .bytes()
        .filter(|b| b.is_ascii_digit())
        .map(|b| b - b'0')
        .collect();

    if !digits.is_empty() {
        let check = luhn::check_digit(&digits);
        let mut full = digits.clone();
        full.push(check);
        assert_eq!(luhn::checksum(&full) % 10, 0);
    }
});
