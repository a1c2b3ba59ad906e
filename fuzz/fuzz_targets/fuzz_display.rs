//! Fuzz target for formatting and masking.
//!
//! Tests that the display helpers never panic and hold their contracts.

#![no_main]

use ccparse::{format, mask};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Should never panic
    let _ = format::format_card_number(data);
    let _ = format::format_with_separator(data, "-");
    let _ = format::format_with_separator(data, "");
    let _ = mask::mask_card_number(data);
    let _ = mask::mask_with_visible(data, 0);
    let _ = mask::mask_with_visible(data, 7);

    // Formatting preserves the digit content
    let formatted = format::format_card_number(data);
    let digits = format::strip_formatting(data);
    assert_eq!(format::strip_formatting(&formatted), digits);

    // Masking leaves exactly the number's tail in the clear
    if digits.len() >= 4 {
        let masked = mask::mask_card_number(data);
        assert_eq!(format::strip_formatting(&masked), &digits[digits.len() - 4..]);
    }
});
