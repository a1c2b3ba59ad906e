//! Card number formatting for display.
//!
//! Grouping follows the digit count, not the issuer: 15-digit numbers use
//! the 4-6-5 convention, 14-digit numbers 4-6-4, everything else groups of
//! four with any remainder at the end.
//!
//! # Example
//!
//! ```
//! use ccparse::format::{format_card_number, format_with_separator};
//!
//! assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
//! assert_eq!(format_card_number("378282246310005"), "3782 822463 10005");
//! assert_eq!(format_with_separator("4111111111111111", "-"), "4111-1111-1111-1111");
//! ```

/// Strips all non-digit characters from a card number.
///
/// # Example
///
/// ```
/// use ccparse::format::strip_formatting;
///
/// assert_eq!(strip_formatting("4111 1111 1111 1111"), "4111111111111111");
/// assert_eq!(strip_formatting("4111-1111-1111-1111"), "4111111111111111");
/// ```
pub fn strip_formatting(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Formats a card number into display groups separated by spaces.
///
/// Existing formatting in the input is stripped first, so the function is
/// idempotent under re-formatting.
pub fn format_card_number(input: &str) -> String {
    format_with_separator(input, " ")
}

/// Formats a card number into display groups with a custom separator.
pub fn format_with_separator(input: &str, separator: &str) -> String {
    let digits = strip_formatting(input);

    if digits.is_empty() {
        return String::new();
    }

    let groups = grouping_for_length(digits.len());
    let mut result = String::with_capacity(digits.len() + groups.len() * separator.len());
    let mut pos = 0;

    for (i, &size) in groups.iter().enumerate() {
        if i > 0 {
            result.push_str(separator);
        }
        let end = (pos + size).min(digits.len());
        result.push_str(&digits[pos..end]);
        pos = end;
    }

    result
}

/// Returns the digit grouping for a number of the given length.
fn grouping_for_length(length: usize) -> Vec<usize> {
    match length {
        // AMEX-style 4-6-5
        15 => vec![4, 6, 5],
        // Diners-style 4-6-4
        14 => vec![4, 6, 4],
        _ => {
            let mut groups = vec![4; length / 4];
            if length % 4 > 0 {
                groups.push(length % 4);
            }
            groups
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_16_digits() {
        assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
        assert_eq!(format_card_number("5500000000000004"), "5500 0000 0000 0004");
    }

    #[test]
    fn test_format_15_digits() {
        assert_eq!(format_card_number("378282246310005"), "3782 822463 10005");
    }

    #[test]
    fn test_format_14_digits() {
        assert_eq!(format_card_number("30569309025904"), "3056 930902 5904");
    }

    #[test]
    fn test_format_13_digits() {
        assert_eq!(format_card_number("4222222222222"), "4222 2222 2222 2");
    }

    #[test]
    fn test_format_19_digits() {
        assert_eq!(
            format_card_number("6200000000000000005"),
            "6200 0000 0000 0000 005"
        );
    }

    #[test]
    fn test_format_custom_separator() {
        assert_eq!(
            format_with_separator("4111111111111111", "-"),
            "4111-1111-1111-1111"
        );
        assert_eq!(
            format_with_separator("378282246310005", "-"),
            "3782-822463-10005"
        );
    }

    #[test]
    fn test_format_strips_existing_formatting() {
        assert_eq!(
            format_card_number("4111-1111-1111-1111"),
            "4111 1111 1111 1111"
        );
        assert_eq!(
            format_card_number("4111 1111 1111 1111"),
            "4111 1111 1111 1111"
        );
    }

    #[test]
    fn test_format_idempotent() {
        let once = format_card_number("4111111111111111");
        assert_eq!(format_card_number(&once), once);

        let once = format_card_number("378282246310005");
        assert_eq!(format_card_number(&once), once);
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_card_number(""), "");
        assert_eq!(format_card_number("   "), "");
        assert_eq!(format_card_number("--"), "");
    }

    #[test]
    fn test_format_short_input() {
        assert_eq!(format_card_number("41"), "41");
        assert_eq!(format_card_number("41111"), "4111 1");
    }

    #[test]
    fn test_strip_formatting() {
        assert_eq!(strip_formatting("4111 1111 1111 1111"), "4111111111111111");
        assert_eq!(strip_formatting("4111-1111-1111-1111"), "4111111111111111");
        assert_eq!(strip_formatting("no digits"), "");
    }
}
