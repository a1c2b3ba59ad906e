//! Tokenizing of delimited card strings.
//!
//! A card string carries four fields (number, expiry month, expiry year,
//! CVV) separated by runs of `|`, `:` or space, with the expiry either
//! split (`NUMBER|MM|YYYY|CVV`) or combined (`NUMBER|MM/YY|CVV`, `/` or `-`
//! inside the token).
//!
//! # Example
//!
//! ```
//! use ccparse::parse::parse_card_string;
//!
//! let fields = parse_card_string("4111111111111111|12/30|123").unwrap();
//! assert_eq!(fields.number, "4111111111111111");
//! assert_eq!(fields.expiry_month, "12");
//! assert_eq!(fields.expiry_year, "2030");
//! assert_eq!(fields.cvv, "123");
//! ```

use crate::error::{CardError, CvvIssue, ExpiryIssue, NumberIssue};

/// The four raw fields extracted from one delimited card string.
///
/// Month is canonical two-digit, year canonical four-digit; number and CVV
/// are digits-only, exactly as they appeared in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCard {
    /// Card number, digits only.
    pub number: String,
    /// Expiry month, zero-padded to two digits ("01"-"12").
    pub expiry_month: String,
    /// Expiry year, four digits (two-digit input is read as 2000+YY).
    pub expiry_year: String,
    /// CVV, digits only.
    pub cvv: String,
}

/// Splits a raw card string into its four fields.
///
/// Pure function of the input. Field checks run in a fixed order: token
/// count, expiry shape, month, year, number, CVV. The first failure is
/// returned as its distinguished [`CardError`].
pub fn parse_card_string(raw: &str) -> Result<RawCard, CardError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(CardError::EmptyInput);
    }

    // Runs of delimiters collapse to one split point.
    let fields: Vec<&str> = trimmed
        .split(|c| matches!(c, '|' | ':' | ' '))
        .filter(|token| !token.is_empty())
        .collect();

    let (number, month, year, cvv) = match fields.as_slice() {
        [number, expiry, cvv] => {
            let (month, year) = split_combined_expiry(expiry)?;
            (*number, month, year, *cvv)
        }
        [number, month, year, cvv] => (*number, *month, *year, *cvv),
        _ => {
            return Err(CardError::InvalidCardFormat {
                fields: fields.len(),
            })
        }
    };

    let expiry_month = canonical_month(month)?;
    let expiry_year = canonical_year(year)?;

    if !is_all_digits(number) {
        return Err(CardError::InvalidCardNumber(NumberIssue::NonDigit));
    }

    if !is_all_digits(cvv) {
        return Err(CardError::InvalidCvv(CvvIssue::NonDigit));
    }

    Ok(RawCard {
        number: number.to_string(),
        expiry_month,
        expiry_year,
        cvv: cvv.to_string(),
    })
}

/// Splits a combined expiry token ("MM/YY" or "MM-YYYY") into month and
/// year parts.
fn split_combined_expiry(expiry: &str) -> Result<(&str, &str), CardError> {
    let separator = if expiry.contains('/') {
        '/'
    } else if expiry.contains('-') {
        '-'
    } else {
        return Err(CardError::InvalidExpiryFormat(ExpiryIssue::MissingSeparator));
    };

    let parts: Vec<&str> = expiry.split(separator).collect();
    match parts.as_slice() {
        [month, year] => Ok((*month, *year)),
        _ => Err(CardError::InvalidExpiryFormat(ExpiryIssue::WrongPartCount {
            parts: parts.len(),
        })),
    }
}

/// Canonicalizes a month token to two digits, rejecting non-numeric and
/// out-of-range values.
fn canonical_month(token: &str) -> Result<String, CardError> {
    let month: u32 = token
        .parse()
        .map_err(|_| CardError::InvalidExpiryFormat(ExpiryIssue::NonNumericMonth))?;

    if !(1..=12).contains(&month) {
        return Err(CardError::InvalidExpiryFormat(ExpiryIssue::MonthOutOfRange {
            month,
        }));
    }

    Ok(format!("{:02}", month))
}

/// Canonicalizes a year token to four digits.
///
/// Two-character years are prefixed with "20"; there is no windowing, a
/// 2-digit year always lands in 2000-2099. Four-character years are kept
/// as-is; whether they are plausible is the expiry validator's business,
/// not the tokenizer's.
fn canonical_year(token: &str) -> Result<String, CardError> {
    match token.len() {
        2 => Ok(format!("20{}", token)),
        4 => Ok(token.to_string()),
        len => Err(CardError::InvalidExpiryFormat(ExpiryIssue::BadYearLength {
            len,
        })),
    }
}

fn is_all_digits(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}
