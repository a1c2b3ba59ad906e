//! Error types for card parsing and validation.
//!
//! Every variant is a user-input problem, not a system fault. Construction
//! (`CardRecord::parse`) and strict validation (`CardRecord::validate`) both
//! report through [`CardError`]; the lenient `is_valid` path never surfaces
//! one.

use std::fmt;

/// Errors produced while parsing or validating a card string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    /// The input was missing or blank after trimming.
    EmptyInput,

    /// The delimiter split produced neither 3 nor 4 fields.
    InvalidCardFormat {
        /// Number of fields the split produced.
        fields: usize,
    },

    /// The expiry month/year could not be parsed or is out of range.
    InvalidExpiryFormat(ExpiryIssue),

    /// The card number is malformed or failed the Luhn check.
    InvalidCardNumber(NumberIssue),

    /// The CVV is malformed or has the wrong length for the issuer.
    InvalidCvv(CvvIssue),
}

/// Detail for [`CardError::InvalidExpiryFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryIssue {
    /// A combined expiry token had no `/` or `-` separator.
    MissingSeparator,
    /// A combined expiry token split into a part count other than 2.
    WrongPartCount {
        /// Number of sub-parts found.
        parts: usize,
    },
    /// The month token is not numeric.
    NonNumericMonth,
    /// The month parsed but is outside 1-12.
    MonthOutOfRange {
        /// The parsed month value.
        month: u32,
    },
    /// The year token is neither 2 nor 4 characters long.
    BadYearLength {
        /// Length of the year token.
        len: usize,
    },
    /// The card has expired or the year is outside the accepted window.
    Expired,
}

/// Detail for [`CardError::InvalidCardNumber`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberIssue {
    /// The number token contains a non-digit character.
    NonDigit,
    /// The Luhn checksum did not come out to a multiple of ten.
    ChecksumFailed,
}

/// Detail for [`CardError::InvalidCvv`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CvvIssue {
    /// The CVV token contains a non-digit character.
    NonDigit,
    /// The CVV length does not match the issuer's convention.
    WrongLength {
        /// Length required by the issuer (3, or 4 for AMEX).
        expected: usize,
        /// Length actually provided.
        actual: usize,
    },
}

impl fmt::Display for CardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "card string is empty"),

            Self::InvalidCardFormat { fields } => {
                write!(
                    f,
                    "invalid card string format: got {} fields, expected NUMBER|MM|YYYY|CVV or NUMBER|MM/YY|CVV",
                    fields
                )
            }

            Self::InvalidExpiryFormat(issue) => write!(f, "invalid expiry date: {}", issue),

            Self::InvalidCardNumber(issue) => write!(f, "invalid card number: {}", issue),

            Self::InvalidCvv(issue) => write!(f, "invalid CVV: {}", issue),
        }
    }
}

impl fmt::Display for ExpiryIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator => write!(f, "use MM/YY or MM/YYYY"),
            Self::WrongPartCount { parts } => {
                write!(f, "expected month and year, got {} parts", parts)
            }
            Self::NonNumericMonth => write!(f, "month must be numeric"),
            Self::MonthOutOfRange { month } => {
                write!(f, "month {} out of range, must be 01-12", month)
            }
            Self::BadYearLength { len } => {
                write!(f, "year must be 2 or 4 digits, got {}", len)
            }
            Self::Expired => write!(f, "card has expired or year is out of range"),
        }
    }
}

impl fmt::Display for NumberIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonDigit => write!(f, "must contain only digits"),
            Self::ChecksumFailed => write!(f, "failed Luhn checksum"),
        }
    }
}

impl fmt::Display for CvvIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonDigit => write!(f, "must contain only digits"),
            Self::WrongLength { expected, actual } => {
                write!(f, "expected {} digits, got {}", expected, actual)
            }
        }
    }
}

impl std::error::Error for CardError {}
