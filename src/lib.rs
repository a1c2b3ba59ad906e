//! # ccparse
//!
//! Parse, validate, and format delimited payment-card strings.
//!
//! A card string carries a number, expiry and CVV separated by `|`, `:` or
//! spaces, with the expiry either split or combined:
//!
//! ```text
//! 4111111111111111|12|2030|123
//! 4111111111111111|12/30|123
//! 4111111111111111 12 2030 123
//! 4111111111111111:12:30:123
//! ```
//!
//! ## Quick start
//!
//! ```rust
//! use ccparse::{CardRecord, Issuer};
//! use chrono::NaiveDate;
//!
//! let card = CardRecord::parse("4111111111111111|12|2030|123").unwrap();
//! assert_eq!(card.issuer(), Issuer::Visa);
//! assert_eq!(card.formatted_number(), "4111 1111 1111 1111");
//! assert_eq!(card.expiry(), "12/30");
//!
//! // Safe for logging - never exposes the full number
//! assert_eq!(card.masked_number(), "**** **** **** 1111");
//!
//! // Validity is checked against a date you supply
//! let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
//! assert!(card.is_valid(today));
//! ```
//!
//! ## Strict validation
//!
//! ```rust
//! use ccparse::{CardError, CardRecord, NumberIssue};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
//! let card = CardRecord::parse("4111111111111112|12|2030|123").unwrap();
//!
//! // `validate` names the first failing check; `is_valid` just says no
//! assert_eq!(
//!     card.validate(today).unwrap_err(),
//!     CardError::InvalidCardNumber(NumberIssue::ChecksumFailed)
//! );
//! assert!(!card.is_valid(today));
//! ```
//!
//! ## Field-level checks
//!
//! ```rust
//! use ccparse::{cvv, expiry, luhn};
//! use chrono::NaiveDate;
//!
//! assert!(luhn::is_luhn_valid("378282246310005"));
//! assert!(cvv::is_valid_cvv("1234", "378282246310005"));
//!
//! let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
//! assert!(expiry::is_valid_expiry("12", "30", today));
//! ```
//!
//! ## Feature flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `json` | serde `Serialize` on [`CardSummary`] and JSON output |
//! | `lookup` | binlist.net BIN metadata client |
//! | `generate` | random test-number generation |
//! | `cli` | the `ccparse` command-line tool |
//!
//! ## Supported issuers
//!
//! | Issuer | Prefix | Length |
//! |--------|--------|--------|
//! | Visa | 4 | 13, 16 |
//! | MasterCard | 51-55 | 16 |
//! | AMEX | 34, 37 | 15 |
//! | Discover | 6011, 644-649, 65 | 16 |
//! | JCB | 2131, 1800, 35 | 15, 16 |
//! | Diners Club | 300-305, 36, 38 | 14 |
//! | UnionPay | 62 | 16-19 |
//!
//! ## Security
//!
//! - `Debug` and `Display` on [`CardRecord`] show masked numbers only
//! - Number and CVV memory is zeroed when a record is dropped
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

#[path = "bin_lookup.rs"]
pub mod bin;
pub mod card;
pub mod cvv;
pub mod error;
pub mod expiry;
pub mod format;
pub mod generate;
pub mod issuer;
pub mod luhn;
pub mod mask;
pub mod parse;

// Re-export main types at crate root
pub use card::{CardRecord, CardSummary};
pub use error::{CardError, CvvIssue, ExpiryIssue, NumberIssue};
pub use issuer::{classify, Issuer};
