//! The parsed card record and its derived views.
//!
//! [`CardRecord`] is built once from a delimited card string and never
//! mutated afterwards. Everything beyond the four stored fields (issuer,
//! display forms, validity) is derived per query from those fields.
//!
//! # Security
//!
//! The number and CVV are wiped from memory when the record is dropped,
//! and `Debug`/`Display` only ever show the masked number.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use zeroize::Zeroize;

use crate::bin::{BinDetails, BinLookup};
use crate::cvv::is_valid_cvv_for_issuer;
use crate::error::{CardError, CvvIssue, ExpiryIssue, NumberIssue};
use crate::expiry::is_valid_expiry;
use crate::format::format_card_number;
use crate::issuer::{classify, Issuer};
use crate::luhn::is_luhn_valid;
use crate::mask::mask_card_number;
use crate::parse::parse_card_string;

/// A card parsed from one delimited input string.
///
/// Constructed only through [`CardRecord::parse`] (or [`FromStr`]); a
/// record that exists has digits-only number and CVV, a two-digit month
/// and a four-digit year.
#[derive(Clone, PartialEq, Eq)]
pub struct CardRecord {
    number: String,
    expiry_month: String,
    expiry_year: String,
    cvv: String,
}

impl CardRecord {
    /// Parses a delimited card string into a record.
    ///
    /// See [`crate::parse::parse_card_string`] for the accepted grammar.
    /// Construction either succeeds completely or fails with the first
    /// structural [`CardError`]; there is no partially-built record.
    ///
    /// # Example
    ///
    /// ```
    /// use ccparse::CardRecord;
    ///
    /// let card = CardRecord::parse("4111111111111111|12|2030|123").unwrap();
    /// assert_eq!(card.number(), "4111111111111111");
    /// assert_eq!(card.expiry(), "12/30");
    /// ```
    pub fn parse(raw: &str) -> Result<Self, CardError> {
        let fields = parse_card_string(raw)?;

        Ok(Self {
            number: fields.number,
            expiry_month: fields.expiry_month,
            expiry_year: fields.expiry_year,
            cvv: fields.cvv,
        })
    }

    /// Returns the card number, digits only.
    ///
    /// Exposes the full number; prefer [`CardRecord::masked_number`] for
    /// anything user-facing or logged.
    #[inline]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Returns the two-digit expiry month ("01"-"12").
    #[inline]
    pub fn expiry_month(&self) -> &str {
        &self.expiry_month
    }

    /// Returns the four-digit expiry year.
    #[inline]
    pub fn expiry_year(&self) -> &str {
        &self.expiry_year
    }

    /// Returns the CVV, digits only.
    #[inline]
    pub fn cvv(&self) -> &str {
        &self.cvv
    }

    /// Classifies the issuer from the stored number.
    ///
    /// Recomputed on each call; the record keeps no derived state.
    #[inline]
    pub fn issuer(&self) -> Issuer {
        classify(&self.number)
    }

    /// Returns the number grouped for display, e.g. `4111 1111 1111 1111`.
    pub fn formatted_number(&self) -> String {
        format_card_number(&self.number)
    }

    /// Returns the masked number, e.g. `**** **** **** 1111`.
    pub fn masked_number(&self) -> String {
        mask_card_number(&self.number)
    }

    /// Returns the expiry in short `MM/YY` form.
    pub fn expiry(&self) -> String {
        let short_year: String = self.expiry_year.chars().skip(2).collect();
        format!("{}/{}", self.expiry_month, short_year)
    }

    /// Returns the expiry in long `MM/YYYY` form.
    pub fn expiry_full(&self) -> String {
        format!("{}/{}", self.expiry_month, self.expiry_year)
    }

    /// Strictly validates the record against `today`.
    ///
    /// Checks run in a fixed order (number, expiry, CVV) and the first
    /// failure comes back as its distinguished [`CardError`].
    pub fn validate(&self, today: NaiveDate) -> Result<(), CardError> {
        if !is_luhn_valid(&self.number) {
            return Err(CardError::InvalidCardNumber(NumberIssue::ChecksumFailed));
        }

        if !is_valid_expiry(&self.expiry_month, &self.expiry_year, today) {
            return Err(CardError::InvalidExpiryFormat(ExpiryIssue::Expired));
        }

        let issuer = self.issuer();
        if !is_valid_cvv_for_issuer(&self.cvv, issuer) {
            return Err(CardError::InvalidCvv(CvvIssue::WrongLength {
                expected: issuer.cvv_length(),
                actual: self.cvv.len(),
            }));
        }

        Ok(())
    }

    /// Lenient combined validity: number, expiry and CVV checks ANDed into
    /// one boolean, the error kind discarded.
    #[inline]
    pub fn is_valid(&self, today: NaiveDate) -> bool {
        self.validate(today).is_ok()
    }

    /// Builds the canonical key-value view of the record.
    ///
    /// This is the serialization surface external callers rely on
    /// verbatim; see [`CardSummary`].
    pub fn summary(&self, today: NaiveDate) -> CardSummary {
        CardSummary {
            number: self.number.clone(),
            formatted_number: self.formatted_number(),
            masked_number: self.masked_number(),
            expiry: self.expiry(),
            expiry_month: self.expiry_month.clone(),
            expiry_year: self.expiry_year.clone(),
            cvv: self.cvv.clone(),
            card_type: self.issuer().name().to_string(),
            is_valid: self.is_valid(today),
        }
    }

    /// Looks up issuer metadata for this card's BIN through the given
    /// provider.
    ///
    /// Forwards the first six digits; numbers shorter than a full BIN
    /// yield `None` without consulting the provider.
    pub fn details(&self, provider: &dyn BinLookup) -> Option<BinDetails> {
        if self.number.len() < 6 {
            return None;
        }
        provider.lookup(&self.number[..6])
    }
}

impl FromStr for CardRecord {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for CardRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never expose the full number or CVV in debug output
        f.debug_struct("CardRecord")
            .field("number", &self.masked_number())
            .field("expiry", &self.expiry())
            .field("cvv", &"***")
            .field("issuer", &self.issuer())
            .finish()
    }
}

impl fmt::Display for CardRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (exp: {})",
            self.issuer(),
            self.masked_number(),
            self.expiry()
        )
    }
}

impl Drop for CardRecord {
    fn drop(&mut self) {
        self.number.zeroize();
        self.cvv.zeroize();
    }
}

/// The canonical serialization view of a [`CardRecord`].
///
/// Field names and order are a fixed contract consumed by the CLI and any
/// JSON emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct CardSummary {
    /// Card number, digits only.
    pub number: String,
    /// Number grouped for display.
    pub formatted_number: String,
    /// Number with all but the trailing digits masked.
    pub masked_number: String,
    /// Expiry in short `MM/YY` form.
    pub expiry: String,
    /// Two-digit expiry month.
    pub expiry_month: String,
    /// Four-digit expiry year.
    pub expiry_year: String,
    /// CVV, digits only.
    pub cvv: String,
    /// Issuer display name.
    pub card_type: String,
    /// Combined validity at the time the summary was built.
    pub is_valid: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    #[test]
    fn test_parse_and_accessors() {
        let card = CardRecord::parse("4111111111111111|12|2030|123").unwrap();
        assert_eq!(card.number(), "4111111111111111");
        assert_eq!(card.expiry_month(), "12");
        assert_eq!(card.expiry_year(), "2030");
        assert_eq!(card.cvv(), "123");
    }

    #[test]
    fn test_from_str() {
        let card: CardRecord = "4111111111111111|12/30|123".parse().unwrap();
        assert_eq!(card.expiry_year(), "2030");

        let err = "".parse::<CardRecord>().unwrap_err();
        assert_eq!(err, CardError::EmptyInput);
    }

    #[test]
    fn test_derived_views() {
        let card = CardRecord::parse("4111111111111111|12|2030|123").unwrap();
        assert_eq!(card.issuer(), Issuer::Visa);
        assert_eq!(card.formatted_number(), "4111 1111 1111 1111");
        assert_eq!(card.masked_number(), "**** **** **** 1111");
        assert_eq!(card.expiry(), "12/30");
        assert_eq!(card.expiry_full(), "12/2030");
    }

    #[test]
    fn test_amex_views() {
        let card = CardRecord::parse("378282246310005|12|2030|1234").unwrap();
        assert_eq!(card.issuer(), Issuer::Amex);
        assert_eq!(card.formatted_number(), "3782 822463 10005");
        assert_eq!(card.masked_number(), "**** ****** *0005");
    }

    #[test]
    fn test_is_valid() {
        let card = CardRecord::parse("4111111111111111|12|2030|123").unwrap();
        assert!(card.is_valid(today()));

        // Bad checksum
        let card = CardRecord::parse("4111111111111112|12|2030|123").unwrap();
        assert!(!card.is_valid(today()));

        // Expired
        let card = CardRecord::parse("4111111111111111|01|2020|123").unwrap();
        assert!(!card.is_valid(today()));

        // CVV too short for Visa
        let card = CardRecord::parse("4111111111111111|12|2030|12").unwrap();
        assert!(!card.is_valid(today()));

        // 3-digit CVV on an AMEX number
        let card = CardRecord::parse("378282246310005|12|2030|123").unwrap();
        assert!(!card.is_valid(today()));
    }

    #[test]
    fn test_validate_reports_first_failure() {
        // Number and CVV both wrong: the number error wins
        let card = CardRecord::parse("4111111111111112|12|2030|12").unwrap();
        assert_eq!(
            card.validate(today()).unwrap_err(),
            CardError::InvalidCardNumber(NumberIssue::ChecksumFailed)
        );

        // Expiry and CVV both wrong: the expiry error wins
        let card = CardRecord::parse("4111111111111111|01|2020|12").unwrap();
        assert_eq!(
            card.validate(today()).unwrap_err(),
            CardError::InvalidExpiryFormat(ExpiryIssue::Expired)
        );

        // Only the CVV is wrong
        let card = CardRecord::parse("378282246310005|12|2030|123").unwrap();
        assert_eq!(
            card.validate(today()).unwrap_err(),
            CardError::InvalidCvv(CvvIssue::WrongLength {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_non_numeric_year_fails_validation_not_parsing() {
        let card = CardRecord::parse("4111111111111111|12|20AB|123").unwrap();
        assert!(!card.is_valid(today()));
    }

    #[test]
    fn test_summary() {
        let card = CardRecord::parse("4111111111111111|12|2030|123").unwrap();
        let summary = card.summary(today());

        assert_eq!(summary.number, "4111111111111111");
        assert_eq!(summary.formatted_number, "4111 1111 1111 1111");
        assert_eq!(summary.masked_number, "**** **** **** 1111");
        assert_eq!(summary.expiry, "12/30");
        assert_eq!(summary.expiry_month, "12");
        assert_eq!(summary.expiry_year, "2030");
        assert_eq!(summary.cvv, "123");
        assert_eq!(summary.card_type, "Visa");
        assert!(summary.is_valid);
    }

    #[test]
    fn test_debug_and_display_are_masked() {
        let card = CardRecord::parse("4111111111111111|12|2030|123").unwrap();

        let debug = format!("{:?}", card);
        assert!(!debug.contains("4111111111111111"));
        assert!(!debug.contains("123\""));

        let display = format!("{}", card);
        assert!(display.contains("Visa"));
        assert!(display.contains("**** **** **** 1111"));
        assert!(!display.contains("4111111111111111"));
    }

    #[test]
    fn test_details_requires_full_bin() {
        struct NoLookup;
        impl BinLookup for NoLookup {
            fn lookup(&self, _prefix: &str) -> Option<BinDetails> {
                panic!("provider must not be consulted for short numbers");
            }
        }

        // Construct a record with a short number through the tokenizer
        let card = CardRecord::parse("41111|12|2030|123").unwrap();
        assert_eq!(card.details(&NoLookup), None);
    }

    #[test]
    fn test_details_forwards_bin6() {
        struct Fixed;
        impl BinLookup for Fixed {
            fn lookup(&self, prefix: &str) -> Option<BinDetails> {
                assert_eq!(prefix, "411111");
                Some(BinDetails {
                    scheme: Some("visa".to_string()),
                    ..BinDetails::default()
                })
            }
        }

        let card = CardRecord::parse("4111111111111111|12|2030|123").unwrap();
        let details = card.details(&Fixed).unwrap();
        assert_eq!(details.scheme.as_deref(), Some("visa"));
    }

    #[test]
    fn test_record_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CardRecord>();
        assert_send_sync::<CardSummary>();
    }
}
