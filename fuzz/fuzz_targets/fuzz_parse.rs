//! Fuzz target for card string parsing.
//!
//! Tests that parsing and validation never panic on arbitrary input.

#![no_main]

use ccparse::parse::parse_card_string;
use ccparse::CardRecord;
use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // These should never panic, regardless of input
    let _ = parse_card_string(data);

    if let Ok(card) = CardRecord::parse(data) {
        let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();

        // A constructed record upholds its structural invariants
        assert!(!card.number().is_empty());
        assert_eq!(card.expiry_month().len(), 2);
        assert_eq!(card.expiry_year().len(), 4);

        // Every derived query is total
        let _ = card.issuer();
        let _ = card.formatted_number();
        let _ = card.masked_number();
        let _ = card.expiry();
        let _ = card.expiry_full();
        let _ = card.is_valid(today);
        let _ = card.validate(today);
        let _ = card.summary(today);
        let _ = format!("{}", card);
        let _ = format!("{:?}", card);
    }
});
