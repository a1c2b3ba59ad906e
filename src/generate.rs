//! Test card number generation.
//!
//! Generates numbers that match an issuer's prefix/length rules and pass
//! the Luhn check, built on the same [`crate::luhn`] primitive the
//! validator uses. The numbers are synthetic: they belong to no account
//! and are only good for exercising parsers and validators.
//!
//! Random generation needs the `generate` feature (pulls in `rand`); the
//! deterministic variant is always available.
//!
//! # Example
//!
//! ```
//! use ccparse::generate::generate_card_deterministic;
//! use ccparse::issuer::{classify, Issuer};
//! use ccparse::luhn::is_luhn_valid;
//!
//! let number = generate_card_deterministic(Issuer::Visa).unwrap();
//! assert!(is_luhn_valid(&number));
//! assert_eq!(classify(&number), Issuer::Visa);
//! ```

use crate::issuer::Issuer;
use crate::luhn;

#[cfg(feature = "generate")]
use rand::Rng;

/// Issuers with a prefix pool to generate from.
pub const SUPPORTED: [Issuer; 7] = [
    Issuer::Visa,
    Issuer::MasterCard,
    Issuer::Amex,
    Issuer::Discover,
    Issuer::Jcb,
    Issuer::DinersClub,
    Issuer::UnionPay,
];

/// Returns the prefix pool for an issuer; empty for [`Issuer::Unknown`].
pub const fn prefixes(issuer: Issuer) -> &'static [&'static str] {
    match issuer {
        Issuer::Visa => &["4"],
        Issuer::MasterCard => &["51", "52", "53", "54", "55"],
        Issuer::Amex => &["34", "37"],
        Issuer::Discover => &["6011", "644", "645", "646", "647", "648", "649", "65"],
        Issuer::Jcb => &["3528", "3529", "353", "354", "355", "356", "357", "358"],
        Issuer::DinersClub => &["300", "301", "302", "303", "304", "305", "36", "38"],
        Issuer::UnionPay => &["62"],
        Issuer::Unknown => &[],
    }
}

/// Returns the generated number length for an issuer; 0 for
/// [`Issuer::Unknown`].
pub const fn default_length(issuer: Issuer) -> usize {
    match issuer {
        Issuer::Visa
        | Issuer::MasterCard
        | Issuer::Discover
        | Issuer::Jcb
        | Issuer::UnionPay => 16,
        Issuer::Amex => 15,
        Issuer::DinersClub => 14,
        Issuer::Unknown => 0,
    }
}

/// Generates a number for the issuer with random middle digits.
///
/// Returns `None` for [`Issuer::Unknown`].
#[cfg(feature = "generate")]
pub fn generate_card(issuer: Issuer) -> Option<String> {
    generate_card_with_rng(issuer, &mut rand::thread_rng())
}

/// Generates a number for the issuer using the provided RNG.
///
/// Seed the RNG for reproducible output.
#[cfg(feature = "generate")]
pub fn generate_card_with_rng<R: Rng>(issuer: Issuer, rng: &mut R) -> Option<String> {
    let pool = prefixes(issuer);
    if pool.is_empty() {
        return None;
    }

    let prefix = pool[rng.gen_range(0..pool.len())];
    build(prefix, default_length(issuer), || rng.gen_range(0..10))
}

/// Generates a number for the issuer deterministically.
///
/// Uses the issuer's first prefix with a zero fill; the same issuer always
/// produces the same number. Returns `None` for [`Issuer::Unknown`].
pub fn generate_card_deterministic(issuer: Issuer) -> Option<String> {
    let pool = prefixes(issuer);
    let prefix = pool.first()?;
    build(prefix, default_length(issuer), || 0)
}

/// Generates a Luhn-valid number from an arbitrary prefix and length.
///
/// Fills with zeros. Returns `None` when the prefix has no digits or does
/// not leave room for a check digit.
pub fn generate_with_prefix(prefix: &str, length: usize) -> Option<String> {
    build(prefix, length, || 0)
}

/// Builds prefix + fill digits + Luhn check digit.
fn build(prefix: &str, length: usize, mut fill: impl FnMut() -> u8) -> Option<String> {
    let mut digits: Vec<u8> = prefix
        .chars()
        .filter_map(|c| c.to_digit(10).map(|d| d as u8))
        .collect();

    if digits.is_empty() || digits.len() >= length {
        return None;
    }

    while digits.len() < length - 1 {
        digits.push(fill());
    }

    let check = luhn::check_digit(&digits);
    digits.push(check);

    Some(digits.iter().map(|&d| (b'0' + d) as char).collect())
}
