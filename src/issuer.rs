//! Issuer classification by numeric prefix and length.
//!
//! Seven payment networks are recognized, each by a fixed prefix/length
//! rule over the normalized (digits-only) number:
//!
//! | Issuer | Prefix | Length |
//! |--------|--------|--------|
//! | Visa | 4 | 13, 16 |
//! | MasterCard | 51-55 | 16 |
//! | AMEX | 34, 37 | 15 |
//! | Discover | 6011, 644-649, 65 | 16 |
//! | JCB | 2131, 1800 / 35 | 15 / 16 |
//! | Diners Club | 300-305, 36, 38 | 14 |
//! | UnionPay | 62 | 16-19 |
//!
//! Rules are evaluated in the order above, first match wins; anything that
//! matches no rule classifies as [`Issuer::Unknown`].

use std::fmt;

use crate::format::strip_formatting;

/// A recognized card network, or [`Issuer::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Issuer {
    /// Visa - prefix 4, length 13 or 16.
    Visa,
    /// MasterCard - prefix 51-55, length 16.
    MasterCard,
    /// American Express - prefix 34 or 37, length 15.
    Amex,
    /// Discover - prefix 6011, 644-649 or 65, length 16.
    Discover,
    /// JCB - prefix 2131 or 1800 (length 15), or 35 (length 16).
    Jcb,
    /// Diners Club - prefix 300-305, 36 or 38, length 14.
    DinersClub,
    /// UnionPay - prefix 62, length 16-19.
    UnionPay,
    /// No rule matched.
    Unknown,
}

impl Issuer {
    /// Returns the display name for this issuer.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::MasterCard => "MasterCard",
            Self::Amex => "AMEX",
            Self::Discover => "Discover",
            Self::Jcb => "JCB",
            Self::DinersClub => "Diners Club",
            Self::UnionPay => "UnionPay",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns the CVV length convention for this issuer.
    ///
    /// AMEX prints a 4-digit code; every other network (Unknown included)
    /// uses 3 digits.
    #[inline]
    pub const fn cvv_length(&self) -> usize {
        match self {
            Self::Amex => 4,
            _ => 3,
        }
    }
}

impl fmt::Display for Issuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Ordered classification rules. Evaluated in sequence, first match wins;
/// the order is part of the contract for any prefix overlap.
const RULES: [(fn(&[u8]) -> bool, Issuer); 7] = [
    (is_visa, Issuer::Visa),
    (is_mastercard, Issuer::MasterCard),
    (is_amex, Issuer::Amex),
    (is_discover, Issuer::Discover),
    (is_jcb, Issuer::Jcb),
    (is_diners_club, Issuer::DinersClub),
    (is_unionpay, Issuer::UnionPay),
];

fn is_visa(d: &[u8]) -> bool {
    matches!(d.len(), 13 | 16) && d[0] == b'4'
}

fn is_mastercard(d: &[u8]) -> bool {
    d.len() == 16 && matches!(d, [b'5', b'1'..=b'5', ..])
}

fn is_amex(d: &[u8]) -> bool {
    d.len() == 15 && matches!(d, [b'3', b'4' | b'7', ..])
}

fn is_discover(d: &[u8]) -> bool {
    d.len() == 16
        && (d.starts_with(b"6011")
            || matches!(d, [b'6', b'4', b'4'..=b'9', ..])
            || d.starts_with(b"65"))
}

fn is_jcb(d: &[u8]) -> bool {
    match d.len() {
        15 => d.starts_with(b"2131") || d.starts_with(b"1800"),
        16 => d.starts_with(b"35"),
        _ => false,
    }
}

fn is_diners_club(d: &[u8]) -> bool {
    d.len() == 14 && matches!(d, [b'3', b'0', b'0'..=b'5', ..] | [b'3', b'6' | b'8', ..])
}

fn is_unionpay(d: &[u8]) -> bool {
    (16..=19).contains(&d.len()) && d.starts_with(b"62")
}

/// Classifies a card number into its issuer.
///
/// Non-digit characters are stripped first, so formatted input is accepted.
/// The whole normalized string must satisfy a rule (both prefix and length);
/// a prefix match alone is not enough. Total and deterministic; unknown or
/// empty input yields [`Issuer::Unknown`], never an error.
///
/// # Example
///
/// ```
/// use ccparse::issuer::{classify, Issuer};
///
/// assert_eq!(classify("4111111111111111"), Issuer::Visa);
/// assert_eq!(classify("3782 822463 10005"), Issuer::Amex);
/// assert_eq!(classify("9999999999999999"), Issuer::Unknown);
/// ```
pub fn classify(number: &str) -> Issuer {
    let digits = strip_formatting(number);
    let bytes = digits.as_bytes();

    if bytes.is_empty() {
        return Issuer::Unknown;
    }

    RULES
        .iter()
        .find(|(rule, _)| rule(bytes))
        .map(|&(_, issuer)| issuer)
        .unwrap_or(Issuer::Unknown)
}
