//! BIN (Bank Identification Number) lookup.
//!
//! Issuer metadata for a card's leading six digits comes from an external
//! service, so it is modeled as a capability: the [`BinLookup`] trait has
//! one method and the rest of the crate never depends on any concrete
//! provider. Parsing, validation and formatting all work with the
//! capability entirely absent.
//!
//! The bundled [`BinlistClient`] (feature `lookup`) queries
//! `lookup.binlist.net`. Every failure mode (short prefix, timeout,
//! connection error, non-2xx status, malformed body) degrades to `None`;
//! a lookup can be unavailable, never fatal.

/// Capability interface for BIN metadata lookup.
///
/// Implementations must treat every failure as "no result".
pub trait BinLookup {
    /// Looks up metadata for a card number prefix of at least six digits.
    fn lookup(&self, prefix: &str) -> Option<BinDetails>;
}

/// Issuer metadata for one BIN.
///
/// Every field is optional; providers rarely know all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct BinDetails {
    /// Issuing bank name.
    pub bank: Option<String>,
    /// Product name.
    pub product: Option<String>,
    /// Card brand, e.g. "Visa/Dankort".
    pub brand: Option<String>,
    /// Issuing country name.
    pub country: Option<String>,
    /// Issuing country flag emoji.
    pub country_emoji: Option<String>,
    /// Payment scheme, e.g. "visa".
    pub scheme: Option<String>,
    /// Card or account type reported by the provider, e.g. "credit".
    pub card_type: Option<String>,
    /// Billing currency.
    pub currency: Option<String>,
    /// "Credit" or "Debit", derived from the reported card type.
    pub funding: Option<String>,
}

#[cfg(feature = "lookup")]
pub use binlist::BinlistClient;

#[cfg(feature = "lookup")]
mod binlist {
    use std::time::Duration;

    use log::debug;
    use serde::Deserialize;

    use super::{BinDetails, BinLookup};

    const ENDPOINT: &str = "https://lookup.binlist.net";
    const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// [`BinLookup`] provider backed by the free binlist.net service.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ccparse::bin::{BinLookup, BinlistClient};
    ///
    /// let client = BinlistClient::new();
    /// if let Some(details) = client.lookup("411111") {
    ///     println!("scheme: {}", details.scheme.as_deref().unwrap_or("?"));
    /// }
    /// ```
    #[derive(Debug, Clone)]
    pub struct BinlistClient {
        endpoint: String,
        timeout: Duration,
    }

    impl BinlistClient {
        /// Creates a client with the default 10 second timeout.
        pub fn new() -> Self {
            Self::with_timeout(DEFAULT_TIMEOUT)
        }

        /// Creates a client with a custom request timeout.
        pub fn with_timeout(timeout: Duration) -> Self {
            Self {
                endpoint: ENDPOINT.to_string(),
                timeout,
            }
        }

        /// Points the client at a different endpoint (tests, mirrors).
        pub fn with_endpoint(endpoint: impl Into<String>, timeout: Duration) -> Self {
            Self {
                endpoint: endpoint.into(),
                timeout,
            }
        }
    }

    impl Default for BinlistClient {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BinLookup for BinlistClient {
        fn lookup(&self, prefix: &str) -> Option<BinDetails> {
            let digits: String = prefix.chars().filter(char::is_ascii_digit).collect();
            if digits.len() < 6 {
                return None;
            }
            let bin = &digits[..6];

            // A client that cannot be constructed degrades like any other
            // lookup failure.
            let client = reqwest::blocking::Client::builder()
                .timeout(self.timeout)
                .user_agent(concat!("ccparse/", env!("CARGO_PKG_VERSION")))
                .build()
                .ok()?;

            let url = format!("{}/{}", self.endpoint, bin);
            let response = match client
                .get(&url)
                .header(reqwest::header::ACCEPT, "application/json")
                .send()
            {
                Ok(response) => response,
                Err(err) => {
                    debug!("BIN lookup for {} failed: {}", bin, err);
                    return None;
                }
            };

            if !response.status().is_success() {
                debug!("BIN lookup for {} returned {}", bin, response.status());
                return None;
            }

            match response.json::<BinlistResponse>() {
                Ok(body) => Some(body.into_details()),
                Err(err) => {
                    debug!("BIN lookup for {} returned malformed body: {}", bin, err);
                    None
                }
            }
        }
    }

    /// Wire shape of a binlist.net response; only the fields we surface.
    #[derive(Debug, Default, Deserialize)]
    pub(super) struct BinlistResponse {
        #[serde(default)]
        pub(super) scheme: Option<String>,
        #[serde(default, rename = "type")]
        pub(super) card_type: Option<String>,
        #[serde(default)]
        pub(super) brand: Option<String>,
        #[serde(default)]
        pub(super) name: Option<String>,
        #[serde(default)]
        pub(super) country: Option<BinlistCountry>,
        #[serde(default)]
        pub(super) bank: Option<BinlistBank>,
    }

    #[derive(Debug, Default, Deserialize)]
    pub(super) struct BinlistCountry {
        #[serde(default)]
        pub(super) name: Option<String>,
        #[serde(default)]
        pub(super) emoji: Option<String>,
        #[serde(default)]
        pub(super) currency: Option<String>,
    }

    #[derive(Debug, Default, Deserialize)]
    pub(super) struct BinlistBank {
        #[serde(default)]
        pub(super) name: Option<String>,
    }

    impl BinlistResponse {
        pub(super) fn into_details(self) -> BinDetails {
            let funding = self.card_type.as_deref().map(|t| {
                if t.eq_ignore_ascii_case("credit") {
                    "Credit".to_string()
                } else {
                    "Debit".to_string()
                }
            });

            let (country, country_emoji, currency) = match self.country {
                Some(c) => (c.name, c.emoji, c.currency),
                None => (None, None, None),
            };

            BinDetails {
                bank: self.bank.and_then(|b| b.name),
                product: self.name,
                brand: self.brand,
                country,
                country_emoji,
                scheme: self.scheme,
                card_type: self.card_type,
                currency,
                funding,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticProvider(Option<BinDetails>);

    impl BinLookup for StaticProvider {
        fn lookup(&self, _prefix: &str) -> Option<BinDetails> {
            self.0.clone()
        }
    }

    #[test]
    fn test_trait_object_usable() {
        let provider: &dyn BinLookup = &StaticProvider(Some(BinDetails {
            scheme: Some("visa".to_string()),
            ..BinDetails::default()
        }));

        let details = provider.lookup("411111").unwrap();
        assert_eq!(details.scheme.as_deref(), Some("visa"));
    }

    #[test]
    fn test_unavailable_is_none() {
        let provider = StaticProvider(None);
        assert_eq!(provider.lookup("411111"), None);
    }

    #[cfg(feature = "lookup")]
    mod binlist_tests {
        use super::super::binlist::{BinlistBank, BinlistCountry, BinlistResponse};

        #[test]
        fn test_response_conversion() {
            let response = BinlistResponse {
                scheme: Some("visa".to_string()),
                card_type: Some("credit".to_string()),
                brand: Some("Visa Classic".to_string()),
                name: None,
                country: Some(BinlistCountry {
                    name: Some("Denmark".to_string()),
                    emoji: Some("\u{1f1e9}\u{1f1f0}".to_string()),
                    currency: Some("DKK".to_string()),
                }),
                bank: Some(BinlistBank {
                    name: Some("Jyske Bank".to_string()),
                }),
            };

            let details = response.into_details();
            assert_eq!(details.bank.as_deref(), Some("Jyske Bank"));
            assert_eq!(details.country.as_deref(), Some("Denmark"));
            assert_eq!(details.currency.as_deref(), Some("DKK"));
            assert_eq!(details.funding.as_deref(), Some("Credit"));
        }

        #[test]
        fn test_debit_funding() {
            let response = BinlistResponse {
                card_type: Some("debit".to_string()),
                ..BinlistResponse::default()
            };
            assert_eq!(response.into_details().funding.as_deref(), Some("Debit"));
        }

        #[test]
        fn test_empty_response_converts() {
            let details = BinlistResponse::default().into_details();
            assert_eq!(details.bank, None);
            assert_eq!(details.funding, None);
        }
    }
}
