//! Fuzz target for issuer classification.
//!
//! Tests that classification is total and stable under normalization.

#![no_main]

use ccparse::{classify, format};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Total: never panics, always yields a tag
    let issuer = classify(data);

    // Stable under the classifier's own normalization
    let stripped = format::strip_formatting(data);
    assert_eq!(classify(&stripped), issuer);

    // The CVV length convention is defined for every tag
    assert!(matches!(issuer.cvv_length(), 3 | 4));
});
