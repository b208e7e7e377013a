//! Fuzz target for the formatters.
//!
//! Formatting is total, and stripping a formatted string always returns a
//! prefix of the input's digits.

#![no_main]

use card_entry::{format, CardNetwork};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let stripped = format::strip(data);

    let number = format::format_number(data);
    assert!(format::strip(&number).len() <= stripped.len());
    assert!(stripped.starts_with(&format::strip(&number)));

    let expiry = format::format_expiry(data);
    assert!(format::strip(&expiry).len() <= 4);

    for network in [CardNetwork::Unknown, CardNetwork::Amex] {
        let cvc = format::format_cvc(data, network);
        assert!(cvc.len() <= network.cvc_length());
    }

    // Idempotence under re-stripping
    assert_eq!(format::format_number(&format::strip(&number)), number);
});
