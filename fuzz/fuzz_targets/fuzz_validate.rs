//! Fuzz target for the three validators.
//!
//! They are total over arbitrary strings: never a panic, always one of the
//! three classifications.

#![no_main]

use card_entry::{
    classify, validate_cvc, validate_expiry, validate_expiry_at, validate_number, CardNetwork,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let _ = validate_number(data);
    let _ = validate_expiry(data);
    let _ = validate_expiry_at(data, (2030, 6));
    let _ = validate_cvc(data, CardNetwork::Unknown);
    let _ = validate_cvc(data, CardNetwork::Amex);
    let _ = classify(data);
});
