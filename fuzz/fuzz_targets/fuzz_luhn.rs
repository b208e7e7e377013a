//! Fuzz target for the Luhn checksum.
//!
//! Checks totality plus the check-digit invariant: appending the computed
//! check digit always yields a passing sequence.

#![no_main]

use card_entry::luhn;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let digits: Vec<u8> = data.iter().map(|b| b % 10).collect();

    let _ = luhn::checksum(&digits);
    let _ = luhn::passes(&digits);

    if !digits.is_empty() && digits.len() < 19 {
        let check = luhn::check_digit(&digits);
        let mut full = digits.clone();
        full.push(check);
        assert!(luhn::passes(&full));
    }
});
