//! Display formatting for the three entry fields.
//!
//! Each formatter takes whatever the user managed to type, keeps the digits,
//! caps them at the field's limit, and lays them out the way the field
//! displays them: the number in groups of four, the expiry as MM/YY, the CVC
//! bare. Stripping the separators back out always returns the exact raw
//! digits, so the edit pipeline can round-trip text through a formatter on
//! every keystroke without drift.
//!
//! # Example
//!
//! ```
//! use card_entry::{format, CardNetwork};
//!
//! assert_eq!(format::format_number("4532015112830366"), "4532 0151 1283 0366");
//! assert_eq!(format::format_expiry("1230"), "12/30");
//! assert_eq!(format::format_cvc("4321", CardNetwork::Amex), "4321");
//! assert_eq!(format::format_cvc("4321", CardNetwork::Visa), "432");
//! assert_eq!(format::strip("4532 0151"), "45320151");
//! ```

use crate::classify::classify;
use crate::field::FieldKind;
use crate::network::CardNetwork;

/// Separator between number groups.
const GROUP_SEPARATOR: char = ' ';

/// Separator between expiry month and year.
const EXPIRY_SEPARATOR: char = '/';

/// Drops everything but ASCII digits.
#[inline]
pub fn strip(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Most digits a field accepts, given the card network in play.
///
/// The network caps the number field at its longest valid length (19 when
/// unknown) and decides between a 3- and 4-digit CVC; the expiry field is
/// always MMYY.
pub fn max_digits(kind: FieldKind, network: CardNetwork) -> usize {
    match kind {
        FieldKind::Number => network.max_length(),
        FieldKind::ExpiryDate => 4,
        FieldKind::Cvc => network.cvc_length(),
    }
}

/// Formats number input: a space after every fourth digit.
///
/// The network is classified from the input itself, and caps the digit
/// count at its longest valid length.
pub fn format_number(input: &str) -> String {
    let network = classify(input);
    let cap = network.max_length();
    let mut out = String::with_capacity(cap + cap / 4);
    for (i, c) in input
        .chars()
        .filter(char::is_ascii_digit)
        .take(cap)
        .enumerate()
    {
        if i > 0 && i % 4 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out
}

/// Formats expiry input: `/` between month and year, at most four digits.
///
/// The separator appears once a third digit exists, so `"12"` stays `"12"`
/// and `"123"` becomes `"12/3"`.
pub fn format_expiry(input: &str) -> String {
    let mut out = String::with_capacity(5);
    for (i, c) in input.chars().filter(char::is_ascii_digit).take(4).enumerate() {
        if i == 2 {
            out.push(EXPIRY_SEPARATOR);
        }
        out.push(c);
    }
    out
}

/// Formats CVC input: digits only, capped at the network's CVC length.
pub fn format_cvc(input: &str, network: CardNetwork) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(network.cvc_length())
        .collect()
}

/// Formats input for a field kind.
///
/// `network` is the number field's detected network; it is consulted for the
/// CVC cap only (number input carries its own prefix, expiry needs none).
pub fn format(input: &str, kind: FieldKind, network: CardNetwork) -> String {
    match kind {
        FieldKind::Number => format_number(input),
        FieldKind::ExpiryDate => format_expiry(input),
        FieldKind::Cvc => format_cvc(input, network),
    }
}

/// Display length of a fully formatted number of `digit_count` digits
/// (one separator per started group after the first).
pub fn formatted_len(digit_count: usize) -> usize {
    if digit_count == 0 {
        0
    } else {
        digit_count + (digit_count - 1) / 4
    }
}
