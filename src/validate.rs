//! Incremental validation of the three entry fields.
//!
//! Entry validation is a classification, not an error: every function here
//! is total over arbitrary strings, non-digits are ignored, and the result
//! says where the entry stands *right now* — still being typed
//! ([`Incomplete`](ValidationResult::Incomplete)), done and plausible
//! ([`Valid`](ValidationResult::Valid)), or done and wrong
//! ([`Invalid`](ValidationResult::Invalid)).
//!
//! # Example
//!
//! ```
//! use card_entry::{validate_number, ValidationResult};
//!
//! assert_eq!(validate_number("453201511283"), ValidationResult::Incomplete);
//! assert_eq!(validate_number("4532 0151 1283 0366"), ValidationResult::Valid);
//! assert_eq!(validate_number("4532015112830367"), ValidationResult::Invalid);
//! ```

use crate::classify::classify_digits;
use crate::expiry::{self, ExpiryDate};
use crate::field::FieldKind;
use crate::luhn;
use crate::network::CardNetwork;

/// Where a field's entry stands after the latest keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidationResult {
    /// The entry is complete and passes every check the field has.
    Valid,
    /// The entry is complete (or cannot be completed) and fails a check.
    Invalid,
    /// More digits are needed before the field can be judged.
    Incomplete,
}

impl ValidationResult {
    /// `true` for [`Valid`](Self::Valid).
    #[inline]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    /// `true` for [`Invalid`](Self::Invalid).
    #[inline]
    pub const fn is_invalid(self) -> bool {
        matches!(self, Self::Invalid)
    }

    /// `true` for [`Incomplete`](Self::Incomplete).
    #[inline]
    pub const fn is_incomplete(self) -> bool {
        matches!(self, Self::Incomplete)
    }
}

/// Classifies a number entry.
///
/// The network is detected from the prefix. Below the network's shortest
/// valid length (13 when no network is detected) the entry is `Incomplete`;
/// at a length the network accepts, the Luhn checksum decides `Valid` or
/// `Invalid`; between two accepted lengths (say a 14-digit Visa entry) the
/// user is presumed still typing and the entry stays `Incomplete`.
pub fn validate_number(raw: &str) -> ValidationResult {
    let digits: Vec<u8> = raw
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as u8)
        .collect();
    let network = classify_digits(&digits);

    if digits.len() < network.min_length() {
        return ValidationResult::Incomplete;
    }
    if !network.is_valid_length(digits.len()) {
        // Over the cap can only happen to callers that skipped the
        // formatter; treat it as a broken entry rather than a partial one.
        return if digits.len() > network.max_length() {
            ValidationResult::Invalid
        } else {
            ValidationResult::Incomplete
        };
    }
    if luhn::passes(&digits) {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid
    }
}

/// Classifies an expiry entry against the current month.
pub fn validate_expiry(raw: &str) -> ValidationResult {
    validate_expiry_at(raw, expiry::current_year_month())
}

/// Classifies an expiry entry against a pinned `(year, month)`.
///
/// Fewer than four digits is `Incomplete`; four digits parse as MMYY and are
/// `Invalid` on a bad month or a date strictly before the reference month.
///
/// # Example
///
/// ```
/// use card_entry::{validate_expiry_at, ValidationResult};
///
/// assert_eq!(validate_expiry_at("12", (2025, 6)), ValidationResult::Incomplete);
/// assert_eq!(validate_expiry_at("1225", (2025, 6)), ValidationResult::Valid);
/// assert_eq!(validate_expiry_at("1310", (2025, 6)), ValidationResult::Invalid);
/// assert_eq!(validate_expiry_at("0525", (2025, 6)), ValidationResult::Invalid);
/// ```
pub fn validate_expiry_at(raw: &str, today: (u16, u8)) -> ValidationResult {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < 4 {
        return ValidationResult::Incomplete;
    }
    match ExpiryDate::from_raw(&digits) {
        Some(date) if !date.is_expired_at(today) => ValidationResult::Valid,
        _ => ValidationResult::Invalid,
    }
}

/// Classifies a CVC entry for the given network.
///
/// Length is the only check a CVC admits: `Incomplete` below the network's
/// required count, `Valid` exactly at it. Anything longer slipped past the
/// formatter and is `Invalid`.
pub fn validate_cvc(raw: &str, network: CardNetwork) -> ValidationResult {
    let count = raw.chars().filter(char::is_ascii_digit).count();
    let required = network.cvc_length();
    if count < required {
        ValidationResult::Incomplete
    } else if count == required {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid
    }
}

/// Classifies an entry for a field kind.
///
/// `network` is the number field's detected network and is consulted for the
/// CVC only; the number entry carries its own prefix, and the expiry check
/// uses the system clock.
pub fn validate(raw: &str, kind: FieldKind, network: CardNetwork) -> ValidationResult {
    match kind {
        FieldKind::Number => validate_number(raw),
        FieldKind::ExpiryDate => validate_expiry(raw),
        FieldKind::Cvc => validate_cvc(raw, network),
    }
}
