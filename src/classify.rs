//! Card network classification from the numeric prefix.
//!
//! Networks are identified by their IIN prefix, the first 1–6 digits of the
//! number. Classification works on partial input, so the entry form can pick
//! up the network (and with it the digit caps and CVC length) from the first
//! distinguishing keystroke. An ambiguous partial prefix — `"22"` could still
//! become Mir or Mastercard — stays [`CardNetwork::Unknown`] until enough
//! digits arrive to decide.
//!
//! # Example
//!
//! ```
//! use card_entry::{classify, CardNetwork};
//!
//! assert_eq!(classify("4"), CardNetwork::Visa);
//! assert_eq!(classify("37"), CardNetwork::Amex);
//! assert_eq!(classify("4532 0151"), CardNetwork::Visa);
//! assert_eq!(classify(""), CardNetwork::Unknown);
//! ```

use crate::network::CardNetwork;

/// Classifies a number entry (possibly partial, possibly formatted).
///
/// Non-digit characters are skipped, so formatted text (`"4532 0151"`) and
/// raw digits classify identically. Returns [`CardNetwork::Unknown`] for
/// empty input or an unregistered prefix.
#[inline]
pub fn classify(input: &str) -> CardNetwork {
    let mut prefix = [0u8; 6];
    let mut len = 0;
    for c in input.chars() {
        if let Some(d) = c.to_digit(10) {
            prefix[len] = d as u8;
            len += 1;
            if len == prefix.len() {
                break;
            }
        }
    }
    classify_digits(&prefix[..len])
}

/// Classifies a slice of digit values (0–9).
///
/// Overlapping ranges are disambiguated by listing the more specific prefix
/// first; a pattern only matches once the input is long enough to commit.
#[inline]
pub fn classify_digits(digits: &[u8]) -> CardNetwork {
    match digits {
        [] => CardNetwork::Unknown,

        // Mir 2200-2204 sits inside territory Mastercard would otherwise claim
        [2, 2, 0, 0..=4, ..] => CardNetwork::Mir,

        // Mastercard: 51-55 and the 2221-2720 range
        [5, 1..=5, ..] => CardNetwork::Mastercard,
        [2, 2, 2, 1..=9, ..] => CardNetwork::Mastercard,
        [2, 2, 3..=9, _, ..] => CardNetwork::Mastercard,
        [2, 3..=6, _, _, ..] => CardNetwork::Mastercard,
        [2, 7, 0..=1, _, ..] => CardNetwork::Mastercard,
        [2, 7, 2, 0, ..] => CardNetwork::Mastercard,

        // American Express: 34, 37
        [3, 4, ..] | [3, 7, ..] => CardNetwork::Amex,

        // Diners Club: 36, 38, 300-305, 309
        [3, 6, ..] | [3, 8, ..] => CardNetwork::DinersClub,
        [3, 0, 0..=5, ..] => CardNetwork::DinersClub,
        [3, 0, 9, ..] => CardNetwork::DinersClub,

        // JCB: 3528-3589
        [3, 5, 2, 8..=9, ..] => CardNetwork::Jcb,
        [3, 5, 3..=8, _, ..] => CardNetwork::Jcb,

        // Visa: everything under 4
        [4, ..] => CardNetwork::Visa,

        // Verve 506-507 and Elo 509 carve exceptions out of Maestro's 50
        [5, 0, 6..=7, ..] => CardNetwork::Verve,
        [5, 0, 9, ..] => CardNetwork::Elo,
        [5, 0, ..] => CardNetwork::Maestro,
        [5, 6..=8, ..] => CardNetwork::Maestro,

        // Discover: 6011, 644-649, 65
        [6, 0, 1, 1, ..] => CardNetwork::Discover,
        [6, 4, 4..=9, ..] => CardNetwork::Discover,
        [6, 5, ..] => CardNetwork::Discover,

        // Elo 6362-6363, checked before the Maestro 63 fallback
        [6, 3, 6, 2..=3, ..] => CardNetwork::Elo,

        // UnionPay: 62
        [6, 2, ..] => CardNetwork::UnionPay,

        // Maestro takes the remaining 6x space
        [6, 0, ..] | [6, 1, ..] | [6, 3, ..] | [6, 6..=9, ..] => CardNetwork::Maestro,

        // RuPay: 81, 82
        [8, 1, ..] | [8, 2, ..] => CardNetwork::RuPay,

        // BC Card: 94
        [9, 4, ..] => CardNetwork::BcCard,

        // Troy: 9792
        [9, 7, 9, 2, ..] => CardNetwork::Troy,

        _ => CardNetwork::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Shortest digit sequence that pins each network down.
    #[test]
    fn distinguishing_prefixes() {
        assert_eq!(classify("4"), CardNetwork::Visa);
        assert_eq!(classify("51"), CardNetwork::Mastercard);
        assert_eq!(classify("55"), CardNetwork::Mastercard);
        assert_eq!(classify("2221"), CardNetwork::Mastercard);
        assert_eq!(classify("2720"), CardNetwork::Mastercard);
        assert_eq!(classify("34"), CardNetwork::Amex);
        assert_eq!(classify("37"), CardNetwork::Amex);
        assert_eq!(classify("6011"), CardNetwork::Discover);
        assert_eq!(classify("644"), CardNetwork::Discover);
        assert_eq!(classify("65"), CardNetwork::Discover);
        assert_eq!(classify("36"), CardNetwork::DinersClub);
        assert_eq!(classify("300"), CardNetwork::DinersClub);
        assert_eq!(classify("3528"), CardNetwork::Jcb);
        assert_eq!(classify("3589"), CardNetwork::Jcb);
        assert_eq!(classify("62"), CardNetwork::UnionPay);
        assert_eq!(classify("50"), CardNetwork::Maestro);
        assert_eq!(classify("56"), CardNetwork::Maestro);
        assert_eq!(classify("2200"), CardNetwork::Mir);
        assert_eq!(classify("2204"), CardNetwork::Mir);
        assert_eq!(classify("81"), CardNetwork::RuPay);
        assert_eq!(classify("506"), CardNetwork::Verve);
        assert_eq!(classify("509"), CardNetwork::Elo);
        assert_eq!(classify("6362"), CardNetwork::Elo);
        assert_eq!(classify("9792"), CardNetwork::Troy);
        assert_eq!(classify("94"), CardNetwork::BcCard);
    }

    #[test]
    fn overlapping_ranges_prefer_the_specific_network() {
        // 2200-2204 is Mir, 2221+ is Mastercard
        assert_eq!(classify("220400000"), CardNetwork::Mir);
        assert_eq!(classify("222100000"), CardNetwork::Mastercard);
        // 506/507/509 are carved out of Maestro's 50
        assert_eq!(classify("5060"), CardNetwork::Verve);
        assert_eq!(classify("5050"), CardNetwork::Maestro);
        // 6011 is Discover, other 60 is Maestro
        assert_eq!(classify("6011"), CardNetwork::Discover);
        assert_eq!(classify("6012"), CardNetwork::Maestro);
    }

    #[test]
    fn ambiguous_partial_prefix_stays_unknown() {
        // Could become Mir (2200) or Mastercard (2221-2720)
        assert_eq!(classify("2"), CardNetwork::Unknown);
        assert_eq!(classify("22"), CardNetwork::Unknown);
        // Could become Amex (34), Diners (36), or JCB (35xx)
        assert_eq!(classify("3"), CardNetwork::Unknown);
    }

    #[test]
    fn unregistered_prefixes_are_unknown() {
        assert_eq!(classify(""), CardNetwork::Unknown);
        assert_eq!(classify("0000000000000000"), CardNetwork::Unknown);
        assert_eq!(classify("1"), CardNetwork::Unknown);
        assert_eq!(classify("7777"), CardNetwork::Unknown);
        assert_eq!(classify_digits(&[]), CardNetwork::Unknown);
    }

    #[test]
    fn formatted_input_classifies_like_raw() {
        assert_eq!(classify("4532 0151 1283 0366"), CardNetwork::Visa);
        assert_eq!(classify("3782 8224 6310 005"), CardNetwork::Amex);
    }
}
