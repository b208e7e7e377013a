//! Card networks and their per-network entry rules.
//!
//! A network is identified from the numeric prefix of the number field (see
//! [`crate::classify`]) and drives three things during entry: how many digits
//! the number field accepts, at which lengths the number can be complete, and
//! how many digits the CVC field requires.
//!
//! `Unknown` is a first-class value rather than an `Option`: an empty field,
//! or a prefix no network claims, classifies as `Unknown` and falls back to
//! the default length rules (13–19 digit numbers, 3-digit CVC).

use std::fmt;

/// Most digits any card number field accepts.
pub const MAX_NUMBER_DIGITS: usize = 19;

/// Card networks recognized by the classifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardNetwork {
    /// No registered prefix matches, or nothing has been typed yet.
    #[default]
    Unknown,
    /// Visa - prefix 4, lengths 13, 16, 19
    Visa,
    /// Mastercard - prefix 51-55, 2221-2720, length 16
    Mastercard,
    /// American Express - prefix 34, 37, length 15
    Amex,
    /// Discover - prefix 6011, 644-649, 65, length 16-19
    Discover,
    /// Diners Club - prefix 36, 38, 300-305, length 14-19
    DinersClub,
    /// JCB - prefix 3528-3589, length 16-19
    Jcb,
    /// UnionPay - prefix 62, length 16-19
    UnionPay,
    /// Maestro - prefix 50, 56-69, length 12-19
    Maestro,
    /// Mir - prefix 2200-2204, length 16-19
    Mir,
    /// RuPay - prefix 81, 82, length 16
    RuPay,
    /// Verve - prefix 506, 507, length 16-19
    Verve,
    /// Elo - prefix 509, 6362, 6363, length 16
    Elo,
    /// Troy - prefix 9792, length 16
    Troy,
    /// BC Card - prefix 94, length 16
    BcCard,
}

impl CardNetwork {
    /// Digit counts at which a number for this network can be complete.
    ///
    /// Sorted ascending. `Unknown` accepts the generic 13–19 range.
    #[inline]
    pub const fn valid_lengths(&self) -> &'static [u8] {
        match self {
            Self::Unknown => &[13, 14, 15, 16, 17, 18, 19],
            Self::Visa => &[13, 16, 19],
            Self::Mastercard => &[16],
            Self::Amex => &[15],
            Self::Discover => &[16, 17, 18, 19],
            Self::DinersClub => &[14, 15, 16, 17, 18, 19],
            Self::Jcb => &[16, 17, 18, 19],
            Self::UnionPay => &[16, 17, 18, 19],
            Self::Maestro => &[12, 13, 14, 15, 16, 17, 18, 19],
            Self::Mir => &[16, 17, 18, 19],
            Self::RuPay => &[16],
            Self::Verve => &[16, 17, 18, 19],
            Self::Elo => &[16],
            Self::Troy => &[16],
            Self::BcCard => &[16],
        }
    }

    /// Shortest digit count at which a number for this network is complete.
    ///
    /// Below this the number field is always `Incomplete`.
    #[inline]
    pub const fn min_length(&self) -> usize {
        self.valid_lengths()[0] as usize
    }

    /// Longest digit count for this network; the number field's input cap.
    #[inline]
    pub const fn max_length(&self) -> usize {
        let lengths = self.valid_lengths();
        lengths[lengths.len() - 1] as usize
    }

    /// Whether `length` digits can be a complete number for this network.
    #[inline]
    pub fn is_valid_length(&self, length: usize) -> bool {
        self.valid_lengths().iter().any(|&l| l as usize == length)
    }

    /// Digits the CVC field requires when this network is detected.
    ///
    /// American Express prints a 4-digit code; every other network (and an
    /// undetected one) uses 3.
    #[inline]
    pub const fn cvc_length(&self) -> usize {
        match self {
            Self::Amex => 4,
            _ => 3,
        }
    }

    /// Human-readable network name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "American Express",
            Self::Discover => "Discover",
            Self::DinersClub => "Diners Club",
            Self::Jcb => "JCB",
            Self::UnionPay => "UnionPay",
            Self::Maestro => "Maestro",
            Self::Mir => "Mir",
            Self::RuPay => "RuPay",
            Self::Verve => "Verve",
            Self::Elo => "Elo",
            Self::Troy => "Troy",
            Self::BcCard => "BC Card",
        }
    }
}

impl fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_tables() {
        assert!(CardNetwork::Visa.is_valid_length(13));
        assert!(CardNetwork::Visa.is_valid_length(16));
        assert!(CardNetwork::Visa.is_valid_length(19));
        assert!(!CardNetwork::Visa.is_valid_length(15));

        assert!(CardNetwork::Amex.is_valid_length(15));
        assert!(!CardNetwork::Amex.is_valid_length(16));

        assert!(CardNetwork::Unknown.is_valid_length(13));
        assert!(CardNetwork::Unknown.is_valid_length(19));
        assert!(!CardNetwork::Unknown.is_valid_length(12));
    }

    #[test]
    fn min_max_bracket_the_table() {
        for network in [
            CardNetwork::Unknown,
            CardNetwork::Visa,
            CardNetwork::Mastercard,
            CardNetwork::Amex,
            CardNetwork::Discover,
            CardNetwork::DinersClub,
            CardNetwork::Jcb,
            CardNetwork::UnionPay,
            CardNetwork::Maestro,
            CardNetwork::Mir,
            CardNetwork::RuPay,
            CardNetwork::Verve,
            CardNetwork::Elo,
            CardNetwork::Troy,
            CardNetwork::BcCard,
        ] {
            assert!(network.min_length() <= network.max_length());
            assert!(network.max_length() <= MAX_NUMBER_DIGITS);
            assert!(network.is_valid_length(network.min_length()));
            assert!(network.is_valid_length(network.max_length()));
        }
    }

    #[test]
    fn cvc_lengths() {
        assert_eq!(CardNetwork::Amex.cvc_length(), 4);
        assert_eq!(CardNetwork::Visa.cvc_length(), 3);
        assert_eq!(CardNetwork::Mastercard.cvc_length(), 3);
        assert_eq!(CardNetwork::Unknown.cvc_length(), 3);
    }

    #[test]
    fn default_is_unknown() {
        assert_eq!(CardNetwork::default(), CardNetwork::Unknown);
    }

    #[test]
    fn display_names() {
        assert_eq!(CardNetwork::Visa.to_string(), "Visa");
        assert_eq!(CardNetwork::Amex.name(), "American Express");
        assert_eq!(CardNetwork::Unknown.to_string(), "Unknown");
    }
}
