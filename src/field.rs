//! Per-field entry state: raw digits in, formatted text and a verdict out.
//!
//! A [`FieldController`] owns exactly one field's raw digits. Every edit runs
//! the same pipeline — strip non-digits, truncate to the field's cap, format,
//! validate — and hands back the formatted text plus the validation result,
//! which is all the owner needs to redraw the field. The raw digit buffer is
//! zeroized whenever it is cleared or dropped, and `Debug` output only ever
//! shows redacted text.

use std::fmt;

use zeroize::Zeroize;

use crate::classify::classify;
use crate::format;
use crate::mask;
use crate::network::{CardNetwork, MAX_NUMBER_DIGITS};
use crate::validate::{self, ValidationResult};

/// Which of the three inputs a field controller is bound to.
///
/// Fixed at construction; it selects the formatter/validator pair and the
/// digit cap the controller applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldKind {
    /// The card number (PAN) field.
    Number,
    /// The MM/YY expiry field.
    ExpiryDate,
    /// The CVC field.
    Cvc,
}

impl FieldKind {
    /// Short lowercase name, for logs and CLI output.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::ExpiryDate => "expiry",
            Self::Cvc => "cvc",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Lifecycle of a single field's entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldState {
    /// Nothing typed (construction, or after a clear).
    #[default]
    Empty,
    /// Digits present, entry not yet valid.
    Editing,
    /// The validator accepted the entry; editing again leaves this state.
    Complete,
}

/// The raw digit buffer behind one field.
///
/// Fixed-size so a card number never lives in a reallocating heap string;
/// zeroized on clear and on drop.
struct RawInput {
    digits: [u8; MAX_NUMBER_DIGITS],
    len: u8,
}

impl RawInput {
    const fn new() -> Self {
        Self {
            digits: [0; MAX_NUMBER_DIGITS],
            len: 0,
        }
    }

    fn clear(&mut self) {
        self.digits.zeroize();
        self.len = 0;
    }

    fn push(&mut self, digit: u8) {
        if (self.len as usize) < MAX_NUMBER_DIGITS {
            self.digits[self.len as usize] = digit;
            self.len += 1;
        }
    }

    fn len(&self) -> usize {
        self.len as usize
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn text(&self) -> String {
        self.digits[..self.len as usize]
            .iter()
            .map(|&d| (b'0' + d) as char)
            .collect()
    }
}

impl Drop for RawInput {
    fn drop(&mut self) {
        self.digits.zeroize();
    }
}

/// What an edit produced: the field's new display text and verdict.
#[derive(Clone, PartialEq, Eq)]
pub struct FieldEdit {
    /// The formatted text the field now shows.
    pub text: String,
    /// The validation result for the new entry.
    pub result: ValidationResult,
}

impl fmt::Debug for FieldEdit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldEdit")
            .field("text", &mask::redact(&self.text))
            .field("result", &self.result)
            .finish()
    }
}

/// Owns one field's raw input and runs the edit pipeline on every change.
pub struct FieldController {
    kind: FieldKind,
    raw: RawInput,
    text: String,
    network: CardNetwork,
    state: FieldState,
    result: ValidationResult,
}

impl FieldController {
    /// A fresh, empty field of the given kind.
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            raw: RawInput::new(),
            text: String::new(),
            network: CardNetwork::Unknown,
            state: FieldState::Empty,
            result: ValidationResult::Incomplete,
        }
    }

    /// The kind this field was constructed for.
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Current lifecycle state.
    pub const fn state(&self) -> FieldState {
        self.state
    }

    /// Result of validating the current entry.
    pub const fn result(&self) -> ValidationResult {
        self.result
    }

    /// For the number field, the network detected from the prefix; for the
    /// CVC field, the network imposed by the form.
    pub const fn network(&self) -> CardNetwork {
        self.network
    }

    /// The formatted text the field shows.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether no digits have been entered.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// How many raw digits have been entered.
    pub fn digit_count(&self) -> usize {
        self.raw.len()
    }

    /// Replaces the entry with `candidate`, running the full pipeline:
    /// strip non-digits, truncate to the field's cap, format, validate.
    ///
    /// This is how a text-change event lands: the candidate is the field's
    /// whole proposed text, not a delta. Non-digit characters are dropped,
    /// so feeding back previously formatted text is harmless.
    pub fn edit(&mut self, candidate: &str) -> FieldEdit {
        let previous_state = self.state;

        if self.kind == FieldKind::Number {
            self.network = classify(candidate);
        }
        let cap = format::max_digits(self.kind, self.network);

        self.raw.clear();
        for c in candidate.chars().filter(char::is_ascii_digit).take(cap) {
            self.raw.push(c as u8 - b'0');
        }

        let raw_text = self.raw.text();
        self.text = format::format(&raw_text, self.kind, self.network);
        self.result = validate::validate(&raw_text, self.kind, self.network);
        self.state = if self.raw.is_empty() {
            FieldState::Empty
        } else if self.result.is_valid() {
            FieldState::Complete
        } else {
            FieldState::Editing
        };

        if self.state != previous_state {
            tracing::debug!(
                field = self.kind.name(),
                from = ?previous_state,
                to = ?self.state,
                "field state changed"
            );
        }

        FieldEdit {
            text: self.text.clone(),
            result: self.result,
        }
    }

    /// Appends one keystroke. Non-digits fall out in the pipeline, so this
    /// is a no-op returning the current text/result for anything but 0-9
    /// (or when the field is already at its cap).
    pub fn append(&mut self, c: char) -> FieldEdit {
        let mut candidate = self.raw.text();
        candidate.push(c);
        self.edit(&candidate)
    }

    /// Deletes the last digit, as a backspace would.
    pub fn delete_backward(&mut self) -> FieldEdit {
        let mut candidate = self.raw.text();
        candidate.pop();
        self.edit(&candidate)
    }

    /// Empties the field, zeroizing the raw buffer.
    pub fn clear(&mut self) {
        let _ = self.edit("");
    }

    /// Imposes a network context on this field (the form pushes the number
    /// field's detected network into the CVC field). Re-caps and re-judges
    /// any digits already entered.
    pub(crate) fn set_network(&mut self, network: CardNetwork) {
        if self.network == network {
            return;
        }
        self.network = network;
        if !self.raw.is_empty() {
            let candidate = self.raw.text();
            let _ = self.edit(&candidate);
        }
    }
}

impl fmt::Debug for FieldController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldController")
            .field("kind", &self.kind)
            .field("text", &mask::redact(&self.text))
            .field("state", &self.state)
            .field("result", &self.result)
            .field("network", &self.network)
            .finish()
    }
}
