//! # card_entry
//!
//! The headless core of a credit-card entry form: number, expiry, and CVC
//! fields with input formatting, incremental validation, network detection,
//! focus sequencing, and a two-state collapse/expand layout. Rendering and
//! animation stay in the host; this crate owns everything that can be
//! expressed as data and state transitions.
//!
//! ## Quick start
//!
//! ```rust
//! use card_entry::{FieldKind, FormController, FormHandler, LayoutState};
//!
//! #[derive(Default)]
//! struct Screen {
//!     number: String,
//!     expiry: String,
//!     cvc: String,
//! }
//!
//! impl FormHandler for Screen {
//!     fn number_edited(&mut self, text: &str) {
//!         self.number = text.to_owned();
//!     }
//!     fn expiry_edited(&mut self, text: &str) {
//!         self.expiry = text.to_owned();
//!     }
//!     fn cvc_edited(&mut self, text: &str) {
//!         self.cvc = text.to_owned();
//!     }
//! }
//!
//! let mut form = FormController::new(Screen::default());
//! for c in "4532015112830366".chars() {
//!     form.append(c);
//! }
//!
//! assert_eq!(form.handler().number, "4532 0151 1283 0366");
//! // The completed number resigned focus and collapsed the layout
//! assert_eq!(form.active(), FieldKind::ExpiryDate);
//! assert_eq!(form.layout(), LayoutState::EnteringDetail);
//! ```
//!
//! ## Validation is a classification
//!
//! Nothing in the entry pipeline errors: junk characters are filtered,
//! overlong input is truncated, and a field is always in exactly one of
//! three states — still incomplete, valid, or invalid:
//!
//! ```rust
//! use card_entry::{validate_number, validate_expiry_at, validate_cvc,
//!     CardNetwork, ValidationResult};
//!
//! assert_eq!(validate_number("453201511283"), ValidationResult::Incomplete);
//! assert_eq!(validate_number("4532015112830366"), ValidationResult::Valid);
//! assert_eq!(validate_number("4532015112830367"), ValidationResult::Invalid);
//!
//! assert_eq!(validate_expiry_at("1225", (2025, 6)), ValidationResult::Valid);
//! assert_eq!(validate_expiry_at("1310", (2025, 6)), ValidationResult::Invalid);
//!
//! assert_eq!(validate_cvc("123", CardNetwork::Visa), ValidationResult::Valid);
//! assert_eq!(validate_cvc("123", CardNetwork::Amex), ValidationResult::Incomplete);
//! ```
//!
//! ## Network detection
//!
//! The number field classifies its network from the prefix as the user
//! types; the network drives the digit cap, the completion lengths, and the
//! CVC length over on the CVC field:
//!
//! ```rust
//! use card_entry::{classify, CardNetwork};
//!
//! assert_eq!(classify("4"), CardNetwork::Visa);
//! assert_eq!(classify("37"), CardNetwork::Amex);
//! assert_eq!(classify(""), CardNetwork::Unknown);
//! assert_eq!(CardNetwork::Amex.cvc_length(), 4);
//! ```
//!
//! ## Security
//!
//! Raw digit buffers are fixed-size arrays zeroized on clear and on drop
//! (`zeroize`), and the `Debug` output of every type that can hold a card
//! number is redacted to the last four digits. The crate never logs field
//! contents.
//!
//! ## Feature flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize`/`Deserialize` on the public state enums |
//! | `cli` | The `card-entry` command-line tool |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod classify;
pub mod expiry;
pub mod field;
pub mod form;
pub mod format;
pub mod luhn;
pub mod mask;
pub mod network;
pub mod style;
pub mod validate;

// Re-export the main types at the crate root
pub use classify::{classify, classify_digits};
pub use field::{FieldController, FieldEdit, FieldKind, FieldState};
pub use form::{FormController, FormHandler, LayoutState};
pub use network::{CardNetwork, MAX_NUMBER_DIGITS};
pub use style::{Appearance, Color, ColorRole, ConfigError, Font};
pub use validate::{
    validate, validate_cvc, validate_expiry, validate_expiry_at, validate_number, ValidationResult,
};
