//! Host-facing appearance configuration.
//!
//! The core never draws anything; fonts and colors are opaque data the host
//! sets through the form controller and the presentation layer reads back.
//! The one piece of logic here is the mapping from a field's validation
//! state to the *role* of the color it should be drawn in.

use std::fmt;

use crate::validate::ValidationResult;

/// An RGBA color, opaque to the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, 255 is opaque.
    pub a: u8,
}

impl Color {
    /// An opaque color from RGB channels.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// A color from all four channels.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// A font reference, opaque to the core.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    /// Font face name as the host toolkit knows it.
    pub name: String,
    /// Point size.
    pub size: f32,
}

impl Font {
    /// A font reference from a face name and point size.
    pub fn new(name: impl Into<String>, size: f32) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// Which configured color a field should currently be drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorRole {
    /// Plain entry in progress: the regular text color.
    Neutral,
    /// The entry validated: the validation color.
    Validation,
    /// The entry failed validation: the error color.
    Error,
    /// Nothing typed yet: the placeholder color.
    Placeholder,
}

/// Maps a field's validation result (and emptiness) to a color role.
pub const fn role_for(result: ValidationResult, empty: bool) -> ColorRole {
    if empty {
        return ColorRole::Placeholder;
    }
    match result {
        ValidationResult::Valid => ColorRole::Validation,
        ValidationResult::Invalid => ColorRole::Error,
        ValidationResult::Incomplete => ColorRole::Neutral,
    }
}

/// The host-configurable appearance values.
///
/// Defaults are a plain dark-on-light scheme; hosts overwrite whichever
/// entries they care about through the form controller setters.
#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    /// Field font; `None` leaves the presentation layer's default.
    pub font: Option<Font>,
    /// Color for in-progress entry.
    pub text_color: Color,
    /// Color for a validated entry.
    pub validation_color: Color,
    /// Color for a failed entry.
    pub error_color: Color,
    /// Color for placeholder text.
    pub placeholder_color: Color,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            font: None,
            text_color: Color::rgb(0x22, 0x22, 0x22),
            validation_color: Color::rgb(0x2e, 0x7d, 0x32),
            error_color: Color::rgb(0xc6, 0x28, 0x28),
            placeholder_color: Color::rgb(0x9e, 0x9e, 0x9e),
        }
    }
}

impl Appearance {
    /// The configured color for a role.
    pub const fn color(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Neutral => self.text_color,
            ColorRole::Validation => self.validation_color,
            ColorRole::Error => self.error_color,
            ColorRole::Placeholder => self.placeholder_color,
        }
    }
}

/// Rejected form configuration.
///
/// The original widget dropped bad configuration on the floor; here the
/// setter reports it so the host can tell a no-op from a success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A number placeholder whose length does not match a fully formatted
    /// number, so it would misalign with the entry text.
    PlaceholderLength {
        /// Length of the rejected placeholder.
        length: usize,
        /// Length the field expects.
        expected: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlaceholderLength { length, expected } => write!(
                f,
                "placeholder must be {} characters to align with the formatted number, got {}",
                expected, length
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
