//! The whole-form controller: three fields, one focus, two layouts.
//!
//! [`FormController`] owns the number, expiry, and CVC field controllers and
//! the little choreography between them: focus moves forward as fields
//! complete, the layout collapses the number field once entry moves on to
//! the detail fields, and every accepted edit is forwarded to the
//! host-supplied [`FormHandler`] tagged by field kind.
//!
//! The layout is a pure state value; animating between the two layouts is
//! the presentation layer's business, and a rapid flurry of focus changes
//! simply lands on whatever the last write said.

use std::fmt;

use crate::field::{FieldController, FieldEdit, FieldKind, FieldState};
use crate::format;
use crate::mask;
use crate::network::CardNetwork;
use crate::style::{self, Appearance, Color, ColorRole, ConfigError, Font};

/// Digits in the number layout the placeholder must align with.
const PLACEHOLDER_DIGITS: usize = 16;

/// The form's two layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutState {
    /// The number field is wide, expiry and CVC are collapsed.
    #[default]
    EnteringNumber,
    /// The number field is collapsed, expiry and CVC are wide.
    EnteringDetail,
}

/// Host-side receiver for form events.
///
/// Every method has a no-op default, so a host implements only what it
/// needs; `()` implements the trait for fully passive use.
pub trait FormHandler {
    /// The number field changed; `_text` is its current formatted text.
    fn number_edited(&mut self, _text: &str) {}

    /// The expiry field changed; `_text` is its current formatted text.
    fn expiry_edited(&mut self, _text: &str) {}

    /// The CVC field changed; `_text` is its current formatted text.
    fn cvc_edited(&mut self, _text: &str) {}

    /// The number field regained focus; return a previously captured number
    /// to redisplay it in full, or `None` to leave the field as it stands.
    fn begin_number_entry(&mut self) -> Option<String> {
        None
    }
}

impl FormHandler for () {}

/// Owns the three field controllers and sequences entry across them.
pub struct FormController<H> {
    number: FieldController,
    expiry: FieldController,
    cvc: FieldController,
    active: FieldKind,
    layout: LayoutState,
    appearance: Appearance,
    placeholder: Option<String>,
    cvc_secure: bool,
    handler: H,
}

impl<H: FormHandler> FormController<H> {
    /// A fresh form: all fields empty, number focused, number layout.
    pub fn new(handler: H) -> Self {
        Self {
            number: FieldController::new(FieldKind::Number),
            expiry: FieldController::new(FieldKind::ExpiryDate),
            cvc: FieldController::new(FieldKind::Cvc),
            active: FieldKind::Number,
            layout: LayoutState::EnteringNumber,
            appearance: Appearance::default(),
            placeholder: None,
            cvc_secure: false,
            handler,
        }
    }

    /// The host handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// The host handler, mutably.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Consumes the form and returns the handler.
    pub fn into_handler(self) -> H {
        self.handler
    }

    /// The field that currently has focus.
    pub const fn active(&self) -> FieldKind {
        self.active
    }

    /// The current layout.
    pub const fn layout(&self) -> LayoutState {
        self.layout
    }

    /// Read access to a field controller.
    pub const fn field(&self, kind: FieldKind) -> &FieldController {
        match kind {
            FieldKind::Number => &self.number,
            FieldKind::ExpiryDate => &self.expiry,
            FieldKind::Cvc => &self.cvc,
        }
    }

    fn field_mut(&mut self, kind: FieldKind) -> &mut FieldController {
        match kind {
            FieldKind::Number => &mut self.number,
            FieldKind::ExpiryDate => &mut self.expiry,
            FieldKind::Cvc => &mut self.cvc,
        }
    }

    /// Moves focus to `kind`.
    ///
    /// Leaving the number field collapses it ([`LayoutState::EnteringDetail`]).
    /// Returning to it asks the handler for a previously captured number to
    /// redisplay, then expands it again.
    pub fn focus(&mut self, kind: FieldKind) {
        if self.active == kind {
            return;
        }
        let resigned = self.active;
        if resigned == FieldKind::Number {
            self.layout = LayoutState::EnteringDetail;
        }
        if kind == FieldKind::Number && self.layout == LayoutState::EnteringDetail {
            if let Some(previous) = self.handler.begin_number_entry() {
                // Straight onto the field: a redisplay is not an edit, so no
                // handler callback and no auto-advance.
                let _ = self.number.edit(&previous);
                self.cvc.set_network(self.number.network());
            }
            self.layout = LayoutState::EnteringNumber;
        }
        self.active = kind;
        tracing::debug!(
            from = resigned.name(),
            to = kind.name(),
            layout = ?self.layout,
            "focus moved"
        );
    }

    /// Resigns the active field and focuses the next one in entry order:
    /// number, then expiry, then CVC (which keeps focus). Returns the newly
    /// active field.
    pub fn advance(&mut self) -> FieldKind {
        match self.active {
            FieldKind::Number => self.focus(FieldKind::ExpiryDate),
            FieldKind::ExpiryDate => self.focus(FieldKind::Cvc),
            FieldKind::Cvc => {}
        }
        self.active
    }

    /// Replaces the active field's text, forwarding the result to the
    /// handler. When the edit completes the field, focus advances.
    pub fn edit(&mut self, candidate: &str) -> FieldEdit {
        let kind = self.active;
        let previous_state = self.field(kind).state();
        let previous_text = self.field(kind).text().to_owned();
        let edit = self.field_mut(kind).edit(candidate);
        self.after_edit(kind, previous_state, &previous_text, &edit);
        edit
    }

    /// Types one keystroke into the active field.
    pub fn append(&mut self, c: char) -> FieldEdit {
        let kind = self.active;
        let previous_state = self.field(kind).state();
        let previous_text = self.field(kind).text().to_owned();
        let edit = self.field_mut(kind).append(c);
        self.after_edit(kind, previous_state, &previous_text, &edit);
        edit
    }

    /// Backspaces the active field.
    pub fn delete_backward(&mut self) -> FieldEdit {
        let kind = self.active;
        let previous_state = self.field(kind).state();
        let previous_text = self.field(kind).text().to_owned();
        let edit = self.field_mut(kind).delete_backward();
        self.after_edit(kind, previous_state, &previous_text, &edit);
        edit
    }

    fn after_edit(
        &mut self,
        kind: FieldKind,
        previous_state: FieldState,
        previous_text: &str,
        edit: &FieldEdit,
    ) {
        if kind == FieldKind::Number {
            self.cvc.set_network(self.number.network());
        }

        // A keystroke that bounced (non-digit, or the field was at its cap)
        // changes nothing and is not reported.
        if edit.text != previous_text {
            match kind {
                FieldKind::Number => self.handler.number_edited(&edit.text),
                FieldKind::ExpiryDate => self.handler.expiry_edited(&edit.text),
                FieldKind::Cvc => self.handler.cvc_edited(&edit.text),
            }
        }

        if previous_state != FieldState::Complete
            && self.field(kind).state() == FieldState::Complete
        {
            self.advance();
        }
    }

    /// Clears one field (zeroizing its raw digits). No handler callback.
    pub fn clear_field(&mut self, kind: FieldKind) {
        self.field_mut(kind).clear();
        if kind == FieldKind::Number {
            self.cvc.set_network(CardNetwork::Unknown);
        }
    }

    /// Clears all three fields and returns to the initial focus and layout.
    pub fn reset(&mut self) {
        self.number.clear();
        self.expiry.clear();
        self.cvc.clear();
        self.cvc.set_network(CardNetwork::Unknown);
        self.active = FieldKind::Number;
        self.layout = LayoutState::EnteringNumber;
    }

    /// Sets the field font.
    pub fn set_font(&mut self, font: Font) {
        self.appearance.font = Some(font);
    }

    /// Sets the color for in-progress entry.
    pub fn set_text_color(&mut self, color: Color) {
        self.appearance.text_color = color;
    }

    /// Sets the color for a validated entry.
    pub fn set_validation_color(&mut self, color: Color) {
        self.appearance.validation_color = color;
    }

    /// Sets the color for a failed entry.
    pub fn set_error_color(&mut self, color: Color) {
        self.appearance.error_color = color;
    }

    /// Sets the placeholder text color.
    pub fn set_placeholder_color(&mut self, color: Color) {
        self.appearance.placeholder_color = color;
    }

    /// Sets the number field placeholder.
    ///
    /// Rejected unless the text is exactly as long as a fully formatted
    /// 16-digit number (19 characters), so it aligns with the entry text.
    pub fn set_placeholder(&mut self, text: &str) -> Result<(), ConfigError> {
        let expected = format::formatted_len(PLACEHOLDER_DIGITS);
        let length = text.chars().count();
        if length != expected {
            return Err(ConfigError::PlaceholderLength { length, expected });
        }
        self.placeholder = Some(text.to_owned());
        Ok(())
    }

    /// Masks the CVC display with bullets (a password-style field).
    pub fn set_cvc_is_secure(&mut self, secure: bool) {
        self.cvc_secure = secure;
    }

    /// The configured appearance.
    pub const fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    /// The configured number placeholder, if any.
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// Whether the CVC display is masked.
    pub const fn cvc_is_secure(&self) -> bool {
        self.cvc_secure
    }

    /// The text the presentation layer should draw for a field: bullets for
    /// a secure CVC, the placeholder for an empty number field, the
    /// formatted entry otherwise.
    pub fn display_text(&self, kind: FieldKind) -> String {
        match kind {
            FieldKind::Cvc if self.cvc_secure => mask::conceal(self.cvc.digit_count()),
            FieldKind::Number if self.number.is_empty() => {
                self.placeholder.clone().unwrap_or_default()
            }
            _ => self.field(kind).text().to_owned(),
        }
    }

    /// Which configured color a field should be drawn in right now.
    pub fn color_role(&self, kind: FieldKind) -> ColorRole {
        let field = self.field(kind);
        style::role_for(field.result(), field.is_empty())
    }

    /// The concrete color for a field, resolved through the appearance.
    pub fn color(&self, kind: FieldKind) -> Color {
        self.appearance.color(self.color_role(kind))
    }
}

impl<H> fmt::Debug for FormController<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormController")
            .field("active", &self.active)
            .field("layout", &self.layout)
            .field("number", &self.number)
            .field("expiry", &self.expiry)
            .field("cvc", &self.cvc)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::ValidationResult;

    #[derive(Default)]
    struct Recorder {
        number: Vec<String>,
        expiry: Vec<String>,
        cvc: Vec<String>,
        stored: Option<String>,
        begin_calls: usize,
    }

    impl FormHandler for Recorder {
        fn number_edited(&mut self, text: &str) {
            self.number.push(text.to_owned());
        }

        fn expiry_edited(&mut self, text: &str) {
            self.expiry.push(text.to_owned());
        }

        fn cvc_edited(&mut self, text: &str) {
            self.cvc.push(text.to_owned());
        }

        fn begin_number_entry(&mut self) -> Option<String> {
            self.begin_calls += 1;
            self.stored.clone()
        }
    }

    fn type_str<H: FormHandler>(form: &mut FormController<H>, s: &str) {
        for c in s.chars() {
            form.append(c);
        }
    }

    #[test]
    fn initial_state() {
        let form = FormController::new(());
        assert_eq!(form.active(), FieldKind::Number);
        assert_eq!(form.layout(), LayoutState::EnteringNumber);
        assert!(form.field(FieldKind::Number).is_empty());
    }

    #[test]
    fn number_completion_advances_and_collapses() {
        let mut form = FormController::new(Recorder::default());
        type_str(&mut form, "4532015112830366");

        assert_eq!(form.active(), FieldKind::ExpiryDate);
        assert_eq!(form.layout(), LayoutState::EnteringDetail);
        assert_eq!(form.field(FieldKind::Number).state(), FieldState::Complete);

        let recorder = form.handler();
        assert_eq!(recorder.number.len(), 16, "one event per digit");
        assert_eq!(recorder.number.last().unwrap(), "4532 0151 1283 0366");
    }

    #[test]
    fn full_entry_flow() {
        let mut form = FormController::new(Recorder::default());
        type_str(&mut form, "4532015112830366");
        type_str(&mut form, "1249");
        assert_eq!(form.active(), FieldKind::Cvc);
        type_str(&mut form, "123");

        let recorder = form.handler();
        assert_eq!(recorder.expiry.last().unwrap(), "12/49");
        assert_eq!(recorder.cvc.last().unwrap(), "123");
        assert_eq!(form.field(FieldKind::Cvc).state(), FieldState::Complete);
        // CVC keeps focus; there is nowhere further to go
        assert_eq!(form.active(), FieldKind::Cvc);
    }

    #[test]
    fn amex_number_makes_cvc_want_four_digits() {
        let mut form = FormController::new(());
        type_str(&mut form, "378282246310005");
        assert_eq!(form.active(), FieldKind::ExpiryDate);
        form.focus(FieldKind::Cvc);

        type_str(&mut form, "123");
        assert_eq!(
            form.field(FieldKind::Cvc).result(),
            ValidationResult::Incomplete
        );
        type_str(&mut form, "4");
        assert_eq!(form.field(FieldKind::Cvc).result(), ValidationResult::Valid);
    }

    #[test]
    fn refocusing_number_redisplays_the_stored_entry() {
        let mut form = FormController::new(Recorder::default());
        type_str(&mut form, "4532015112830366");
        form.handler_mut().stored = Some("4532 0151 1283 0366".to_owned());
        let events_before = form.handler().number.len();

        form.focus(FieldKind::Number);

        assert_eq!(form.handler().begin_calls, 1);
        assert_eq!(form.active(), FieldKind::Number);
        assert_eq!(form.layout(), LayoutState::EnteringNumber);
        assert_eq!(form.field(FieldKind::Number).text(), "4532 0151 1283 0366");
        // A redisplay is not an edit
        assert_eq!(form.handler().number.len(), events_before);
    }

    #[test]
    fn refocusing_number_with_nothing_stored() {
        let mut form = FormController::new(Recorder::default());
        type_str(&mut form, "4532015112830366");
        form.focus(FieldKind::Number);
        assert_eq!(form.handler().begin_calls, 1);
        assert_eq!(form.layout(), LayoutState::EnteringNumber);
        // Field keeps whatever it had
        assert_eq!(form.field(FieldKind::Number).text(), "4532 0151 1283 0366");
    }

    #[test]
    fn initial_number_focus_never_asks_the_handler() {
        let mut form = FormController::new(Recorder::default());
        // Already focused: nothing resigns, nothing is asked
        form.focus(FieldKind::Number);
        assert_eq!(form.handler().begin_calls, 0);
        assert_eq!(form.layout(), LayoutState::EnteringNumber);
    }

    #[test]
    fn bounced_keystrokes_are_not_reported() {
        let mut form = FormController::new(Recorder::default());
        type_str(&mut form, "4532");
        let events = form.handler().number.len();

        form.append('x');
        form.append(' ');
        assert_eq!(form.handler().number.len(), events);
    }

    #[test]
    fn manual_focus_follows_the_same_layout_rules() {
        let mut form = FormController::new(());
        type_str(&mut form, "4532");
        form.focus(FieldKind::ExpiryDate);
        assert_eq!(form.layout(), LayoutState::EnteringDetail);
        form.focus(FieldKind::Cvc);
        assert_eq!(form.layout(), LayoutState::EnteringDetail);
    }

    #[test]
    fn placeholder_length_rule() {
        let mut form = FormController::new(());
        assert!(form.set_placeholder("XXXX XXXX XXXX XXXX").is_ok());
        assert_eq!(form.placeholder(), Some("XXXX XXXX XXXX XXXX"));

        let err = form.set_placeholder("1234").unwrap_err();
        assert_eq!(
            err,
            ConfigError::PlaceholderLength {
                length: 4,
                expected: 19
            }
        );
        // The rejected value did not overwrite the accepted one
        assert_eq!(form.placeholder(), Some("XXXX XXXX XXXX XXXX"));
    }

    #[test]
    fn display_text_placeholder_and_secure_cvc() {
        let mut form = FormController::new(());
        form.set_placeholder("XXXX XXXX XXXX XXXX").unwrap();
        assert_eq!(form.display_text(FieldKind::Number), "XXXX XXXX XXXX XXXX");

        type_str(&mut form, "4532");
        assert_eq!(form.display_text(FieldKind::Number), "4532");

        form.set_cvc_is_secure(true);
        form.focus(FieldKind::Cvc);
        type_str(&mut form, "123");
        assert_eq!(form.display_text(FieldKind::Cvc), "\u{2022}\u{2022}\u{2022}");
        form.set_cvc_is_secure(false);
        assert_eq!(form.display_text(FieldKind::Cvc), "123");
    }

    #[test]
    fn color_roles_track_validation() {
        let mut form = FormController::new(());
        assert_eq!(form.color_role(FieldKind::Number), ColorRole::Placeholder);

        type_str(&mut form, "4532");
        assert_eq!(form.color_role(FieldKind::Number), ColorRole::Neutral);

        type_str(&mut form, "015112830366");
        assert_eq!(form.color_role(FieldKind::Number), ColorRole::Validation);

        let mut bad = FormController::new(());
        type_str(&mut bad, "4532015112830367");
        assert_eq!(bad.color_role(FieldKind::Number), ColorRole::Error);
        assert_eq!(
            bad.color(FieldKind::Number),
            bad.appearance().error_color
        );
    }

    #[test]
    fn reset_restores_the_initial_form() {
        let mut form = FormController::new(Recorder::default());
        type_str(&mut form, "378282246310005");
        type_str(&mut form, "1249");
        type_str(&mut form, "1234");

        form.reset();
        assert_eq!(form.active(), FieldKind::Number);
        assert_eq!(form.layout(), LayoutState::EnteringNumber);
        for kind in [FieldKind::Number, FieldKind::ExpiryDate, FieldKind::Cvc] {
            assert!(form.field(kind).is_empty());
            assert_eq!(form.field(kind).state(), FieldState::Empty);
        }
        assert_eq!(form.field(FieldKind::Cvc).network(), CardNetwork::Unknown);
    }

    #[test]
    fn clearing_the_number_resets_the_cvc_network() {
        let mut form = FormController::new(());
        type_str(&mut form, "378282246310005");
        assert_eq!(form.field(FieldKind::Cvc).network(), CardNetwork::Amex);

        form.clear_field(FieldKind::Number);
        assert_eq!(form.field(FieldKind::Cvc).network(), CardNetwork::Unknown);
    }

    #[test]
    fn appearance_setters() {
        let mut form = FormController::new(());
        form.set_font(Font::new("Helvetica", 20.0));
        form.set_text_color(Color::rgb(0, 0, 255));
        form.set_validation_color(Color::rgb(0, 128, 0));
        form.set_error_color(Color::rgb(200, 0, 0));
        form.set_placeholder_color(Color::rgb(128, 128, 128));

        let appearance = form.appearance();
        assert_eq!(appearance.font.as_ref().unwrap().name, "Helvetica");
        assert_eq!(appearance.text_color, Color::rgb(0, 0, 255));
        assert_eq!(appearance.error_color, Color::rgb(200, 0, 0));
    }

    #[test]
    fn debug_never_shows_the_number() {
        let mut form = FormController::new(());
        type_str(&mut form, "4532015112830366");
        let debug = format!("{form:?}");
        assert!(!debug.contains("4532 0151"));
        assert!(!debug.contains("4532015112830366"));
    }
}
