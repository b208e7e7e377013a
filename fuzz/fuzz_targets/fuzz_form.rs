//! Fuzz target for the form controller.
//!
//! Keystrokes, focus moves, and configuration in arbitrary order must never
//! panic and must keep the Debug output free of the entered digits.

#![no_main]

use card_entry::{FieldKind, FormController, FormHandler};
use libfuzzer_sys::fuzz_target;

struct Remember(Option<String>);

impl FormHandler for Remember {
    fn number_edited(&mut self, text: &str) {
        self.0 = Some(text.to_owned());
    }

    fn begin_number_entry(&mut self) -> Option<String> {
        self.0.clone()
    }
}

fuzz_target!(|data: &[u8]| {
    let mut form = FormController::new(Remember(None));

    for &b in data {
        match b {
            0xf0 => form.focus(FieldKind::Number),
            0xf1 => form.focus(FieldKind::ExpiryDate),
            0xf2 => form.focus(FieldKind::Cvc),
            0xf3 => {
                form.advance();
            }
            0xf4 => {
                form.delete_backward();
            }
            0xf5 => form.clear_field(form.active()),
            0xf6 => form.reset(),
            0xf7 => {
                let _ = form.set_placeholder("XXXX XXXX XXXX XXXX");
            }
            _ => {
                form.append(b as char);
            }
        }

        // Display text never exceeds a fully formatted 19-digit number
        assert!(form.display_text(form.active()).chars().count() <= 23);
    }

    let _ = format!("{form:?}");
});
