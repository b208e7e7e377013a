//! Fuzz target for the field controller.
//!
//! Arbitrary edit sequences must keep the raw/formatted invariant: stripping
//! the display text yields exactly the raw digits, within the field's cap.

#![no_main]

use card_entry::{format, FieldController, FieldKind, FieldState};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut fields = [
        FieldController::new(FieldKind::Number),
        FieldController::new(FieldKind::ExpiryDate),
        FieldController::new(FieldKind::Cvc),
    ];

    for chunk in data.split(|&b| b == 0) {
        let text = String::from_utf8_lossy(chunk);
        for field in &mut fields {
            let edit = field.edit(&text);
            assert_eq!(format::strip(&edit.text).len(), field.digit_count());
            match field.state() {
                FieldState::Empty => assert!(field.is_empty()),
                FieldState::Complete => assert!(field.result().is_valid()),
                FieldState::Editing => assert!(!field.is_empty()),
            }
        }
    }
});
