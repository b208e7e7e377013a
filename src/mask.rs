//! Masking for sensitive field content.
//!
//! Two concerns live here: the secure CVC display (every digit drawn as a
//! bullet, the way a password field draws keystrokes) and redaction for
//! anything that might end up in a log or `Debug` output — a full card
//! number never leaves the crate through either path.

/// The character a secure field draws instead of each digit.
pub const BULLET: char = '\u{2022}';

/// A bullet per concealed character, for secure CVC display.
///
/// # Example
///
/// ```
/// use card_entry::mask::conceal;
///
/// assert_eq!(conceal(3), "\u{2022}\u{2022}\u{2022}");
/// assert_eq!(conceal(0), "");
/// ```
#[inline]
pub fn conceal(len: usize) -> String {
    std::iter::repeat(BULLET).take(len).collect()
}

/// Redacts a digit string down to its last four digits.
///
/// Everything else, separators included, becomes `*`; four digits or fewer
/// redact entirely, since with that little input the "last four" would be
/// the whole secret. Safe for logs and `Debug` output.
///
/// # Example
///
/// ```
/// use card_entry::mask::redact;
///
/// assert_eq!(redact("4532015112830366"), "************0366");
/// assert_eq!(redact("4532 0151 1283 0366"), "***************0366");
/// assert_eq!(redact("123"), "***");
/// assert_eq!(redact(""), "");
/// ```
pub fn redact(input: &str) -> String {
    let digit_count = input.chars().filter(char::is_ascii_digit).count();
    if digit_count <= 4 {
        return "*".repeat(input.chars().count());
    }
    let reveal_from = digit_count - 4;
    let mut seen = 0;
    input
        .chars()
        .map(|c| {
            if c.is_ascii_digit() {
                seen += 1;
                if seen > reveal_from {
                    return c;
                }
            }
            '*'
        })
        .collect()
}
