//! Entry-side shape checks for interactive input.

use crate::persist::FIELD_DELIMITER;

/// True when `text` has the exact `HH:MM` shape: five bytes, `:` at index 2,
/// ASCII digits everywhere else.
///
/// Digit ranges are not checked, so `"99:99"` passes. The permissive check
/// matches what the store and persistence layer actually require, which is
/// only the fixed-width form.
pub fn is_valid_time(text: &str) -> bool {
    let b = text.as_bytes();
    b.len() == 5
        && b[2] == b':'
        && b[0].is_ascii_digit()
        && b[1].is_ascii_digit()
        && b[3].is_ascii_digit()
        && b[4].is_ascii_digit()
}

/// True when `text` is safe to write as a delimited field: non-empty and
/// free of the persistence delimiter.
///
/// The flat-file format does no escaping, so a name containing the
/// delimiter would corrupt its line on reload. The interactive surface
/// rejects such input instead.
pub fn is_clean_field(text: &str) -> bool {
    !text.is_empty() && !text.contains(FIELD_DELIMITER)
}
