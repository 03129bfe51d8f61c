//! Input text normalization.
//!
//! # Responsibility
//! - Strip diacritics (combining marks) from user-provided codes.
//! - Uppercase with the default, locale-independent case map.
//!
//! # Invariants
//! - `normalize(normalize(x)) == normalize(x)`.
//! - Uppercasing maps one character to one character. Characters whose
//!   uppercase form is longer (`ß`, `ﬀ`) are kept as they are, so
//!   normalization never lengthens a code.
//! - Empty input yields an empty string.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Removes diacritics and uppercases `input`.
///
/// Decomposes to NFD, drops combining marks and recomposes to NFC, before
/// and after uppercasing, so the result is a fixed point.
pub fn normalize(input: &str) -> String {
    let folded: String = strip_marks(input).chars().map(upper_char).collect();
    strip_marks(&folded)
}

/// Single-character uppercase mapping.
fn upper_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(mapped), None) => mapped,
        _ => c,
    }
}

// Drops all combining marks (Mn, Mc, Me).
fn strip_marks(input: &str) -> String {
    input
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .nfc()
        .collect()
}
