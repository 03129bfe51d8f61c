//! Lexical shape check and positional split.
//!
//! # Responsibility
//! - Validate the 16-character grammar of a normalized code.
//! - Expose the positional slices before any omocodia reversal.
//!
//! # Invariants
//! - A successful split always yields a 16-character ASCII code.
//! - `birth_month` is always one of `ABCDEHLMPRST`.
//! - `cin` is the last character of `code`.

use crate::error::{DecodeError, DecodeResult};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Month letters, January through December.
pub const MONTH_LETTERS: &str = "ABCDEHLMPRST";

static CODE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^([A-Z]{3})",
        r"([A-Z]{3})",
        r"(([A-Z0-9]{2})([ABCDEHLMPRST])([A-Z0-9]{2}))",
        r"([A-Z][A-Z0-9]{3})",
        r"([A-Z])$",
    ))
    .expect("valid codice fiscale regex")
});

/// Positional slices of a shape-valid code, as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawParts {
    /// Full normalized code.
    pub code: String,
    pub surname: String,
    pub name: String,
    /// Year, month and day block (positions 7-11).
    pub birth_date: String,
    pub birth_year: String,
    pub birth_month: String,
    pub birth_day: String,
    /// Cadastral or AT code, possibly with omocodia letters.
    pub birth_place: String,
    /// Check character as written.
    pub cin: char,
}

/// Splits an already normalized code into its positional slices.
///
/// # Errors
/// - `DecodeError::Shape` when `normalized` does not match the grammar.
pub fn split(normalized: &str) -> DecodeResult<RawParts> {
    let shape_error = || DecodeError::Shape {
        input: normalized.to_string(),
    };
    let caps = CODE_RE.captures(normalized).ok_or_else(shape_error)?;
    let cin = caps
        .get(8)
        .and_then(|m| m.as_str().chars().next())
        .ok_or_else(shape_error)?;
    let group = |index: usize| {
        caps.get(index)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    };

    Ok(RawParts {
        code: group(0),
        surname: group(1),
        name: group(2),
        birth_date: group(3),
        birth_year: group(4),
        birth_month: group(5),
        birth_day: group(6),
        birth_place: group(7),
        cin,
    })
}
