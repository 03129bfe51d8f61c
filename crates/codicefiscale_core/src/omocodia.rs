//! Omocodia digit/letter substitution.
//!
//! # Responsibility
//! - Map the ten decimal digits to their omocodia letters and back.
//! - Rebuild the canonical (non-omocode) form of a code.
//!
//! # Invariants
//! - Both mappings are total over `char`: characters outside the table pass
//!   through unchanged.
//! - The two mappings are inverse bijections between `0-9` and `LMNPQRSTUV`.

use crate::checksum::compute_cin;
use crate::error::DecodeResult;
use crate::lexer::split;
use crate::text::normalize;

/// Omocodia letters indexed by the digit they replace.
const OMOCODIA_LETTERS: [u8; 10] = *b"LMNPQRSTUV";

/// Zero-based positions that may carry an omocodia letter:
/// birth year, birth day and the last three place characters.
const OMOCODIA_POSITIONS: [usize; 7] = [6, 7, 9, 10, 12, 13, 14];

/// Maps an omocodia letter to its digit; identity on anything else.
pub fn letter_to_digit(c: char) -> char {
    match c {
        'L' => '0',
        'M' => '1',
        'N' => '2',
        'P' => '3',
        'Q' => '4',
        'R' => '5',
        'S' => '6',
        'T' => '7',
        'U' => '8',
        'V' => '9',
        other => other,
    }
}

/// Maps a digit to its omocodia letter; identity on anything else.
pub fn digit_to_letter(c: char) -> char {
    match c.to_digit(10) {
        Some(digit) => char::from(OMOCODIA_LETTERS[digit as usize]),
        None => c,
    }
}

/// Replaces every omocodia letter in `s` with its digit.
pub fn decode_omocodia(s: &str) -> String {
    s.chars().map(letter_to_digit).collect()
}

/// Replaces every digit in `s` with its omocodia letter.
pub fn encode_omocodia(s: &str) -> String {
    s.chars().map(digit_to_letter).collect()
}

/// Returns the base form of `code`: substitutable positions reverted to
/// digits and the CIN recomputed.
///
/// `code` is normalized first and must then match the codice fiscale
/// grammar; its own CIN is not verified.
pub fn canonical_code(code: &str) -> DecodeResult<String> {
    let raw = split(&normalize(code))?;
    let mut chars: Vec<char> = raw.code.chars().collect();
    for position in OMOCODIA_POSITIONS {
        chars[position] = letter_to_digit(chars[position]);
    }
    let prefix: String = chars[..15].iter().collect();
    let cin = compute_cin(&prefix)?;

    let mut canonical = prefix;
    canonical.push(cin);
    Ok(canonical)
}
