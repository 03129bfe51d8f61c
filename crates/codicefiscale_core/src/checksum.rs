//! CIN (control character) computation.
//!
//! # Invariants
//! - The CIN depends on the first 15 characters only.
//! - The result is always in `A-Z`.

use crate::error::{DecodeError, DecodeResult};

/// Odd-position weights for `0-9`.
const ODD_DIGITS: [u32; 10] = [1, 0, 5, 7, 9, 13, 15, 17, 19, 21];

/// Odd-position weights for `A-Z`.
const ODD_LETTERS: [u32; 26] = [
    1, 0, 5, 7, 9, 13, 15, 17, 19, 21, 2, 4, 18, 20, 11, 3, 6, 8, 12, 14, 16, 10, 22, 25, 24, 23,
];

const CIN_ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Computes the control character of a code or of its 15-character prefix.
///
/// # Errors
/// - `DecodeError::Length` when `code` is not 15 or 16 characters long.
/// - `DecodeError::InvalidCharacter` when the prefix holds a character
///   outside `[0-9A-Z]`.
pub fn compute_cin(code: &str) -> DecodeResult<char> {
    let len = code.chars().count();
    if !(15..=16).contains(&len) {
        return Err(DecodeError::Length { len });
    }

    let mut sum = 0u32;
    for (index, c) in code.chars().take(15).enumerate() {
        let position = index + 1;
        let weight = if position % 2 != 0 {
            odd_weight(c)
        } else {
            even_weight(c)
        };
        sum += weight.ok_or(DecodeError::InvalidCharacter { position, found: c })?;
    }

    Ok(char::from(CIN_ALPHABET[(sum % 26) as usize]))
}

fn odd_weight(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(ODD_DIGITS[(c as u8 - b'0') as usize]),
        'A'..='Z' => Some(ODD_LETTERS[(c as u8 - b'A') as usize]),
        _ => None,
    }
}

fn even_weight(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(u32::from(c as u8 - b'0')),
        'A'..='Z' => Some(u32::from(c as u8 - b'A')),
        _ => None,
    }
}
