//! Birth-place code resolution.
//!
//! # Invariants
//! - Municipalities are looked up before countries; a code present in both
//!   resolves to the municipality.
//! - An Italian municipality always pairs with the Italy country record.

use crate::error::{DecodeError, DecodeResult};
use crate::omocodia::decode_omocodia;
use crate::places::{Country, Municipality, PlaceTables};

/// Resolved place of birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthPlace<'t> {
    /// Italian municipality; `country` is the Italy record.
    Municipality {
        municipality: &'t Municipality,
        country: &'t Country,
    },
    Foreign { country: &'t Country },
}

impl<'t> BirthPlace<'t> {
    /// Municipality name, or the Italian denomination of the country.
    pub fn display_name(&self) -> &'t str {
        match *self {
            Self::Municipality { municipality, .. } => &municipality.name,
            Self::Foreign { country } => &country.name_it,
        }
    }

    pub fn municipality(&self) -> Option<&'t Municipality> {
        match *self {
            Self::Municipality { municipality, .. } => Some(municipality),
            Self::Foreign { .. } => None,
        }
    }

    pub fn country(&self) -> &'t Country {
        match *self {
            Self::Municipality { country, .. } | Self::Foreign { country } => country,
        }
    }
}

/// Rebuilds the cadastral/AT code: the leading letter as-is, the other
/// three characters with omocodia reversed.
pub fn canonical_place_code(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(head) => {
            let mut code = head.to_string();
            code.push_str(&decode_omocodia(chars.as_str()));
            code
        }
        None => String::new(),
    }
}

/// Resolves a raw four-character place code against `tables`.
///
/// # Errors
/// - `DecodeError::PlaceUnknown` when neither table knows the code.
pub fn resolve_place<'t>(raw: &str, tables: &'t PlaceTables) -> DecodeResult<BirthPlace<'t>> {
    let code = canonical_place_code(raw);

    if let Some(municipality) = tables.municipality_by_cadastral(&code) {
        return Ok(BirthPlace::Municipality {
            municipality,
            country: tables.italy(),
        });
    }
    if let Some(country) = tables.country_by_at(&code) {
        return Ok(BirthPlace::Foreign { country });
    }
    Err(DecodeError::PlaceUnknown { code })
}
