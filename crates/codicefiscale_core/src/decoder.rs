//! Decoder facade.
//!
//! # Responsibility
//! - Run the full pipeline: normalize, split, birth data, place, checksum.
//! - Produce an immutable decoded record or the first error in that order.
//!
//! # Invariants
//! - The checksum is the last gate: shape, date and place errors win over a
//!   wrong CIN.
//! - `raw` keeps the slices exactly as written, omocodia letters included.
//! - The decode path performs no logging and no I/O.

use crate::birth::{reconstruct, Clock, LocalClock, Sex};
use crate::checksum::compute_cin;
use crate::error::{DecodeError, DecodeResult, TableError};
use crate::lexer::{split, RawParts};
use crate::omocodia::canonical_code;
use crate::places::{bundled_tables, Country, Municipality, PlaceTables};
use crate::resolver::resolve_place;
use crate::text::normalize;
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Fully decoded and verified codice fiscale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedCodiceFiscale {
    /// Normalized 16-character code.
    pub code: String,
    pub surname: String,
    pub name: String,
    pub sex: Sex,
    /// Calendar date; may differ from year/month/day for impossible days.
    pub birth_date: NaiveDate,
    pub birth_year: i32,
    pub birth_month: u32,
    pub birth_day: u32,
    /// Municipality name, or Italian denomination of the foreign country.
    pub birth_place_name: String,
    /// Present iff the place code is an Italian cadastral code.
    pub birth_place_municipality: Option<Municipality>,
    /// Italy for municipalities, otherwise the foreign country.
    pub birth_place_country: Country,
    pub raw: RawParts,
}

impl DecodedCodiceFiscale {
    /// Birth date at local midnight.
    ///
    /// Returns `None` when local midnight does not exist on that day.
    pub fn birth_datetime_local(&self) -> Option<DateTime<Local>> {
        self.birth_date
            .and_hms_opt(0, 0, 0)?
            .and_local_timezone(Local)
            .earliest()
    }

    /// Code with omocodia substitutions reverted and the CIN recomputed.
    pub fn canonical_code(&self) -> DecodeResult<String> {
        canonical_code(&self.code)
    }

    /// Whether any substitutable position carries an omocodia letter.
    pub fn is_omocode(&self) -> bool {
        self.canonical_code()
            .map(|canonical| canonical != self.code)
            .unwrap_or(false)
    }
}

/// Decoder over a set of place tables and a year source.
#[derive(Debug, Clone)]
pub struct Decoder<'t, C = LocalClock> {
    tables: &'t PlaceTables,
    clock: C,
}

impl<'t> Decoder<'t, LocalClock> {
    /// Creates a decoder reading the current year from the local clock.
    pub fn new(tables: &'t PlaceTables) -> Self {
        Self {
            tables,
            clock: LocalClock,
        }
    }
}

impl Decoder<'static, LocalClock> {
    /// Creates a decoder over the embedded reference tables.
    pub fn bundled() -> Result<Self, TableError> {
        Ok(Self::new(bundled_tables()?))
    }
}

impl<'t, C: Clock> Decoder<'t, C> {
    /// Replaces the year source used by the century rule.
    pub fn with_clock<K: Clock>(self, clock: K) -> Decoder<'t, K> {
        Decoder {
            tables: self.tables,
            clock,
        }
    }

    pub fn tables(&self) -> &'t PlaceTables {
        self.tables
    }

    /// Decodes and verifies `input`.
    ///
    /// # Errors
    /// In pipeline order:
    /// - `DecodeError::Shape` when the normalized input fails the grammar.
    /// - `DecodeError::Format` when the year or day field is malformed.
    /// - `DecodeError::PlaceUnknown` when the place code is not in the tables.
    /// - `DecodeError::Checksum` when the trailing CIN is wrong.
    pub fn decode(&self, input: &str) -> DecodeResult<DecodedCodiceFiscale> {
        let normalized = normalize(input);
        let raw = split(&normalized).map_err(|_| DecodeError::Shape {
            input: input.to_string(),
        })?;

        let birth = reconstruct(
            &raw.birth_year,
            &raw.birth_month,
            &raw.birth_day,
            &self.clock,
        )?;
        let place = resolve_place(&raw.birth_place, self.tables)?;

        let expected = compute_cin(&raw.code)?;
        if expected != raw.cin {
            return Err(DecodeError::Checksum {
                expected,
                got: raw.cin,
            });
        }

        Ok(DecodedCodiceFiscale {
            code: raw.code.clone(),
            surname: raw.surname.clone(),
            name: raw.name.clone(),
            sex: birth.sex,
            birth_date: birth.date,
            birth_year: birth.year,
            birth_month: birth.month,
            birth_day: birth.day,
            birth_place_name: place.display_name().to_string(),
            birth_place_municipality: place.municipality().cloned(),
            birth_place_country: place.country().clone(),
            raw,
        })
    }
}

/// Decodes `input` against the embedded tables and the local clock.
pub fn decode(input: &str) -> DecodeResult<DecodedCodiceFiscale> {
    Decoder::bundled()?.decode(input)
}

/// Returns whether `input` decodes successfully against the embedded tables.
pub fn is_valid(input: &str) -> bool {
    decode(input).is_ok()
}
