//! Decoder and validator for the Italian codice fiscale.
//! This crate is the single source of truth for code grammar and checksum rules.

pub mod birth;
pub mod checksum;
pub mod decoder;
pub mod error;
pub mod lexer;
pub mod logging;
pub mod omocodia;
pub mod places;
pub mod resolver;
pub mod text;

pub use birth::{BirthInfo, Clock, FixedClock, LocalClock, Sex};
pub use checksum::compute_cin;
pub use decoder::{decode, is_valid, DecodedCodiceFiscale, Decoder};
pub use error::{DecodeComponent, DecodeError, DecodeResult, TableError};
pub use lexer::{split, RawParts};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig};
pub use omocodia::{
    canonical_code, decode_omocodia, digit_to_letter, encode_omocodia, letter_to_digit,
};
pub use places::{
    bundled_tables, load_countries_csv, load_countries_zip, load_municipalities_json, Country,
    Municipality, PlaceTables,
};
pub use resolver::{resolve_place, BirthPlace};
pub use text::normalize;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
