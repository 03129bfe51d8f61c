//! Readers for the municipality JSON and the foreign-units CSV/ZIP sources.
//!
//! # Invariants
//! - Country CSV input is ISO-8859-1, `;`-separated, with one header row.
//! - Country rows with fewer than 15 fields are skipped, never fatal.
//!
//! # See also
//! - `PlaceTables::new` for indexing the loaded records.

use crate::error::TableError;
use crate::places::model::{Country, Municipality};
use log::{info, warn};
use std::io::{Cursor, Read};
use std::path::Path;
use std::time::Instant;

/// Parses the UTF-8 municipalities JSON array.
pub fn load_municipalities_json(bytes: &[u8]) -> Result<Vec<Municipality>, TableError> {
    let started_at = Instant::now();
    let municipalities: Vec<Municipality> = serde_json::from_slice(bytes)?;
    info!(
        "event=load_municipalities module=places status=ok count={} duration_ms={}",
        municipalities.len(),
        started_at.elapsed().as_millis()
    );
    Ok(municipalities)
}

/// Parses the ISO-8859-1 foreign-units CSV.
pub fn load_countries_csv(bytes: &[u8]) -> Result<Vec<Country>, TableError> {
    let started_at = Instant::now();
    // WHATWG maps the ISO-8859-1 label to windows-1252, a superset for text data.
    let (text, _, had_errors) = encoding_rs::WINDOWS_1252.decode(bytes);
    if had_errors {
        warn!("event=load_countries module=places status=degraded reason=undecodable_bytes");
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut countries = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        match Country::from_fields(record.iter()) {
            Some(country) => countries.push(country),
            None => warn!(
                "event=load_countries module=places status=skipped row={} columns={}",
                row + 1,
                record.len()
            ),
        }
    }

    info!(
        "event=load_countries module=places status=ok count={} duration_ms={}",
        countries.len(),
        started_at.elapsed().as_millis()
    );
    Ok(countries)
}

/// Reads countries from the first `.csv` entry of a ZIP archive that yields
/// at least one record.
///
/// # Errors
/// - `TableError::Zip` when the archive cannot be read.
/// - `TableError::MissingCountryCsv` when no CSV entry yields records.
pub fn load_countries_zip(bytes: &[u8]) -> Result<Vec<Country>, TableError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;

    for index in 0..archive.len() {
        let mut file = archive.by_index(index)?;
        if !is_csv_entry(file.name()) {
            continue;
        }
        let mut content = Vec::new();
        file.read_to_end(&mut content)?;

        let countries = load_countries_csv(&content)?;
        if !countries.is_empty() {
            return Ok(countries);
        }
    }

    Err(TableError::MissingCountryCsv)
}

fn is_csv_entry(name: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}
