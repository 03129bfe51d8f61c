//! Embedded reference tables.
//!
//! The data files are compiled into the crate and parsed on first use. A
//! failed parse is returned to the caller and retried on the next call.
//!
//! By default these are the excerpts under `data/`. Setting
//! `CODICEFISCALE_COMUNI_JSON` / `CODICEFISCALE_NAZIONI_CSV` at build time
//! embeds the complete published files instead (see `build.rs`).

use crate::error::TableError;
use crate::places::loader::{load_countries_csv, load_municipalities_json};
use crate::places::tables::PlaceTables;
use once_cell::sync::OnceCell;

static MUNICIPALITIES_JSON: &[u8] = include_bytes!(env!("CODICEFISCALE_COMUNI_PATH"));
static COUNTRIES_CSV: &[u8] = include_bytes!(env!("CODICEFISCALE_NAZIONI_PATH"));

static BUNDLED_TABLES: OnceCell<PlaceTables> = OnceCell::new();

/// Returns the process-wide tables built from the embedded data.
pub fn bundled_tables() -> Result<&'static PlaceTables, TableError> {
    BUNDLED_TABLES.get_or_try_init(|| {
        let municipalities = load_municipalities_json(MUNICIPALITIES_JSON)?;
        let countries = load_countries_csv(COUNTRIES_CSV)?;
        PlaceTables::new(municipalities, countries)
    })
}
