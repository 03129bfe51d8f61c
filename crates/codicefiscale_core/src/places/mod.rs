//! Reference tables for birth-place resolution.
//!
//! # Responsibility
//! - Define municipality and country records.
//! - Read the two documented source formats into indexed lookup tables.
//! - Provide the embedded reference excerpt, initialized once per process.
//!
//! # Invariants
//! - Tables are immutable after construction and safe to share across threads.
//! - Every index stored in a lookup map is a valid position in its sequence.

mod bundled;
mod loader;
pub mod model;
mod tables;

pub use bundled::bundled_tables;
pub use loader::{load_countries_csv, load_countries_zip, load_municipalities_json};
pub use model::{Country, Municipality, Province, Region, Zone};
pub use tables::PlaceTables;
