//! Build script for codicefiscale_core.
//!
//! Picks the reference files compiled into the crate:
//! - `CODICEFISCALE_COMUNI_JSON`: full comuni-json array (default `data/comuni.json`)
//! - `CODICEFISCALE_NAZIONI_CSV`: ISTAT foreign-units CSV (default `data/nazioni.csv`)
//!
//! The resolved absolute paths are exported to the crate as
//! `CODICEFISCALE_COMUNI_PATH` and `CODICEFISCALE_NAZIONI_PATH`.

use std::path::{Path, PathBuf};

fn main() {
    let manifest_dir = PathBuf::from(
        std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string()),
    );

    let comuni = resolve_data_file(&manifest_dir, "CODICEFISCALE_COMUNI_JSON", "comuni.json");
    println!("cargo:rustc-env=CODICEFISCALE_COMUNI_PATH={}", comuni.display());

    let nazioni = resolve_data_file(&manifest_dir, "CODICEFISCALE_NAZIONI_CSV", "nazioni.csv");
    println!("cargo:rustc-env=CODICEFISCALE_NAZIONI_PATH={}", nazioni.display());

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={}", comuni.display());
    println!("cargo:rerun-if-changed={}", nazioni.display());
    println!("cargo:rerun-if-env-changed=CODICEFISCALE_COMUNI_JSON");
    println!("cargo:rerun-if-env-changed=CODICEFISCALE_NAZIONI_CSV");
}

/// Override from `var` if set, otherwise the bundled file under `data/`.
fn resolve_data_file(manifest_dir: &Path, var: &str, default_name: &str) -> PathBuf {
    match std::env::var_os(var) {
        Some(path) if !path.is_empty() => {
            let path = PathBuf::from(path);
            if path.is_absolute() {
                path
            } else {
                manifest_dir.join(path)
            }
        }
        _ => manifest_dir.join("data").join(default_name),
    }
}
