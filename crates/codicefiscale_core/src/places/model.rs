//! Municipality and foreign-country records.
//!
//! Municipality fields deserialize from the Italian keys of the
//! `comuni-json` dataset; country fields follow the ISTAT foreign-units
//! column order.

use serde::{Deserialize, Serialize};

/// Minimum number of columns in a foreign-units CSV row.
pub const COUNTRY_CSV_COLUMNS: usize = 15;

/// Province reference nested in a municipality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Province {
    #[serde(rename = "codice")]
    pub code: String,
    #[serde(rename = "nome")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    #[serde(rename = "codice")]
    pub code: String,
    #[serde(rename = "nome")]
    pub name: String,
}

/// Statistical macro-area (Nord-ovest, Centro, Isole, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    #[serde(rename = "codice")]
    pub code: String,
    #[serde(rename = "nome")]
    pub name: String,
}

/// Italian municipality (comune).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Municipality {
    #[serde(rename = "cap", default)]
    pub postal_codes: Vec<String>,
    /// ISTAT national code, e.g. `058091`.
    #[serde(rename = "codice")]
    pub national_code: String,
    /// Four-character code used in the codice fiscale, e.g. `H501`.
    #[serde(rename = "codiceCatastale")]
    pub cadastral_code: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "popolazione", default)]
    pub population: i64,
    #[serde(rename = "provincia")]
    pub province: Province,
    #[serde(rename = "regione")]
    pub region: Region,
    /// Two-letter province abbreviation, e.g. `RM`.
    #[serde(rename = "sigla")]
    pub province_abbreviation: String,
    #[serde(rename = "zona")]
    pub zone: Zone,
}

/// Foreign state or territory (nazione), Italy included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// `S` for states, `T` for territories.
    pub state_or_territory: String,
    pub continent_code: String,
    pub continent_name: String,
    pub area_code: String,
    pub area_name: String,
    pub istat_code: String,
    /// Italian denomination, used as display name.
    pub name_it: String,
    pub name_en: String,
    pub ministerial_code: String,
    /// Four-character code used in the codice fiscale, e.g. `Z103`.
    /// `n.d.` or empty when not assigned.
    pub at_code: String,
    pub unsd_m49_code: String,
    pub iso_3166_alpha2: String,
    pub iso_3166_alpha3: String,
    pub parent_istat_code: String,
    pub parent_iso_alpha3: String,
}

impl Country {
    /// Builds a country from one CSV row.
    ///
    /// Returns `None` when the row has fewer than `COUNTRY_CSV_COLUMNS` fields.
    pub fn from_fields<'a>(fields: impl IntoIterator<Item = &'a str>) -> Option<Self> {
        let fields: Vec<String> = fields
            .into_iter()
            .map(|field| field.trim().to_string())
            .collect();
        if fields.len() < COUNTRY_CSV_COLUMNS {
            return None;
        }
        let mut fields = fields.into_iter();
        let mut next = || fields.next().unwrap_or_default();

        Some(Self {
            state_or_territory: next(),
            continent_code: next(),
            continent_name: next(),
            area_code: next(),
            area_name: next(),
            istat_code: next(),
            name_it: next(),
            name_en: next(),
            ministerial_code: next(),
            at_code: next(),
            unsd_m49_code: next(),
            iso_3166_alpha2: next(),
            iso_3166_alpha3: next(),
            parent_istat_code: next(),
            parent_iso_alpha3: next(),
        })
    }

    /// Whether this record carries a usable AT code.
    pub fn has_at_code(&self) -> bool {
        !self.at_code.is_empty() && self.at_code != "n.d."
    }

    /// Whether this record is Italy itself.
    pub fn is_italy(&self) -> bool {
        self.name_it.eq_ignore_ascii_case("italia") || self.name_en.eq_ignore_ascii_case("italy")
    }
}
