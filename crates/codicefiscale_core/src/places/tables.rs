//! Indexed lookup tables over municipalities and countries.

use crate::error::TableError;
use crate::places::model::{Country, Municipality};
use log::debug;
use std::collections::HashMap;

/// Immutable municipality and country tables with their code indexes.
#[derive(Debug, Clone)]
pub struct PlaceTables {
    municipalities: Vec<Municipality>,
    countries: Vec<Country>,
    cadastral_to_municipality: HashMap<String, usize>,
    at_to_country: HashMap<String, usize>,
    italy_index: usize,
}

impl PlaceTables {
    /// Builds both lookup indexes.
    ///
    /// # Invariants
    /// - Every municipality is indexed by its cadastral code.
    /// - Countries are indexed by AT code, skipping empty and `n.d.` codes.
    /// - Duplicate codes keep the last record; the last Italy record wins.
    ///
    /// # Errors
    /// - `TableError::MissingItaly` when no country is Italy.
    pub fn new(
        municipalities: Vec<Municipality>,
        countries: Vec<Country>,
    ) -> Result<Self, TableError> {
        let mut italy_index = None;
        let mut at_to_country = HashMap::with_capacity(countries.len());
        for (index, country) in countries.iter().enumerate() {
            if country.is_italy() {
                italy_index = Some(index);
            }
            if country.has_at_code() {
                at_to_country.insert(country.at_code.clone(), index);
            }
        }
        let italy_index = italy_index.ok_or(TableError::MissingItaly)?;

        let cadastral_to_municipality = municipalities
            .iter()
            .enumerate()
            .map(|(index, municipality)| (municipality.cadastral_code.clone(), index))
            .collect::<HashMap<_, _>>();

        debug!(
            "event=tables_index module=places status=ok municipalities={} countries={} at_codes={}",
            municipalities.len(),
            countries.len(),
            at_to_country.len()
        );

        Ok(Self {
            municipalities,
            countries,
            cadastral_to_municipality,
            at_to_country,
            italy_index,
        })
    }

    pub fn municipalities(&self) -> &[Municipality] {
        &self.municipalities
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Returns the municipality with the given cadastral code.
    pub fn municipality_by_cadastral(&self, code: &str) -> Option<&Municipality> {
        self.cadastral_to_municipality
            .get(code)
            .and_then(|index| self.municipalities.get(*index))
    }

    /// Returns the country with the given AT code.
    pub fn country_by_at(&self, code: &str) -> Option<&Country> {
        self.at_to_country
            .get(code)
            .and_then(|index| self.countries.get(*index))
    }

    /// Returns the Italy record.
    pub fn italy(&self) -> &Country {
        &self.countries[self.italy_index]
    }
}

#[cfg(test)]
mod tests {
    use super::PlaceTables;
    use crate::error::TableError;
    use crate::places::model::{Country, Municipality};

    fn country(name_it: &str, name_en: &str, at_code: &str) -> Country {
        Country {
            name_it: name_it.to_string(),
            name_en: name_en.to_string(),
            at_code: at_code.to_string(),
            ..Country::default()
        }
    }

    fn municipality(name: &str, cadastral_code: &str) -> Municipality {
        Municipality {
            name: name.to_string(),
            cadastral_code: cadastral_code.to_string(),
            ..Municipality::default()
        }
    }

    #[test]
    fn indexes_both_tables() {
        let tables = PlaceTables::new(
            vec![municipality("Roma", "H501")],
            vec![
                country("Italia", "Italy", "n.d."),
                country("Belgio", "Belgium", "Z103"),
            ],
        )
        .unwrap();

        assert_eq!(tables.municipality_by_cadastral("H501").unwrap().name, "Roma");
        assert_eq!(tables.country_by_at("Z103").unwrap().name_it, "Belgio");
        assert_eq!(tables.italy().name_it, "Italia");
        assert!(tables.country_by_at("n.d.").is_none());
        assert!(tables.municipality_by_cadastral("Z103").is_none());
    }

    #[test]
    fn italy_matches_english_name_case_insensitively() {
        let tables =
            PlaceTables::new(Vec::new(), vec![country("Repubblica", "ITALY", "")]).unwrap();
        assert_eq!(tables.italy().name_en, "ITALY");
    }

    #[test]
    fn missing_italy_is_rejected() {
        let err = PlaceTables::new(Vec::new(), vec![country("Belgio", "Belgium", "Z103")])
            .unwrap_err();
        assert!(matches!(err, TableError::MissingItaly));
    }

    #[test]
    fn duplicate_codes_keep_last_record() {
        let tables = PlaceTables::new(
            vec![municipality("Vecchio", "A001"), municipality("Nuovo", "A001")],
            vec![country("Italia", "Italy", "")],
        )
        .unwrap();
        assert_eq!(tables.municipality_by_cadastral("A001").unwrap().name, "Nuovo");
    }
}
