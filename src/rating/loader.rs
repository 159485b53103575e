//! CSV-based tariff list loader
//!
//! Loads the high-risk make and Toyota model lists from a tariff directory.
//! Rates and minimums are not loadable.

use crate::error::{QuoteError, Result};
use log::info;
use std::fs::File;
use std::path::Path;

/// Default path to the tariff directory
pub const DEFAULT_TARIFF_PATH: &str = "data/tariff";

pub const HIGH_RISK_MAKES_FILE: &str = "high_risk_makes.csv";
pub const TOYOTA_HIGH_RISK_MODELS_FILE: &str = "toyota_high_risk_models.csv";

/// Load a single-column name list (header row, one name per line)
fn load_name_list(path: &Path, file_name: &str) -> Result<Vec<String>> {
    let file = File::open(path.join(file_name))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut names = Vec::new();

    for result in reader.records() {
        let record = result?;
        if let Some(name) = record.get(0).map(str::trim).filter(|n| !n.is_empty()) {
            names.push(name.to_string());
        }
    }

    if names.is_empty() {
        return Err(QuoteError::EmptyTariffList(file_name.to_string()));
    }

    Ok(names)
}

/// Load the makes rated high risk regardless of model
pub fn load_high_risk_makes(path: &Path) -> Result<Vec<String>> {
    load_name_list(path, HIGH_RISK_MAKES_FILE)
}

/// Load the Toyota models rated high risk
pub fn load_toyota_high_risk_models(path: &Path) -> Result<Vec<String>> {
    load_name_list(path, TOYOTA_HIGH_RISK_MODELS_FILE)
}

/// Risk lists loaded from a tariff directory
#[derive(Debug, Clone)]
pub struct LoadedTariff {
    pub high_risk_makes: Vec<String>,
    pub toyota_high_risk_models: Vec<String>,
}

impl LoadedTariff {
    /// Load the lists from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let loaded = Self {
            high_risk_makes: load_high_risk_makes(path)?,
            toyota_high_risk_models: load_toyota_high_risk_models(path)?,
        };
        info!(
            "Loaded tariff lists from {}: {} high-risk makes, {} Toyota models",
            path.display(),
            loaded.high_risk_makes.len(),
            loaded.toyota_high_risk_models.len()
        );
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::VehicleRiskTable;

    fn tariff_dir() -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_TARIFF_PATH)
    }

    #[test]
    fn test_load_tariff_lists() {
        let loaded = LoadedTariff::load_from(&tariff_dir()).expect("Failed to load tariff lists");
        let standard = VehicleRiskTable::standard();

        assert_eq!(loaded.high_risk_makes, standard.high_risk_makes());
        assert_eq!(loaded.toyota_high_risk_models, standard.toyota_high_risk_models());
    }

    #[test]
    fn test_missing_directory() {
        let result = LoadedTariff::load_from(Path::new("no/such/tariff/dir"));
        assert!(matches!(result, Err(QuoteError::Io(_))));
    }
}
