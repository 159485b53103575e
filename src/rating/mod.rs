//! Premium rating engine for private and commercial vehicles

mod tables;
mod private;
mod commercial;
pub mod loader;

pub use tables::{
    CommercialTariff, ComprehensiveRates, MinimumRate, PrivateTariff, SumInsuredBand,
    TonnageBand, TonnageSchedule, VehicleRiskTable,
};
pub use private::{PrivateRater, PrivateRatingResult, RiskCategory};
pub use commercial::{CommercialRater, CommercialRatingResult};
pub use loader::LoadedTariff;

use crate::error::Result;
use std::path::Path;

/// Container for the private and commercial tariffs
#[derive(Debug, Clone, Default)]
pub struct Tariff {
    pub private: PrivateTariff,
    pub commercial: CommercialTariff,
}

impl Tariff {
    /// The standard motor tariff
    pub fn default_tariff() -> Self {
        Self::default()
    }

    /// Standard rates with risk lists loaded from the default location (data/tariff/)
    pub fn from_csv() -> Result<Self> {
        Self::from_csv_path(Path::new(loader::DEFAULT_TARIFF_PATH))
    }

    /// Standard rates with risk lists loaded from a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let loaded = LoadedTariff::load_from(path)?;

        let mut tariff = Self::default_tariff();
        tariff.private.risk_table =
            VehicleRiskTable::new(loaded.high_risk_makes, loaded.toyota_high_risk_models);
        Ok(tariff)
    }

    pub fn private_rater(&self) -> PrivateRater {
        PrivateRater::new(self.private.clone())
    }

    pub fn commercial_rater(&self) -> CommercialRater {
        CommercialRater::new(self.commercial.clone())
    }
}
