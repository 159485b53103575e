//! Private motor rating

use log::debug;
use serde::{Deserialize, Serialize};

use super::tables::{PrivateTariff, SumInsuredBand};
use crate::vehicle::PrivateRatingInput;

/// Risk category of a private vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskCategory {
    HighRisk,
    Other,
}

impl RiskCategory {
    pub fn label(&self) -> &'static str {
        match self {
            RiskCategory::HighRisk => "High Risk",
            RiskCategory::Other => "Other",
        }
    }
}

/// Premium breakdown for one private vehicle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrivateRatingResult {
    pub category: RiskCategory,
    pub base_premium: f64,
    pub excess_premium: f64,
    pub pvt_premium: f64,
    /// base + excess + pvt
    pub total_premium: f64,
}

/// Rates private vehicles against a private tariff
#[derive(Debug, Clone, Default)]
pub struct PrivateRater {
    tariff: PrivateTariff,
}

impl PrivateRater {
    pub fn new(tariff: PrivateTariff) -> Self {
        Self { tariff }
    }

    pub fn tariff(&self) -> &PrivateTariff {
        &self.tariff
    }

    /// Classify a vehicle from its normalized make and model
    pub fn classify(&self, make: &str, model: &str) -> RiskCategory {
        let risk = &self.tariff.risk_table;
        if risk.is_high_risk_make(make)
            || (make.eq_ignore_ascii_case("Toyota") && risk.is_high_risk_toyota_model(model))
        {
            RiskCategory::HighRisk
        } else {
            RiskCategory::Other
        }
    }

    /// Base premium before add-ons.
    ///
    /// A model containing the rare marker (checked on the title-cased model)
    /// takes the flat rare rate with no minimum; everything else is banded
    /// by sum insured.
    pub fn base_premium(&self, category: RiskCategory, model: &str, sum_insured: f64) -> f64 {
        if model.contains(self.tariff.rare_marker.as_str()) {
            return sum_insured * self.tariff.rare_rate;
        }

        let band = SumInsuredBand::from_amount(sum_insured);
        let rates = match category {
            RiskCategory::HighRisk => &self.tariff.high_risk_rates,
            RiskCategory::Other => &self.tariff.other_rates,
        };
        rates[band.index()].premium(sum_insured)
    }

    /// Rate one private vehicle
    pub fn rate(&self, input: &PrivateRatingInput) -> PrivateRatingResult {
        let make = input.normalized_make();
        let model = input.normalized_model();
        let sum_insured = input.sum_insured;

        let category = self.classify(&make, &model);
        let base_premium = self.base_premium(category, &model, sum_insured);

        let excess_premium = if input.include_excess {
            self.tariff.excess.premium(sum_insured)
        } else {
            0.0
        };
        let pvt_premium = if input.include_pvt {
            self.tariff.pvt.premium(sum_insured)
        } else {
            0.0
        };

        let total_premium = base_premium + excess_premium + pvt_premium;
        debug!(
            "Private {} {}: {} sum_insured={:.2} base={:.2} excess={:.2} pvt={:.2} total={:.2}",
            make, model, category.label(), sum_insured, base_premium, excess_premium, pvt_premium, total_premium
        );

        PrivateRatingResult {
            category,
            base_premium,
            excess_premium,
            pvt_premium,
            total_premium,
        }
    }
}
