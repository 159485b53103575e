//! Tariff tables: risk lists, sum insured bands, minimum-premium rates and
//! TPO fee schedules

use serde::{Deserialize, Serialize};

use crate::vehicle::{Subclass, UnitType};

/// A rate applied to the sum insured, never charging less than a minimum
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinimumRate {
    pub rate: f64,
    pub minimum: f64,
}

impl MinimumRate {
    pub const fn new(rate: f64, minimum: f64) -> Self {
        Self { rate, minimum }
    }

    /// `max(sum_insured * rate, minimum)`
    pub fn premium(&self, sum_insured: f64) -> f64 {
        (sum_insured * self.rate).max(self.minimum)
    }
}

/// Sum insured band used to pick the private base rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SumInsuredBand {
    /// Up to and including 1,000,000
    UpTo1M,
    /// Up to and including 1,500,000
    UpTo1_5M,
    /// Up to and including 2,500,000
    UpTo2_5M,
    /// Above 2,500,000
    Over2_5M,
}

impl SumInsuredBand {
    pub const ALL: [SumInsuredBand; 4] = [
        SumInsuredBand::UpTo1M,
        SumInsuredBand::UpTo1_5M,
        SumInsuredBand::UpTo2_5M,
        SumInsuredBand::Over2_5M,
    ];

    /// Determine band from sum insured (upper limits are inclusive)
    pub fn from_amount(sum_insured: f64) -> Self {
        if sum_insured <= 1_000_000.0 {
            SumInsuredBand::UpTo1M
        } else if sum_insured <= 1_500_000.0 {
            SumInsuredBand::UpTo1_5M
        } else if sum_insured <= 2_500_000.0 {
            SumInsuredBand::UpTo2_5M
        } else {
            SumInsuredBand::Over2_5M
        }
    }

    pub fn index(&self) -> usize {
        match self {
            SumInsuredBand::UpTo1M => 0,
            SumInsuredBand::UpTo1_5M => 1,
            SumInsuredBand::UpTo2_5M => 2,
            SumInsuredBand::Over2_5M => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SumInsuredBand::UpTo1M => "<= 1,000,000",
            SumInsuredBand::UpTo1_5M => "<= 1,500,000",
            SumInsuredBand::UpTo2_5M => "<= 2,500,000",
            SumInsuredBand::Over2_5M => "> 2,500,000",
        }
    }
}

/// Makes and Toyota models that are rated as high risk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRiskTable {
    high_risk_makes: Vec<String>,
    toyota_high_risk_models: Vec<String>,
}

impl VehicleRiskTable {
    pub fn new(high_risk_makes: Vec<String>, toyota_high_risk_models: Vec<String>) -> Self {
        Self {
            high_risk_makes,
            toyota_high_risk_models,
        }
    }

    /// The standard motor tariff lists
    pub fn standard() -> Self {
        let makes = [
            "Subaru", "Nissan", "Honda", "Mazda", "Volkswagen", "BMW",
            "Ford", "Porsche", "Volvo", "Audi", "Alfa Romeo", "Bentley",
        ];
        let models = [
            "Probox", "Allion", "Wish", "Rush", "Noah", "Axio",
            "Fielder", "Premio", "Corolla", "Voxy", "Auris", "Mark X",
        ];
        Self::new(
            makes.iter().map(|m| m.to_string()).collect(),
            models.iter().map(|m| m.to_string()).collect(),
        )
    }

    /// Make is high risk whatever the model (case-insensitive)
    pub fn is_high_risk_make(&self, make: &str) -> bool {
        self.high_risk_makes.iter().any(|m| m.eq_ignore_ascii_case(make))
    }

    /// Toyota model that is rated as high risk (case-insensitive)
    pub fn is_high_risk_toyota_model(&self, model: &str) -> bool {
        self.toyota_high_risk_models.iter().any(|m| m.eq_ignore_ascii_case(model))
    }

    pub fn high_risk_makes(&self) -> &[String] {
        &self.high_risk_makes
    }

    pub fn toyota_high_risk_models(&self) -> &[String] {
        &self.toyota_high_risk_models
    }
}

/// Private motor tariff
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivateTariff {
    pub risk_table: VehicleRiskTable,

    /// Base rates by band for high-risk vehicles
    pub high_risk_rates: [MinimumRate; 4],

    /// Base rates by band for all other vehicles
    pub other_rates: [MinimumRate; 4],

    /// Model text that switches to the flat rare-vehicle rate
    pub rare_marker: String,

    /// Flat rate for rare vehicles, no minimum
    pub rare_rate: f64,

    pub excess: MinimumRate,

    pub pvt: MinimumRate,
}

impl Default for PrivateTariff {
    fn default() -> Self {
        Self {
            risk_table: VehicleRiskTable::standard(),
            high_risk_rates: [
                MinimumRate::new(0.07, 50_000.0),
                MinimumRate::new(0.05, 70_000.0),
                MinimumRate::new(0.04, 75_000.0),
                MinimumRate::new(0.03, 87_500.0),
            ],
            other_rates: [
                MinimumRate::new(0.07, 50_000.0),
                MinimumRate::new(0.0475, 70_000.0),
                MinimumRate::new(0.035, 71_250.0),
                MinimumRate::new(0.03, 87_500.0),
            ],
            rare_marker: "Rare".to_string(),
            rare_rate: 0.05,
            excess: MinimumRate::new(0.0025, 6_000.0),
            pvt: MinimumRate::new(0.0025, 2_500.0),
        }
    }
}

/// Comprehensive base, excess and PVT rates for one commercial subclass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComprehensiveRates {
    pub base: MinimumRate,
    pub excess: MinimumRate,
    pub pvt: MinimumRate,
}

/// Flat TPO fee for vehicles up to a tonnage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TonnageBand {
    /// Inclusive upper limit in tonnes; `None` for the open top band
    pub max_tonnage: Option<f64>,
    pub single_unit: f64,
    pub fleet: f64,
}

impl TonnageBand {
    pub const fn up_to(max_tonnage: f64, single_unit: f64, fleet: f64) -> Self {
        Self { max_tonnage: Some(max_tonnage), single_unit, fleet }
    }

    pub const fn above(single_unit: f64, fleet: f64) -> Self {
        Self { max_tonnage: None, single_unit, fleet }
    }

    pub fn fee(&self, unit_type: UnitType) -> f64 {
        match unit_type {
            UnitType::SingleUnit => self.single_unit,
            UnitType::Fleet => self.fleet,
        }
    }

    fn contains(&self, tonnage: f64) -> bool {
        self.max_tonnage.map_or(true, |max| tonnage <= max)
    }
}

/// TPO fee schedule ordered by increasing tonnage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TonnageSchedule {
    bands: Vec<TonnageBand>,
}

impl TonnageSchedule {
    pub fn new(bands: Vec<TonnageBand>) -> Self {
        Self { bands }
    }

    /// Band holding this tonnage: the first whose limit is not exceeded
    pub fn band(&self, tonnage: f64) -> Option<&TonnageBand> {
        self.bands.iter().find(|b| b.contains(tonnage))
    }

    /// Flat fee for this tonnage, zero past the last band
    pub fn fee(&self, tonnage: f64, unit_type: UnitType) -> f64 {
        self.band(tonnage).map_or(0.0, |b| b.fee(unit_type))
    }

    pub fn bands(&self) -> &[TonnageBand] {
        &self.bands
    }
}

/// Commercial motor tariff
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommercialTariff {
    /// Own Goods vehicles up to this tonnage use the light rates
    pub own_goods_light_tonnage: f64,
    pub own_goods_light: ComprehensiveRates,
    pub own_goods_heavy: ComprehensiveRates,
    pub general_cartage: ComprehensiveRates,
    pub institutional: ComprehensiveRates,
    pub psv: ComprehensiveRates,

    pub tpo_own_goods: TonnageSchedule,
    pub tpo_general_cartage: TonnageSchedule,

    /// PLL charge per passenger
    pub pll_institutional: f64,
    pub pll_psv: f64,
}

impl Default for CommercialTariff {
    fn default() -> Self {
        let pvt = MinimumRate::new(0.003, 3_000.0);
        Self {
            own_goods_light_tonnage: 3.0,
            own_goods_light: ComprehensiveRates {
                base: MinimumRate::new(0.04, 30_000.0),
                excess: MinimumRate::new(0.005, 10_000.0),
                pvt,
            },
            own_goods_heavy: ComprehensiveRates {
                base: MinimumRate::new(0.045, 50_000.0),
                excess: MinimumRate::new(0.005, 10_000.0),
                pvt,
            },
            general_cartage: ComprehensiveRates {
                base: MinimumRate::new(0.048, 100_000.0),
                excess: MinimumRate::new(0.005, 12_500.0),
                pvt,
            },
            institutional: ComprehensiveRates {
                base: MinimumRate::new(0.035, 50_000.0),
                excess: MinimumRate::new(0.005, 10_000.0),
                pvt,
            },
            psv: ComprehensiveRates {
                base: MinimumRate::new(0.055, 50_000.0),
                excess: MinimumRate::new(0.005, 10_500.0),
                pvt,
            },
            tpo_own_goods: TonnageSchedule::new(vec![
                TonnageBand::up_to(3.0, 12_000.0, 10_000.0),
                TonnageBand::up_to(8.0, 15_000.0, 12_500.0),
                TonnageBand::above(22_500.0, 18_000.0),
            ]),
            tpo_general_cartage: TonnageSchedule::new(vec![
                TonnageBand::up_to(8.0, 20_000.0, 15_000.0),
                TonnageBand::up_to(20.0, 25_000.0, 20_000.0),
                TonnageBand::up_to(30.0, 30_000.0, 25_000.0),
                TonnageBand::above(25_000.0, 20_000.0),
            ]),
            pll_institutional: 250.0,
            pll_psv: 500.0,
        }
    }
}

impl CommercialTariff {
    /// Comprehensive rates for a subclass; tonnage only matters for Own Goods
    pub fn comprehensive_rates(&self, subclass: Subclass, tonnage: f64) -> &ComprehensiveRates {
        match subclass {
            Subclass::OwnGoods if tonnage <= self.own_goods_light_tonnage => &self.own_goods_light,
            Subclass::OwnGoods => &self.own_goods_heavy,
            Subclass::GeneralCartage => &self.general_cartage,
            Subclass::Institutional => &self.institutional,
            Subclass::Psv => &self.psv,
        }
    }

    /// TPO fee schedule; passenger subclasses have none and rate at zero
    pub fn tpo_schedule(&self, subclass: Subclass) -> Option<&TonnageSchedule> {
        match subclass {
            Subclass::OwnGoods => Some(&self.tpo_own_goods),
            Subclass::GeneralCartage => Some(&self.tpo_general_cartage),
            Subclass::Institutional | Subclass::Psv => None,
        }
    }

    /// PLL charge per passenger, if PLL applies to the subclass
    pub fn pll_rate(&self, subclass: Subclass) -> Option<f64> {
        match subclass {
            Subclass::Institutional => Some(self.pll_institutional),
            Subclass::Psv => Some(self.pll_psv),
            Subclass::OwnGoods | Subclass::GeneralCartage => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_rate() {
        let rate = MinimumRate::new(0.07, 50_000.0);
        assert_eq!(rate.premium(100_000.0), 50_000.0);
        assert_eq!(rate.premium(0.0), 50_000.0);
        assert_eq!(rate.premium(1_000_000.0), 70_000.0);
    }

    #[test]
    fn test_sum_insured_band() {
        assert_eq!(SumInsuredBand::from_amount(0.0), SumInsuredBand::UpTo1M);
        assert_eq!(SumInsuredBand::from_amount(1_000_000.0), SumInsuredBand::UpTo1M);
        assert_eq!(SumInsuredBand::from_amount(1_000_000.01), SumInsuredBand::UpTo1_5M);
        assert_eq!(SumInsuredBand::from_amount(1_500_000.0), SumInsuredBand::UpTo1_5M);
        assert_eq!(SumInsuredBand::from_amount(2_500_000.0), SumInsuredBand::UpTo2_5M);
        assert_eq!(SumInsuredBand::from_amount(2_500_001.0), SumInsuredBand::Over2_5M);
    }

    #[test]
    fn test_risk_table_is_case_insensitive() {
        let table = VehicleRiskTable::standard();
        assert!(table.is_high_risk_make("subaru"));
        assert!(table.is_high_risk_make("Bmw"));
        assert!(table.is_high_risk_make("ALFA ROMEO"));
        assert!(!table.is_high_risk_make("Toyota"));
        assert!(table.is_high_risk_toyota_model("mark x"));
        assert!(!table.is_high_risk_toyota_model("Camry"));
        assert_eq!(table.high_risk_makes().len(), 12);
        assert_eq!(table.toyota_high_risk_models().len(), 12);
    }

    #[test]
    fn test_tonnage_schedule_bands() {
        let tariff = CommercialTariff::default();
        let own_goods = tariff.tpo_schedule(Subclass::OwnGoods).unwrap();
        assert_eq!(own_goods.fee(0.0, UnitType::SingleUnit), 12_000.0);
        assert_eq!(own_goods.fee(3.0, UnitType::Fleet), 10_000.0);
        assert_eq!(own_goods.fee(3.5, UnitType::SingleUnit), 15_000.0);
        assert_eq!(own_goods.fee(8.0, UnitType::Fleet), 12_500.0);
        assert_eq!(own_goods.fee(40.0, UnitType::SingleUnit), 22_500.0);

        let cartage = tariff.tpo_schedule(Subclass::GeneralCartage).unwrap();
        assert_eq!(cartage.fee(8.0, UnitType::SingleUnit), 20_000.0);
        assert_eq!(cartage.fee(20.0, UnitType::Fleet), 20_000.0);
        assert_eq!(cartage.fee(30.0, UnitType::SingleUnit), 30_000.0);
        assert_eq!(cartage.fee(30.5, UnitType::Fleet), 20_000.0);

        assert!(tariff.tpo_schedule(Subclass::Psv).is_none());
    }

    #[test]
    fn test_comprehensive_rates_own_goods_tier() {
        let tariff = CommercialTariff::default();
        assert_eq!(tariff.comprehensive_rates(Subclass::OwnGoods, 3.0).base.rate, 0.04);
        assert_eq!(tariff.comprehensive_rates(Subclass::OwnGoods, 3.1).base.rate, 0.045);
        assert_eq!(tariff.comprehensive_rates(Subclass::Psv, 50.0).excess.minimum, 10_500.0);
    }
}
