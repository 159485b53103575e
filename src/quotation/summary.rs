//! Rated vehicles accumulated into a quotation summary

use serde::{Deserialize, Serialize};

use crate::rating::{CommercialRatingResult, PrivateRatingResult};
use crate::vehicle::{CommercialRatingInput, PrivateRatingInput, VehicleType};

/// A vehicle together with its premium breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RatedVehicle {
    Private {
        input: PrivateRatingInput,
        result: PrivateRatingResult,
    },
    Commercial {
        input: CommercialRatingInput,
        result: CommercialRatingResult,
    },
}

impl RatedVehicle {
    pub fn vehicle_type(&self) -> VehicleType {
        match self {
            RatedVehicle::Private { .. } => VehicleType::Private,
            RatedVehicle::Commercial { .. } => VehicleType::Commercial,
        }
    }

    pub fn base_premium(&self) -> f64 {
        match self {
            RatedVehicle::Private { result, .. } => result.base_premium,
            RatedVehicle::Commercial { result, .. } => result.base_premium,
        }
    }

    pub fn total_premium(&self) -> f64 {
        match self {
            RatedVehicle::Private { result, .. } => result.total_premium,
            RatedVehicle::Commercial { result, .. } => result.total_premium,
        }
    }
}

/// One line of the quotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteLine {
    /// 1-based position in the schedule
    pub index: usize,
    pub vehicle: RatedVehicle,
}

/// Ordered quotation lines
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteSummary {
    pub lines: Vec<QuoteLine>,
}

impl QuoteSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rated vehicle as the next line
    pub fn add_vehicle(&mut self, vehicle: RatedVehicle) {
        let index = self.lines.len() + 1;
        self.lines.push(QuoteLine { index, vehicle });
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines of one vehicle type, in schedule order
    pub fn lines_of(&self, vehicle_type: VehicleType) -> impl Iterator<Item = &QuoteLine> + '_ {
        self.lines
            .iter()
            .filter(move |line| line.vehicle.vehicle_type() == vehicle_type)
    }

    pub fn count(&self, vehicle_type: VehicleType) -> usize {
        self.lines_of(vehicle_type).count()
    }

    /// Sum of total premiums for one vehicle type
    pub fn subtotal(&self, vehicle_type: VehicleType) -> f64 {
        self.lines_of(vehicle_type).map(|l| l.vehicle.total_premium()).sum()
    }

    /// Sum of the per-type subtotals
    pub fn grand_total(&self) -> f64 {
        VehicleType::ALL.iter().map(|&t| self.subtotal(t)).sum()
    }

    /// Get summary totals
    pub fn totals(&self) -> QuoteTotals {
        QuoteTotals {
            vehicle_count: self.lines.len(),
            private_count: self.count(VehicleType::Private),
            commercial_count: self.count(VehicleType::Commercial),
            private_total: self.subtotal(VehicleType::Private),
            commercial_total: self.subtotal(VehicleType::Commercial),
            grand_total: self.grand_total(),
        }
    }
}

/// Totals for a quotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteTotals {
    pub vehicle_count: usize,
    pub private_count: usize,
    pub commercial_count: usize,
    pub private_total: f64,
    pub commercial_total: f64,
    pub grand_total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::{CommercialRater, PrivateRater};
    use crate::vehicle::{Subclass, UnitType};

    fn sample_summary() -> QuoteSummary {
        let private = PrivateRater::default();
        let commercial = CommercialRater::default();
        let mut summary = QuoteSummary::new();

        let input = PrivateRatingInput::new("Toyota", "Probox", 800_000.0).with_excess(true).with_pvt(true);
        summary.add_vehicle(RatedVehicle::Private { result: private.rate(&input), input });

        let input = CommercialRatingInput::third_party_only(Subclass::OwnGoods, 3.0, UnitType::SingleUnit);
        summary.add_vehicle(RatedVehicle::Commercial { result: commercial.rate(&input), input });

        let input = PrivateRatingInput::new("Toyota", "Camry", 100_000.0);
        summary.add_vehicle(RatedVehicle::Private { result: private.rate(&input), input });

        summary
    }

    #[test]
    fn test_lines_keep_schedule_order() {
        let summary = sample_summary();
        let indices: Vec<usize> = summary.lines.iter().map(|l| l.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);

        let private: Vec<usize> = summary.lines_of(VehicleType::Private).map(|l| l.index).collect();
        assert_eq!(private, vec![1, 3]);
    }

    #[test]
    fn test_subtotals_and_grand_total() {
        let summary = sample_summary();
        let totals = summary.totals();

        assert_eq!(totals.vehicle_count, 3);
        assert_eq!(totals.private_count, 2);
        assert_eq!(totals.commercial_count, 1);
        assert_eq!(totals.private_total, 64_500.0 + 50_000.0);
        assert_eq!(totals.commercial_total, 12_000.0);
        assert_eq!(totals.grand_total, 126_500.0);
    }

    #[test]
    fn test_empty_summary() {
        let summary = QuoteSummary::new();
        assert!(summary.is_empty());
        assert_eq!(summary.grand_total(), 0.0);
        assert_eq!(summary.count(VehicleType::Commercial), 0);
    }

    #[test]
    fn test_serializes_vehicle_type_tag() {
        let summary = sample_summary();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["lines"][0]["vehicle"]["type"], "Private");
        assert_eq!(json["lines"][1]["vehicle"]["type"], "Commercial");
        assert_eq!(json["lines"][1]["vehicle"]["result"]["total_premium"], 12_000.0);
    }
}
