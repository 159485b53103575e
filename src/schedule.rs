//! Schedule rater for whole quotations
//!
//! Builds the private and commercial raters once from a tariff, then rates
//! every vehicle on a schedule in order.

use log::info;

use crate::quotation::{QuoteSummary, RatedVehicle};
use crate::rating::{CommercialRater, PrivateRater, Tariff};
use crate::vehicle::Vehicle;

/// Pre-built raters for rating a vehicle schedule
///
/// # Example
/// ```ignore
/// let rater = ScheduleRater::from_tariff(&Tariff::from_csv()?);
/// let vehicles = load_schedule("vehicles.csv")?;
/// let summary = rater.rate_schedule(&vehicles);
/// println!("Grand total: {}", format_kshs(summary.grand_total()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduleRater {
    private: PrivateRater,
    commercial: CommercialRater,
}

impl ScheduleRater {
    /// Create rater with the standard tariff
    pub fn new() -> Self {
        Self::default()
    }

    /// Create rater from a specific tariff
    pub fn from_tariff(tariff: &Tariff) -> Self {
        Self {
            private: tariff.private_rater(),
            commercial: tariff.commercial_rater(),
        }
    }

    pub fn private_rater(&self) -> &PrivateRater {
        &self.private
    }

    pub fn commercial_rater(&self) -> &CommercialRater {
        &self.commercial
    }

    /// Rate a single vehicle with the matching rater
    pub fn rate_vehicle(&self, vehicle: &Vehicle) -> RatedVehicle {
        match vehicle {
            Vehicle::Private(input) => RatedVehicle::Private {
                input: input.clone(),
                result: self.private.rate(input),
            },
            Vehicle::Commercial(input) => RatedVehicle::Commercial {
                input: *input,
                result: self.commercial.rate(input),
            },
        }
    }

    /// Rate every vehicle, keeping schedule order
    pub fn rate_schedule(&self, vehicles: &[Vehicle]) -> QuoteSummary {
        let mut summary = QuoteSummary::new();
        for vehicle in vehicles {
            summary.add_vehicle(self.rate_vehicle(vehicle));
        }
        info!(
            "Rated {} vehicles, grand total {:.2}",
            summary.lines.len(),
            summary.grand_total()
        );
        summary
    }
}
