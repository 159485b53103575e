//! Commercial motor rating

use log::debug;
use serde::{Deserialize, Serialize};

use super::tables::CommercialTariff;
use crate::vehicle::{CommercialCover, CommercialRatingInput};

/// Premium breakdown for one commercial vehicle.
///
/// Excess and PVT hold the amounts actually charged: zero unless the add-on
/// was requested on comprehensive cover.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommercialRatingResult {
    pub base_premium: f64,
    pub excess_premium: f64,
    pub pvt_premium: f64,
    pub pll_premium: f64,
    /// base + excess + pvt + pll
    pub total_premium: f64,
}

/// Rates commercial vehicles against a commercial tariff
#[derive(Debug, Clone, Default)]
pub struct CommercialRater {
    tariff: CommercialTariff,
}

impl CommercialRater {
    pub fn new(tariff: CommercialTariff) -> Self {
        Self { tariff }
    }

    pub fn tariff(&self) -> &CommercialTariff {
        &self.tariff
    }

    /// Passenger legal liability charge, zero when not requested or when the
    /// subclass carries no passengers
    pub fn pll_premium(&self, input: &CommercialRatingInput) -> f64 {
        match (input.pll_passengers, self.tariff.pll_rate(input.subclass)) {
            (Some(passengers), Some(rate)) => passengers as f64 * rate,
            _ => 0.0,
        }
    }

    /// Rate one commercial vehicle
    pub fn rate(&self, input: &CommercialRatingInput) -> CommercialRatingResult {
        let (base_premium, excess_premium, pvt_premium) = match input.cover {
            CommercialCover::Comprehensive { sum_insured, tonnage } => {
                let rates = self.tariff.comprehensive_rates(input.subclass, tonnage);
                let excess = if input.include_excess { rates.excess.premium(sum_insured) } else { 0.0 };
                let pvt = if input.include_pvt { rates.pvt.premium(sum_insured) } else { 0.0 };
                (rates.base.premium(sum_insured), excess, pvt)
            }
            // Flat fee; excess and PVT are not sold on third party only
            CommercialCover::ThirdPartyOnly { tonnage, unit_type } => {
                let base = self
                    .tariff
                    .tpo_schedule(input.subclass)
                    .map_or(0.0, |schedule| schedule.fee(tonnage, unit_type));
                (base, 0.0, 0.0)
            }
        };

        let pll_premium = self.pll_premium(input);
        let total_premium = base_premium + excess_premium + pvt_premium + pll_premium;
        debug!(
            "Commercial {} {}: base={:.2} excess={:.2} pvt={:.2} pll={:.2} total={:.2}",
            input.subclass, input.cover_type(), base_premium, excess_premium, pvt_premium, pll_premium, total_premium
        );

        CommercialRatingResult {
            base_premium,
            excess_premium,
            pvt_premium,
            pll_premium,
            total_premium,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::{Subclass, UnitType};
    use approx::assert_relative_eq;

    fn rate(input: CommercialRatingInput) -> CommercialRatingResult {
        CommercialRater::default().rate(&input)
    }

    #[test]
    fn test_own_goods_tpo_single_unit() {
        let result = rate(CommercialRatingInput::third_party_only(Subclass::OwnGoods, 3.0, UnitType::SingleUnit));
        assert_eq!(result.base_premium, 12_000.0);
        assert_eq!(result.excess_premium, 0.0);
        assert_eq!(result.pvt_premium, 0.0);
        assert_eq!(result.pll_premium, 0.0);
        assert_eq!(result.total_premium, 12_000.0);
    }

    #[test]
    fn test_tpo_ignores_excess_and_pvt_flags() {
        let input = CommercialRatingInput::third_party_only(Subclass::GeneralCartage, 25.0, UnitType::Fleet)
            .with_excess(true)
            .with_pvt(true);
        let result = rate(input);
        assert_eq!(result.base_premium, 25_000.0);
        assert_eq!(result.excess_premium, 0.0);
        assert_eq!(result.pvt_premium, 0.0);
        assert_eq!(result.total_premium, 25_000.0);
    }

    #[test]
    fn test_tpo_fee_table() {
        let cases = [
            (Subclass::OwnGoods, 2.0, 12_000.0, 10_000.0),
            (Subclass::OwnGoods, 8.0, 15_000.0, 12_500.0),
            (Subclass::OwnGoods, 12.0, 22_500.0, 18_000.0),
            (Subclass::GeneralCartage, 5.0, 20_000.0, 15_000.0),
            (Subclass::GeneralCartage, 20.0, 25_000.0, 20_000.0),
            (Subclass::GeneralCartage, 28.0, 30_000.0, 25_000.0),
            (Subclass::GeneralCartage, 31.0, 25_000.0, 20_000.0),
            (Subclass::Institutional, 5.0, 0.0, 0.0),
            (Subclass::Psv, 5.0, 0.0, 0.0),
        ];
        for (subclass, tonnage, single, fleet) in cases {
            let s = rate(CommercialRatingInput::third_party_only(subclass, tonnage, UnitType::SingleUnit));
            let f = rate(CommercialRatingInput::third_party_only(subclass, tonnage, UnitType::Fleet));
            assert_eq!(s.base_premium, single, "{} {}t single unit", subclass, tonnage);
            assert_eq!(f.base_premium, fleet, "{} {}t fleet", subclass, tonnage);
        }
    }

    #[test]
    fn test_institutional_comprehensive_with_pll() {
        let input = CommercialRatingInput::comprehensive(Subclass::Institutional, 1_000_000.0, 0.0).with_pll(10);
        let result = rate(input);
        assert_eq!(result.base_premium, 50_000.0);
        assert_eq!(result.excess_premium, 0.0);
        assert_eq!(result.pvt_premium, 0.0);
        assert_eq!(result.pll_premium, 2_500.0);
        assert_eq!(result.total_premium, 52_500.0);

        let result = rate(input.with_excess(true).with_pvt(true));
        assert_eq!(result.excess_premium, 10_000.0);
        assert_eq!(result.pvt_premium, 3_000.0);
        assert_eq!(result.pll_premium, 2_500.0);
        assert_eq!(result.total_premium, 65_500.0);
    }

    #[test]
    fn test_comprehensive_rates_by_subclass() {
        let s = 2_000_000.0;
        let own_light = rate(CommercialRatingInput::comprehensive(Subclass::OwnGoods, s, 3.0).with_excess(true).with_pvt(true));
        assert_relative_eq!(own_light.base_premium, 80_000.0);
        assert_relative_eq!(own_light.excess_premium, 10_000.0);
        assert_relative_eq!(own_light.pvt_premium, 6_000.0);

        let own_heavy = rate(CommercialRatingInput::comprehensive(Subclass::OwnGoods, s, 10.0));
        assert_relative_eq!(own_heavy.base_premium, 90_000.0);

        let cartage = rate(CommercialRatingInput::comprehensive(Subclass::GeneralCartage, s, 0.0).with_excess(true));
        assert_relative_eq!(cartage.base_premium, 100_000.0);
        assert_relative_eq!(cartage.excess_premium, 12_500.0);

        let psv = rate(CommercialRatingInput::comprehensive(Subclass::Psv, s, 0.0).with_excess(true));
        assert_relative_eq!(psv.base_premium, 110_000.0);
        assert_relative_eq!(psv.excess_premium, 10_500.0);
    }

    #[test]
    fn test_comprehensive_minimums() {
        let own = rate(CommercialRatingInput::comprehensive(Subclass::OwnGoods, 0.0, 0.0).with_excess(true).with_pvt(true));
        assert_eq!(own.base_premium, 30_000.0);
        assert_eq!(own.excess_premium, 10_000.0);
        assert_eq!(own.pvt_premium, 3_000.0);
        assert_eq!(own.total_premium, 43_000.0);
    }

    #[test]
    fn test_psv_pll_on_tpo() {
        let input = CommercialRatingInput::third_party_only(Subclass::Psv, 4.0, UnitType::SingleUnit).with_pll(14);
        let result = rate(input);
        assert_eq!(result.base_premium, 0.0);
        assert_eq!(result.pll_premium, 7_000.0);
        assert_eq!(result.total_premium, 7_000.0);
    }

    #[test]
    fn test_pll_not_charged_on_goods_subclasses() {
        let input = CommercialRatingInput::comprehensive(Subclass::GeneralCartage, 500_000.0, 0.0).with_pll(30);
        assert_eq!(rate(input).pll_premium, 0.0);

        let input = CommercialRatingInput::third_party_only(Subclass::OwnGoods, 2.0, UnitType::Fleet).with_pll(2);
        let result = rate(input);
        assert_eq!(result.pll_premium, 0.0);
        assert_eq!(result.total_premium, 10_000.0);
    }

    #[test]
    fn test_total_is_sum_of_parts() {
        for subclass in [Subclass::OwnGoods, Subclass::GeneralCartage, Subclass::Institutional, Subclass::Psv] {
            for &sum in &[0.0, 750_000.0, 3_333_333.0] {
                let input = CommercialRatingInput::comprehensive(subclass, sum, 5.0)
                    .with_excess(true)
                    .with_pvt(true)
                    .with_pll(7);
                let r = rate(input);
                assert_eq!(r.total_premium, r.base_premium + r.excess_premium + r.pvt_premium + r.pll_premium);
            }
        }
    }

    #[test]
    fn test_rating_is_idempotent() {
        let rater = CommercialRater::default();
        let input = CommercialRatingInput::comprehensive(Subclass::Psv, 3_456_789.0, 0.0)
            .with_excess(true)
            .with_pll(33);
        assert_eq!(rater.rate(&input), rater.rate(&input));
    }
}
