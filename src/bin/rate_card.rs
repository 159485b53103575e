//! Print the motor rate card as CSV
//!
//! Writes two tables to stdout, separated by a blank line:
//!   the private base rates by risk category and sum insured band
//!   the commercial TPO fee schedule by subclass and tonnage band
//! Reads MOTOR_QUOTE_TARIFF_DIR like the main CLI.

use anyhow::{Context, Result};
use motor_quotation::rating::{RiskCategory, SumInsuredBand};
use motor_quotation::vehicle::Subclass;
use motor_quotation::QuoteConfig;
use serde::Serialize;
use std::io;

#[derive(Serialize)]
struct PrivateRateRow {
    #[serde(rename = "Category")]
    category: &'static str,
    #[serde(rename = "Band")]
    band: &'static str,
    #[serde(rename = "Rate")]
    rate: f64,
    #[serde(rename = "Minimum")]
    minimum: f64,
}

#[derive(Serialize)]
struct TpoFeeRow {
    #[serde(rename = "Subclass")]
    subclass: &'static str,
    #[serde(rename = "MaxTonnage")]
    max_tonnage: Option<f64>,
    #[serde(rename = "SingleUnit")]
    single_unit: f64,
    #[serde(rename = "Fleet")]
    fleet: f64,
}

fn main() -> Result<()> {
    env_logger::init();

    let tariff = QuoteConfig::from_env()
        .load_tariff()
        .context("Failed to load tariff")?;

    let mut writer = csv::Writer::from_writer(io::stdout());
    for (category, rates) in [
        (RiskCategory::HighRisk, &tariff.private.high_risk_rates),
        (RiskCategory::Other, &tariff.private.other_rates),
    ] {
        for band in SumInsuredBand::ALL {
            let rate = rates[band.index()];
            writer.serialize(PrivateRateRow {
                category: category.label(),
                band: band.as_str(),
                rate: rate.rate,
                minimum: rate.minimum,
            })?;
        }
    }
    writer.flush()?;
    drop(writer);

    println!();

    let mut writer = csv::Writer::from_writer(io::stdout());
    for subclass in [Subclass::OwnGoods, Subclass::GeneralCartage] {
        let Some(schedule) = tariff.commercial.tpo_schedule(subclass) else {
            continue;
        };
        for band in schedule.bands() {
            writer.serialize(TpoFeeRow {
                subclass: subclass.label(),
                max_tonnage: band.max_tonnage,
                single_unit: band.single_unit,
                fleet: band.fleet,
            })?;
        }
    }
    writer.flush()?;
    Ok(())
}
