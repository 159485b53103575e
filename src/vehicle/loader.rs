//! Load a vehicle schedule from CSV
//!
//! Expected header:
//! `Type,Make,Model,SumInsured,Excess,PVT,Subclass,Cover,Tonnage,UnitType,PLL,Passengers`.
//! Columns that do not apply to a row may be left empty.

use super::{CommercialRatingInput, CoverType, PrivateRatingInput, Subclass, UnitType, Vehicle, VehicleType};
use crate::error::{QuoteError, Result};
use csv::{ReaderBuilder, Trim};
use log::{debug, info, warn};
use std::path::Path;

/// Most vehicles of one type a single quotation accepts
pub const MAX_VEHICLES_PER_TYPE: usize = 20;

/// Raw CSV row matching the schedule columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Type")]
    vehicle_type: String,
    #[serde(rename = "Make", default)]
    make: Option<String>,
    #[serde(rename = "Model", default)]
    model: Option<String>,
    #[serde(rename = "SumInsured", default)]
    sum_insured: Option<f64>,
    #[serde(rename = "Excess", default)]
    excess: Option<String>,
    #[serde(rename = "PVT", default)]
    pvt: Option<String>,
    #[serde(rename = "Subclass", default)]
    subclass: Option<String>,
    #[serde(rename = "Cover", default)]
    cover: Option<String>,
    #[serde(rename = "Tonnage", default)]
    tonnage: Option<f64>,
    #[serde(rename = "UnitType", default)]
    unit_type: Option<String>,
    #[serde(rename = "PLL", default)]
    pll: Option<String>,
    #[serde(rename = "Passengers", default)]
    passengers: Option<u32>,
}

/// Read a yes/no column; empty means no
fn parse_flag(field: &'static str, value: Option<&str>) -> Result<bool> {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(false);
    };
    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" => Ok(false),
        _ => Err(QuoteError::InvalidFlag {
            field,
            value: raw.to_string(),
        }),
    }
}

/// Non-empty text column
fn text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl CsvRow {
    fn to_vehicle(self, row: usize) -> Result<Vehicle> {
        let vehicle_type: VehicleType = self.vehicle_type.parse()?;
        let include_excess = parse_flag("Excess", self.excess.as_deref())?;
        let include_pvt = parse_flag("PVT", self.pvt.as_deref())?;

        let vehicle = match vehicle_type {
            VehicleType::Private => {
                let sum_insured = self.sum_insured.ok_or(QuoteError::MissingField {
                    row,
                    field: "SumInsured",
                })?;
                Vehicle::Private(
                    PrivateRatingInput::new(
                        self.make.unwrap_or_default(),
                        self.model.unwrap_or_default(),
                        sum_insured,
                    )
                    .with_excess(include_excess)
                    .with_pvt(include_pvt),
                )
            }
            VehicleType::Commercial => {
                let subclass: Subclass = text(self.subclass)
                    .ok_or(QuoteError::MissingField { row, field: "Subclass" })?
                    .parse()?;
                let cover: CoverType = text(self.cover)
                    .ok_or(QuoteError::MissingField { row, field: "Cover" })?
                    .parse()?;
                let tonnage = self.tonnage.unwrap_or(0.0);

                let mut input = match cover {
                    CoverType::Comprehensive => {
                        let sum_insured = self.sum_insured.ok_or(QuoteError::MissingField {
                            row,
                            field: "SumInsured",
                        })?;
                        CommercialRatingInput::comprehensive(subclass, sum_insured, tonnage)
                    }
                    CoverType::Tpo => {
                        let unit_type = match text(self.unit_type) {
                            Some(raw) => raw.parse()?,
                            None => {
                                debug!("Row {}: no unit type, pricing as single unit", row);
                                UnitType::SingleUnit
                            }
                        };
                        CommercialRatingInput::third_party_only(subclass, tonnage, unit_type)
                    }
                }
                .with_excess(include_excess)
                .with_pvt(include_pvt);

                if parse_flag("PLL", self.pll.as_deref())? {
                    if subclass.carries_passengers() {
                        input = input.with_pll(self.passengers.unwrap_or(0));
                    } else {
                        warn!("Row {}: PLL does not apply to {}, ignoring", row, subclass);
                    }
                }
                Vehicle::Commercial(input)
            }
        };

        vehicle.validate()?;
        Ok(vehicle)
    }
}

/// Reject schedules with more vehicles of one type than a quotation holds
fn check_vehicle_counts(vehicles: &[Vehicle]) -> Result<()> {
    for vehicle_type in VehicleType::ALL {
        let count = vehicles.iter().filter(|v| v.vehicle_type() == vehicle_type).count();
        if count > MAX_VEHICLES_PER_TYPE {
            return Err(QuoteError::TooManyVehicles {
                vehicle_type: vehicle_type.label(),
                count,
                max: MAX_VEHICLES_PER_TYPE,
            });
        }
    }
    Ok(())
}

/// Load a vehicle schedule from a CSV file
pub fn load_schedule<P: AsRef<Path>>(path: P) -> Result<Vec<Vehicle>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let vehicles = load_schedule_from_reader(file)?;
    info!("Loaded {} vehicles from {}", vehicles.len(), path.display());
    Ok(vehicles)
}

/// Load a vehicle schedule from any reader (e.g., string buffer, stdin)
pub fn load_schedule_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Vehicle>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut vehicles = Vec::new();

    for (idx, result) in csv_reader.deserialize().enumerate() {
        let row_number = idx + 1;
        let row: CsvRow = result?;
        let vehicle = row.to_vehicle(row_number).map_err(|e| e.at_row(row_number))?;
        vehicles.push(vehicle);
    }

    check_vehicle_counts(&vehicles)?;
    Ok(vehicles)
}
