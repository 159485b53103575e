//! Motor Quotation - Premium rating and quotation documents for motor insurance
//!
//! This library provides:
//! - Private vehicle rating (risk category, sum insured bands, rare vehicles)
//! - Commercial vehicle rating (comprehensive and third party only covers,
//!   tonnage fee schedules, passenger legal liability)
//! - Vehicle schedule and tariff risk list loading from CSV
//! - Quotation summaries and paginated plain-text quotation documents

pub mod error;
pub mod config;
pub mod vehicle;
pub mod rating;
pub mod quotation;
pub mod schedule;

// Re-export commonly used types
pub use error::{QuoteError, Result};
pub use config::QuoteConfig;
pub use vehicle::{CommercialRatingInput, PrivateRatingInput, Vehicle, VehicleType};
pub use rating::{CommercialRater, PrivateRater, Tariff};
pub use quotation::{ClientDetails, QuotationDocument, QuoteSummary};
pub use schedule::ScheduleRater;
