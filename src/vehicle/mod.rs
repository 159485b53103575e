//! Vehicle inputs and schedule loading

mod data;
pub mod loader;

pub use data::{
    title_case, CommercialCover, CommercialRatingInput, CoverType, PrivateRatingInput, Subclass,
    UnitType, Vehicle, VehicleType,
};
pub use loader::{load_schedule, load_schedule_from_reader, MAX_VEHICLES_PER_TYPE};
