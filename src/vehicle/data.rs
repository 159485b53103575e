//! Vehicle rating inputs and the enums parsed at the input boundary

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ensure_amount, QuoteError, Result};

/// Lower-case a label and drop separators so "Own Goods", "own_goods" and
/// "OWN-GOODS" all compare equal
fn label_key(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Title-case a string: the first letter of every alphabetic run is
/// upper-cased and the rest lower-cased ("mark x" -> "Mark X",
/// "4runner" -> "4Runner", "BMW" -> "Bmw").
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// Private or commercial vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    Private,
    Commercial,
}

impl VehicleType {
    /// Both types in document order
    pub const ALL: [VehicleType; 2] = [VehicleType::Private, VehicleType::Commercial];

    pub fn label(&self) -> &'static str {
        match self {
            VehicleType::Private => "Private",
            VehicleType::Commercial => "Commercial",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VehicleType {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self> {
        match label_key(s).as_str() {
            "private" | "motorprivate" => Ok(VehicleType::Private),
            "commercial" | "motorcommercial" => Ok(VehicleType::Commercial),
            _ => Err(QuoteError::UnknownVehicleType(s.trim().to_string())),
        }
    }
}

/// Commercial vehicle subclass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subclass {
    /// Goods carried for the owner's own business
    OwnGoods,
    /// Goods carried for hire
    GeneralCartage,
    /// Vehicles owned by schools, churches and similar bodies
    Institutional,
    /// Public service vehicle
    Psv,
}

impl Subclass {
    pub fn label(&self) -> &'static str {
        match self {
            Subclass::OwnGoods => "Own Goods",
            Subclass::GeneralCartage => "General Cartage",
            Subclass::Institutional => "Institutional",
            Subclass::Psv => "PSV",
        }
    }

    /// Whether passenger legal liability can be added
    pub fn carries_passengers(&self) -> bool {
        matches!(self, Subclass::Institutional | Subclass::Psv)
    }
}

impl fmt::Display for Subclass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Subclass {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self> {
        match label_key(s).as_str() {
            "owngoods" => Ok(Subclass::OwnGoods),
            "generalcartage" => Ok(Subclass::GeneralCartage),
            "institutional" => Ok(Subclass::Institutional),
            "psv" => Ok(Subclass::Psv),
            _ => Err(QuoteError::UnknownSubclass(s.trim().to_string())),
        }
    }
}

/// Cover type for a commercial vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoverType {
    Comprehensive,
    /// Third party only
    Tpo,
}

impl CoverType {
    pub fn label(&self) -> &'static str {
        match self {
            CoverType::Comprehensive => "Comprehensive",
            CoverType::Tpo => "TPO",
        }
    }
}

impl fmt::Display for CoverType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CoverType {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self> {
        match label_key(s).as_str() {
            "comprehensive" | "comp" => Ok(CoverType::Comprehensive),
            "tpo" | "thirdpartyonly" => Ok(CoverType::Tpo),
            _ => Err(QuoteError::UnknownCoverType(s.trim().to_string())),
        }
    }
}

/// Single vehicle or part of a fleet (TPO pricing only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitType {
    SingleUnit,
    Fleet,
}

impl UnitType {
    pub fn label(&self) -> &'static str {
        match self {
            UnitType::SingleUnit => "Single Unit",
            UnitType::Fleet => "Fleet",
        }
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for UnitType {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self> {
        match label_key(s).as_str() {
            "singleunit" | "single" => Ok(UnitType::SingleUnit),
            "fleet" => Ok(UnitType::Fleet),
            _ => Err(QuoteError::UnknownUnitType(s.trim().to_string())),
        }
    }
}

/// Inputs for rating one private vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivateRatingInput {
    /// Manufacturer as entered
    pub make: String,

    /// Model as entered
    pub model: String,

    /// Declared vehicle value
    pub sum_insured: f64,

    /// Add the excess buy-down
    #[serde(default)]
    pub include_excess: bool,

    /// Add the PVT cover
    #[serde(default)]
    pub include_pvt: bool,
}

impl PrivateRatingInput {
    /// Create an input with no add-ons
    pub fn new(make: impl Into<String>, model: impl Into<String>, sum_insured: f64) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            sum_insured,
            include_excess: false,
            include_pvt: false,
        }
    }

    pub fn with_excess(mut self, include: bool) -> Self {
        self.include_excess = include;
        self
    }

    pub fn with_pvt(mut self, include: bool) -> Self {
        self.include_pvt = include;
        self
    }

    /// Make after trimming and title-casing
    pub fn normalized_make(&self) -> String {
        title_case(self.make.trim())
    }

    /// Model after trimming and title-casing
    pub fn normalized_model(&self) -> String {
        title_case(self.model.trim())
    }

    /// Range checks the rater relies on
    pub fn validate(&self) -> Result<()> {
        ensure_amount("Sum Insured", self.sum_insured)?;
        Ok(())
    }
}

/// Cover-specific commercial inputs.
///
/// Sum insured only exists for comprehensive cover and unit type only for
/// third party only, so neither can be set and then silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CommercialCover {
    Comprehensive {
        sum_insured: f64,
        /// Only used to pick the Own Goods tier
        #[serde(default)]
        tonnage: f64,
    },
    ThirdPartyOnly {
        tonnage: f64,
        unit_type: UnitType,
    },
}

impl CommercialCover {
    pub fn cover_type(&self) -> CoverType {
        match self {
            CommercialCover::Comprehensive { .. } => CoverType::Comprehensive,
            CommercialCover::ThirdPartyOnly { .. } => CoverType::Tpo,
        }
    }

    pub fn tonnage(&self) -> f64 {
        match *self {
            CommercialCover::Comprehensive { tonnage, .. } => tonnage,
            CommercialCover::ThirdPartyOnly { tonnage, .. } => tonnage,
        }
    }

    pub fn sum_insured(&self) -> Option<f64> {
        match *self {
            CommercialCover::Comprehensive { sum_insured, .. } => Some(sum_insured),
            CommercialCover::ThirdPartyOnly { .. } => None,
        }
    }

    pub fn unit_type(&self) -> Option<UnitType> {
        match *self {
            CommercialCover::Comprehensive { .. } => None,
            CommercialCover::ThirdPartyOnly { unit_type, .. } => Some(unit_type),
        }
    }
}

/// Inputs for rating one commercial vehicle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommercialRatingInput {
    pub subclass: Subclass,

    pub cover: CommercialCover,

    /// Add the excess buy-down (comprehensive only)
    #[serde(default)]
    pub include_excess: bool,

    /// Add the PVT cover (comprehensive only)
    #[serde(default)]
    pub include_pvt: bool,

    /// Passenger legal liability requested for this many passengers
    #[serde(default)]
    pub pll_passengers: Option<u32>,
}

impl CommercialRatingInput {
    /// Comprehensive cover with no add-ons
    pub fn comprehensive(subclass: Subclass, sum_insured: f64, tonnage: f64) -> Self {
        Self::with_cover(subclass, CommercialCover::Comprehensive { sum_insured, tonnage })
    }

    /// Third party only cover with no add-ons
    pub fn third_party_only(subclass: Subclass, tonnage: f64, unit_type: UnitType) -> Self {
        Self::with_cover(subclass, CommercialCover::ThirdPartyOnly { tonnage, unit_type })
    }

    fn with_cover(subclass: Subclass, cover: CommercialCover) -> Self {
        Self {
            subclass,
            cover,
            include_excess: false,
            include_pvt: false,
            pll_passengers: None,
        }
    }

    pub fn with_excess(mut self, include: bool) -> Self {
        self.include_excess = include;
        self
    }

    pub fn with_pvt(mut self, include: bool) -> Self {
        self.include_pvt = include;
        self
    }

    pub fn with_pll(mut self, passengers: u32) -> Self {
        self.pll_passengers = Some(passengers);
        self
    }

    pub fn cover_type(&self) -> CoverType {
        self.cover.cover_type()
    }

    /// Range checks the rater relies on
    pub fn validate(&self) -> Result<()> {
        match self.cover {
            CommercialCover::Comprehensive { sum_insured, tonnage } => {
                ensure_amount("Sum Insured", sum_insured)?;
                ensure_amount("Tonnage", tonnage)?;
            }
            CommercialCover::ThirdPartyOnly { tonnage, .. } => {
                ensure_amount("Tonnage", tonnage)?;
            }
        }
        Ok(())
    }
}

/// One vehicle on a quotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Vehicle {
    Private(PrivateRatingInput),
    Commercial(CommercialRatingInput),
}

impl Vehicle {
    pub fn vehicle_type(&self) -> VehicleType {
        match self {
            Vehicle::Private(_) => VehicleType::Private,
            Vehicle::Commercial(_) => VehicleType::Commercial,
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            Vehicle::Private(input) => input.validate(),
            Vehicle::Commercial(input) => input.validate(),
        }
    }
}
