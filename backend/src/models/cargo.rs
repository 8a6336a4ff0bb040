//! Shipment model
//!
//! Describes a single cargo shipment submitted for a delivery quote.
//! Each request has:
//! - Distance in kilometers (must be positive)
//! - Cargo size category (Small, Big)
//! - Fragility flag
//! - Carrier load level (Normal, Increased, High, Heavy)
//!
//! Size and load are optional so that an incomplete request coming from an
//! external caller can be represented and rejected instead of guessed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::costs::rates::LONG_DISTANCE_KM;

/// Cargo size category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CargoSize {
    /// Small parcels
    Small,
    /// Oversized cargo
    Big,
}

impl CargoSize {
    /// All size categories, in ascending fee order
    pub const ALL: [CargoSize; 2] = [CargoSize::Small, CargoSize::Big];

    /// Wire name used in JSON and the Python binding
    pub fn as_str(&self) -> &'static str {
        match self {
            CargoSize::Small => "SMALL",
            CargoSize::Big => "BIG",
        }
    }
}

/// Current workload of the delivery carrier
///
/// Higher load raises the price through a multiplier on the fee sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CarrierLoad {
    Normal,
    Increased,
    High,
    Heavy,
}

impl CarrierLoad {
    /// All load levels, in ascending multiplier order
    pub const ALL: [CarrierLoad; 4] = [
        CarrierLoad::Normal,
        CarrierLoad::Increased,
        CarrierLoad::High,
        CarrierLoad::Heavy,
    ];

    /// Wire name used in JSON and the Python binding
    pub fn as_str(&self) -> &'static str {
        match self {
            CarrierLoad::Normal => "NORMAL",
            CarrierLoad::Increased => "INCREASED",
            CarrierLoad::High => "HIGH",
            CarrierLoad::Heavy => "HEAVY",
        }
    }
}

impl fmt::Display for CargoSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for CarrierLoad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a category name cannot be parsed
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown {kind} '{value}'")]
pub struct ParseCategoryError {
    /// Which category was being parsed ("cargo size" or "carrier load")
    pub kind: &'static str,
    /// The rejected input
    pub value: String,
}

impl FromStr for CargoSize {
    type Err = ParseCategoryError;

    /// Parse a size category, ignoring ASCII case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CargoSize::ALL
            .into_iter()
            .find(|size| size.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseCategoryError {
                kind: "cargo size",
                value: s.to_string(),
            })
    }
}

impl FromStr for CarrierLoad {
    type Err = ParseCategoryError;

    /// Parse a load level, ignoring ASCII case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CarrierLoad::ALL
            .into_iter()
            .find(|load| load.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseCategoryError {
                kind: "carrier load",
                value: s.to_string(),
            })
    }
}

/// Errors that can occur while estimating a delivery cost
///
/// All variants are caller input errors. None of them is transient.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EstimateError {
    #[error("Missing required parameter: {parameter}")]
    MissingParameter { parameter: &'static str },

    #[error("Delivery distance cannot be negative or zero")]
    InvalidDistance,

    #[error("Fragile cargo cannot be delivered further than 30 km")]
    FragileDistanceExceeded,
}

impl EstimateError {
    /// True for rejections of a well-formed request on business grounds
    pub fn is_business_rule(&self) -> bool {
        matches!(self, EstimateError::FragileDistanceExceeded)
    }
}

/// A single shipment submitted for pricing
///
/// # Example
/// ```
/// use cargo_delivery_cost_rs::{CargoSize, CarrierLoad, ShipmentRequest};
///
/// let request = ShipmentRequest::new(15.0, CargoSize::Big, true, CarrierLoad::Normal);
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipmentRequest {
    /// Delivery distance in kilometers
    pub distance_km: f64,

    /// Cargo size category (`None` when the caller did not supply one)
    #[serde(default)]
    pub size: Option<CargoSize>,

    /// Whether the cargo is fragile
    pub fragile: bool,

    /// Carrier load level (`None` when the caller did not supply one)
    #[serde(default)]
    pub load: Option<CarrierLoad>,
}

impl ShipmentRequest {
    /// Create a fully specified request
    pub fn new(distance_km: f64, size: CargoSize, fragile: bool, load: CarrierLoad) -> Self {
        Self {
            distance_km,
            size: Some(size),
            fragile,
            load: Some(load),
        }
    }

    /// Run the gating checks without computing any fee
    ///
    /// Checks are applied in order: distance, fragile distance limit, then
    /// presence of size and load. Returns the resolved categories.
    ///
    /// # Errors
    /// - `InvalidDistance` if distance is not a positive finite number
    /// - `FragileDistanceExceeded` if fragile cargo travels beyond 30 km
    /// - `MissingParameter` if size or load is absent
    pub fn validate(&self) -> Result<(CargoSize, CarrierLoad), EstimateError> {
        let distance = self.distance_km;

        // NaN fails every comparison, so test finiteness explicitly
        if !distance.is_finite() || distance <= 0.0 {
            return Err(EstimateError::InvalidDistance);
        }

        if self.fragile && distance > LONG_DISTANCE_KM {
            return Err(EstimateError::FragileDistanceExceeded);
        }

        let size = self.size.ok_or(EstimateError::MissingParameter {
            parameter: "size",
        })?;
        let load = self.load.ok_or(EstimateError::MissingParameter {
            parameter: "load",
        })?;

        Ok((size, load))
    }
}
