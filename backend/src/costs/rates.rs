//! Fee Tables and Related Types
//!
//! Fixed fees that make up a delivery quote. All amounts are in the
//! quoting currency's major unit; multipliers are dimensionless.

use serde::{Deserialize, Serialize};

use crate::models::{CargoSize, CarrierLoad};

/// Minimum billable cost for any shipment
pub const BASE_DELIVERY_COST: f64 = 400.0;

/// Upper bound (inclusive) of the short-distance tier, km
pub const SHORT_DISTANCE_KM: f64 = 2.0;
/// Upper bound (inclusive) of the middle-distance tier, km
pub const MIDDLE_DISTANCE_KM: f64 = 10.0;
/// Upper bound (inclusive) of the long-distance tier, km.
/// Fragile cargo is never carried beyond this.
pub const LONG_DISTANCE_KM: f64 = 30.0;

pub const SHORT_DISTANCE_FEE: f64 = 50.0;
pub const MIDDLE_DISTANCE_FEE: f64 = 100.0;
pub const LONG_DISTANCE_FEE: f64 = 200.0;
pub const VERY_LONG_DISTANCE_FEE: f64 = 300.0;

pub const BIG_SIZE_FEE: f64 = 200.0;
pub const SMALL_SIZE_FEE: f64 = 100.0;

/// Surcharge for fragile cargo
pub const FRAGILE_FEE: f64 = 300.0;

pub const NORMAL_LOAD_MULTIPLIER: f64 = 1.0;
pub const INCREASED_LOAD_MULTIPLIER: f64 = 1.2;
pub const HIGH_LOAD_MULTIPLIER: f64 = 1.4;
pub const HEAVY_LOAD_MULTIPLIER: f64 = 1.6;

/// Distance tier for pricing
///
/// Tiers are upper-bound inclusive: 2.0 km is `Short`, 2.01 km is `Middle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DistanceTier {
    /// (0, 2] km
    Short,
    /// (2, 10] km
    Middle,
    /// (10, 30] km
    Long,
    /// (30, ∞) km
    VeryLong,
}

impl DistanceTier {
    /// All tiers, nearest first
    pub const ALL: [DistanceTier; 4] = [
        DistanceTier::Short,
        DistanceTier::Middle,
        DistanceTier::Long,
        DistanceTier::VeryLong,
    ];

    /// Get the tier for a distance in kilometers
    ///
    /// The caller is responsible for rejecting non-positive distances;
    /// anything at or below 2 km lands in `Short`.
    ///
    /// # Example
    /// ```
    /// use cargo_delivery_cost_rs::costs::DistanceTier;
    ///
    /// assert_eq!(DistanceTier::from_distance(2.0), DistanceTier::Short);
    /// assert_eq!(DistanceTier::from_distance(2.01), DistanceTier::Middle);
    /// ```
    pub fn from_distance(distance_km: f64) -> Self {
        if distance_km > LONG_DISTANCE_KM {
            DistanceTier::VeryLong
        } else if distance_km > MIDDLE_DISTANCE_KM {
            DistanceTier::Long
        } else if distance_km > SHORT_DISTANCE_KM {
            DistanceTier::Middle
        } else {
            DistanceTier::Short
        }
    }

    /// Additive fee for this tier
    pub fn fee(&self) -> f64 {
        match self {
            DistanceTier::Short => SHORT_DISTANCE_FEE,
            DistanceTier::Middle => MIDDLE_DISTANCE_FEE,
            DistanceTier::Long => LONG_DISTANCE_FEE,
            DistanceTier::VeryLong => VERY_LONG_DISTANCE_FEE,
        }
    }

    /// Inclusive upper bound in km, `None` for the open-ended tier
    pub fn upper_bound_km(&self) -> Option<f64> {
        match self {
            DistanceTier::Short => Some(SHORT_DISTANCE_KM),
            DistanceTier::Middle => Some(MIDDLE_DISTANCE_KM),
            DistanceTier::Long => Some(LONG_DISTANCE_KM),
            DistanceTier::VeryLong => None,
        }
    }
}

impl CargoSize {
    /// Additive fee for this size category
    pub fn fee(&self) -> f64 {
        match self {
            CargoSize::Big => BIG_SIZE_FEE,
            CargoSize::Small => SMALL_SIZE_FEE,
        }
    }
}

impl CarrierLoad {
    /// Multiplier applied to the fee sum
    pub fn multiplier(&self) -> f64 {
        match self {
            CarrierLoad::Normal => NORMAL_LOAD_MULTIPLIER,
            CarrierLoad::Increased => INCREASED_LOAD_MULTIPLIER,
            CarrierLoad::High => HIGH_LOAD_MULTIPLIER,
            CarrierLoad::Heavy => HEAVY_LOAD_MULTIPLIER,
        }
    }
}

/// Surcharge for the fragility flag
pub fn fragility_fee(fragile: bool) -> f64 {
    if fragile {
        FRAGILE_FEE
    } else {
        0.0
    }
}
