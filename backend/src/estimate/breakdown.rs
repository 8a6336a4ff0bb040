//! Itemized result of a cost estimate

use serde::{Deserialize, Serialize};

use crate::costs::rates::{DistanceTier, BASE_DELIVERY_COST};

/// Fee contributions behind a single quote
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Tier the distance fell into
    pub distance_tier: DistanceTier,

    /// Additive fee for the distance tier
    pub distance_fee: f64,

    /// Additive fee for the cargo size
    pub size_fee: f64,

    /// Fragility surcharge (0 for non-fragile cargo)
    pub fragility_fee: f64,

    /// Carrier load multiplier
    pub load_multiplier: f64,

    /// Fee sum times load multiplier, before the floor
    pub raw_cost: f64,

    /// Final billable cost, never below the base delivery cost
    pub total: f64,
}

impl CostBreakdown {
    /// Sum of the additive fees, before the load multiplier
    pub fn surcharge_sum(&self) -> f64 {
        self.distance_fee + self.size_fee + self.fragility_fee
    }

    /// True when the base delivery cost replaced the computed cost
    pub fn floor_applied(&self) -> bool {
        self.raw_cost < BASE_DELIVERY_COST
    }
}
