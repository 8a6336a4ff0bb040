//! Delivery cost calculator
//!
//! Validates a shipment request and combines the fee contributions:
//!
//! ```text
//! total = max((distance_fee + size_fee + fragility_fee) * load_multiplier, 400.0)
//! ```
//!
//! Gating checks run before any fee is computed, in this order:
//! 1. distance must be finite and positive
//! 2. fragile cargo must not travel beyond 30 km
//! 3. size and load must be present

use tracing::debug;

use super::breakdown::CostBreakdown;
use crate::costs::rates::{fragility_fee, DistanceTier, BASE_DELIVERY_COST};
use crate::models::{CargoSize, CarrierLoad, EstimateError, ShipmentRequest};

/// Stateless delivery cost calculator
///
/// # Example
/// ```
/// use cargo_delivery_cost_rs::{CargoSize, CarrierLoad, CostCalculator, ShipmentRequest};
///
/// let calculator = CostCalculator::new();
/// let request = ShipmentRequest::new(15.0, CargoSize::Big, true, CarrierLoad::Increased);
///
/// let breakdown = calculator.estimate(&request).unwrap();
/// assert!((breakdown.total - 840.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CostCalculator;

impl CostCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Validate the request and compute every fee contribution
    ///
    /// # Errors
    /// - `InvalidDistance` if distance is not a positive finite number
    /// - `FragileDistanceExceeded` if fragile cargo travels beyond 30 km
    /// - `MissingParameter` if size or load is absent
    pub fn estimate(&self, request: &ShipmentRequest) -> Result<CostBreakdown, EstimateError> {
        let (size, load) = request.validate()?;

        let distance_tier = DistanceTier::from_distance(request.distance_km);
        let distance_fee = distance_tier.fee();
        let size_fee = size.fee();
        let fragility_fee = fragility_fee(request.fragile);
        let load_multiplier = load.multiplier();

        let raw_cost = (distance_fee + size_fee + fragility_fee) * load_multiplier;
        let total = raw_cost.max(BASE_DELIVERY_COST);

        debug!(
            distance_km = request.distance_km,
            size = %size,
            fragile = request.fragile,
            load = %load,
            ?distance_tier,
            raw_cost,
            total,
            "estimated delivery cost"
        );

        Ok(CostBreakdown {
            distance_tier,
            distance_fee,
            size_fee,
            fragility_fee,
            load_multiplier,
            raw_cost,
            total,
        })
    }

    /// Validate the request and return only the final cost
    pub fn quote(&self, request: &ShipmentRequest) -> Result<f64, EstimateError> {
        self.estimate(request).map(|breakdown| breakdown.total)
    }
}

/// Compute the delivery cost for a single shipment
///
/// `size` and `load` are optional so that callers passing through
/// unvalidated input get `MissingParameter` instead of a guessed default.
///
/// # Example
/// ```
/// use cargo_delivery_cost_rs::{compute_cost, CargoSize, CarrierLoad, EstimateError};
///
/// let cost = compute_cost(0.01, Some(CargoSize::Small), false, Some(CarrierLoad::Normal));
/// assert_eq!(cost, Ok(400.0));
///
/// let err = compute_cost(0.0, Some(CargoSize::Big), true, Some(CarrierLoad::Normal));
/// assert_eq!(err, Err(EstimateError::InvalidDistance));
/// ```
pub fn compute_cost(
    distance_km: f64,
    size: Option<CargoSize>,
    fragile: bool,
    load: Option<CarrierLoad>,
) -> Result<f64, EstimateError> {
    let request = ShipmentRequest {
        distance_km,
        size,
        fragile,
        load,
    };
    CostCalculator::new().quote(&request)
}
