//! Cargo Delivery Cost Estimator
//!
//! Prices a single cargo shipment from its distance, size, fragility and the
//! carrier's current load.
//!
//! # Architecture
//!
//! - **models**: Request types (ShipmentRequest, CargoSize, CarrierLoad)
//! - **costs**: Fixed fee tables and their schema documentation
//! - **estimate**: Validation and cost calculation
//!
//! # Critical Invariants
//!
//! 1. Every quote is at least the base delivery cost (400.0)
//! 2. Fragile cargo is never quoted beyond 30 km
//! 3. Estimation is pure: no I/O, no shared mutable state

// Module declarations
pub mod costs;
pub mod estimate;
pub mod models;

// Re-exports for convenience
pub use costs::{get_fee_schema, DistanceTier, FeeSchedule, BASE_DELIVERY_COST};
pub use estimate::{compute_cost, CostBreakdown, CostCalculator, EstimateError};
pub use models::{CargoSize, CarrierLoad, ParseCategoryError, ShipmentRequest};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn cargo_delivery_cost_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::estimate::compute_cost, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::estimate::fee_schema_json, m)?)?;
    Ok(())
}
