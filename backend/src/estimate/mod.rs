//! Delivery cost estimation
//!
//! - **calculator**: Fee arithmetic (`CostCalculator`, `compute_cost`)
//! - **breakdown**: Itemized result (`CostBreakdown`)
//!
//! Request validation lives on `ShipmentRequest`; `EstimateError` is
//! re-exported here for callers that only use this module.

pub mod breakdown;
pub mod calculator;

// Re-exports
pub use crate::models::EstimateError;
pub use breakdown::CostBreakdown;
pub use calculator::{compute_cost, CostCalculator};
