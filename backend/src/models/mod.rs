//! Domain models for delivery cost estimation

pub mod cargo;

// Re-exports
pub use cargo::{CargoSize, CarrierLoad, EstimateError, ParseCategoryError, ShipmentRequest};
