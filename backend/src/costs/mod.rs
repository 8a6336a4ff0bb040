//! Fee Tables and Schema Documentation
//!
//! This module provides:
//! - The fixed fee table (`rates`)
//! - Self-documenting schema for fee elements (`schema_docs`)

pub mod rates;
pub mod schema_docs;

// Re-exports
pub use rates::{fragility_fee, DistanceTier, BASE_DELIVERY_COST, LONG_DISTANCE_KM};
pub use schema_docs::{
    get_fee_schema, FeeCategory, FeeElement, FeeExample, FeeSchedule, FeeSchemaDoc,
    FeeSchemaDocumented,
};
