//! Fee Schema Documentation
//!
//! Self-documenting schema for the fixed fee table.
//! Values are rendered from the constants in `rates.rs`, so the
//! documentation cannot drift from what the calculator charges.

use serde::{Deserialize, Serialize};

use super::rates::*;
use crate::models::{CargoSize, CarrierLoad};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Category for grouping fee elements
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FeeCategory {
    /// Additive fee chosen by distance tier
    DistanceTier,
    /// Additive fee chosen by cargo size
    CargoSize,
    /// Additive surcharge for fragile cargo
    Fragility,
    /// Multiplier applied to the fee sum
    LoadMultiplier,
    /// Minimum billable cost
    Floor,
}

/// Worked example for a fee element
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeeExample {
    /// Scenario description
    pub scenario: String,
    /// Input values as (name, value) pairs
    pub inputs: Vec<(String, String)>,
    /// Calculation steps
    pub calculation: String,
    /// Final result
    pub result: String,
}

/// Documentation for a single fee element
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeeElement {
    /// Element name (e.g., "short_distance_fee")
    pub name: String,

    /// Human-readable display name (e.g., "Short Distance Fee")
    pub display_name: String,

    /// Category for filtering
    pub category: FeeCategory,

    /// What this fee represents
    pub description: String,

    /// When the fee applies
    pub applies_when: String,

    /// Value as charged
    pub default_value: String,

    /// Unit of measurement
    pub unit: String,

    /// Related elements
    pub see_also: Vec<String>,

    /// Example calculation
    pub example: Option<FeeExample>,
}

/// Complete fee schema documentation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeSchemaDoc {
    pub version: String,
    /// Formula combining all elements
    pub formula: String,
    pub fee_types: Vec<FeeElement>,
}

/// Trait for types that can describe their fee elements
pub trait FeeSchemaDocumented {
    fn schema_docs() -> Vec<FeeElement>;
}

/// The fixed fee table used by the calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct FeeSchedule;

// ============================================================================
// IMPLEMENTATIONS
// ============================================================================

const COST_FORMULA: &str =
    "max((distance_fee + size_fee + fragility_fee) * load_multiplier, base_delivery_cost)";

fn distance_tier_element(tier: DistanceTier) -> FeeElement {
    let (name, display_name, range) = match tier {
        DistanceTier::Short => ("short_distance_fee", "Short Distance Fee", "0 < distance <= 2 km"),
        DistanceTier::Middle => ("middle_distance_fee", "Middle Distance Fee", "2 < distance <= 10 km"),
        DistanceTier::Long => ("long_distance_fee", "Long Distance Fee", "10 < distance <= 30 km"),
        DistanceTier::VeryLong => (
            "very_long_distance_fee",
            "Very Long Distance Fee",
            "distance > 30 km (non-fragile cargo only)",
        ),
    };

    FeeElement {
        name: name.to_string(),
        display_name: display_name.to_string(),
        category: FeeCategory::DistanceTier,
        description: "Additive fee selected by the delivery distance tier. \
            Tier bounds are inclusive at the top."
            .to_string(),
        applies_when: range.to_string(),
        default_value: format!("{:.1}", tier.fee()),
        unit: "currency units".to_string(),
        see_also: vec!["base_delivery_cost".to_string()],
        example: None,
    }
}

fn load_element(load: CarrierLoad) -> FeeElement {
    let display_name = match load {
        CarrierLoad::Normal => "Normal Load Multiplier",
        CarrierLoad::Increased => "Increased Load Multiplier",
        CarrierLoad::High => "High Load Multiplier",
        CarrierLoad::Heavy => "Heavy Load Multiplier",
    };

    FeeElement {
        name: format!("{}_load_multiplier", load.as_str().to_ascii_lowercase()),
        display_name: display_name.to_string(),
        category: FeeCategory::LoadMultiplier,
        description: "Multiplier applied to the sum of distance, size and fragility fees, \
            reflecting how busy the carrier is."
            .to_string(),
        applies_when: format!("carrier load is {}", load.as_str()),
        default_value: format!("{:.1}", load.multiplier()),
        unit: "multiplier".to_string(),
        see_also: vec!["base_delivery_cost".to_string()],
        example: None,
    }
}

impl FeeSchemaDocumented for FeeSchedule {
    fn schema_docs() -> Vec<FeeElement> {
        let mut docs: Vec<FeeElement> = DistanceTier::ALL
            .into_iter()
            .map(distance_tier_element)
            .collect();

        // Size fees
        for size in CargoSize::ALL {
            let lower = size.as_str().to_ascii_lowercase();
            let display = match size {
                CargoSize::Small => "Small Cargo Fee",
                CargoSize::Big => "Big Cargo Fee",
            };
            docs.push(FeeElement {
                name: format!("{}_size_fee", lower),
                display_name: display.to_string(),
                category: FeeCategory::CargoSize,
                description: "Additive fee selected by the cargo size category.".to_string(),
                applies_when: format!("cargo size is {}", size.as_str()),
                default_value: format!("{:.1}", size.fee()),
                unit: "currency units".to_string(),
                see_also: vec!["fragile_fee".to_string()],
                example: None,
            });
        }

        docs.push(FeeElement {
            name: "fragile_fee".to_string(),
            display_name: "Fragile Cargo Surcharge".to_string(),
            category: FeeCategory::Fragility,
            description: "Surcharge for fragile cargo. Fragile cargo is only \
                accepted for distances up to 30 km."
                .to_string(),
            applies_when: "fragile flag is set".to_string(),
            default_value: format!("{:.1}", FRAGILE_FEE),
            unit: "currency units".to_string(),
            see_also: vec!["long_distance_fee".to_string()],
            example: Some(FeeExample {
                scenario: "Big fragile cargo over 15 km at normal load".to_string(),
                inputs: vec![
                    ("distance".to_string(), "15 km".to_string()),
                    ("size".to_string(), "BIG".to_string()),
                    ("fragile".to_string(), "true".to_string()),
                    ("load".to_string(), "NORMAL".to_string()),
                ],
                calculation: "(200 + 200 + 300) * 1.0 = 700".to_string(),
                result: "700.0".to_string(),
            }),
        });

        docs.extend(CarrierLoad::ALL.into_iter().map(load_element));

        docs.push(FeeElement {
            name: "base_delivery_cost".to_string(),
            display_name: "Base Delivery Cost".to_string(),
            category: FeeCategory::Floor,
            description: "Minimum billable cost. Quotes below it are raised to it.".to_string(),
            applies_when: "computed cost is below the floor".to_string(),
            default_value: format!("{:.1}", BASE_DELIVERY_COST),
            unit: "currency units".to_string(),
            see_also: vec!["short_distance_fee".to_string(), "small_size_fee".to_string()],
            example: Some(FeeExample {
                scenario: "Small non-fragile cargo over 1 km at normal load".to_string(),
                inputs: vec![
                    ("distance".to_string(), "1 km".to_string()),
                    ("size".to_string(), "SMALL".to_string()),
                    ("load".to_string(), "NORMAL".to_string()),
                ],
                calculation: "max((50 + 100 + 0) * 1.0, 400) = 400".to_string(),
                result: "400.0".to_string(),
            }),
        });

        docs
    }
}

/// Get the complete fee schema as pretty-printed JSON
pub fn get_fee_schema() -> serde_json::Result<String> {
    let schema = FeeSchemaDoc {
        version: "1.0".to_string(),
        formula: COST_FORMULA.to_string(),
        fee_types: FeeSchedule::schema_docs(),
    };

    serde_json::to_string_pretty(&schema)
}
