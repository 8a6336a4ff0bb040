//! Cost Estimate Tests
//!
//! End-to-end pricing scenarios through `compute_cost` and `CostCalculator`.
//!
//! **Coverage**:
//! - Reference quotes for every load level
//! - Tier boundaries at 2, 10 and 30 km (inclusive at the top)
//! - Base delivery cost floor
//! - Itemized breakdown consistency
//! - Debug event on successful estimates

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use cargo_delivery_cost_rs::{
    compute_cost, CargoSize, CarrierLoad, CostCalculator, DistanceTier, ShipmentRequest,
};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Allowed deviation when comparing computed costs
const ALLOWED_COST_DELTA: f64 = 0.0001;

/// Helper to price a fully specified shipment
fn cost(distance: f64, size: CargoSize, fragile: bool, load: CarrierLoad) -> f64 {
    compute_cost(distance, Some(size), fragile, Some(load)).unwrap()
}

fn assert_cost(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < ALLOWED_COST_DELTA,
        "expected {}, got {}",
        expected,
        actual
    );
}

// ============================================================================
// Test Group 1: Reference scenarios
// ============================================================================

#[test]
fn test_reference_quotes() {
    use CargoSize::*;
    use CarrierLoad::*;

    let cases = [
        (0.01, Small, false, Normal, 400.0),
        (1.37, Small, false, Normal, 400.0),
        (2.00, Small, false, Normal, 400.0),
        (2.01, Small, false, Normal, 400.0),
        (6.5, Small, false, Normal, 400.0),
        (9.99, Small, false, Normal, 400.0),
        (10.00, Small, false, Normal, 400.0),
        (10.01, Small, false, Normal, 400.0),
        (21.0, Small, false, Normal, 400.0),
        (29.99, Small, false, Normal, 400.0),
        (30.00, Small, false, Normal, 400.0),
        (30.01, Small, false, Normal, 400.0),
        (5_000.0, Small, false, Normal, 400.0),
        (1.00, Big, false, Normal, 400.0),
        (5.00, Big, false, Normal, 400.0),
        (15.00, Big, false, Normal, 400.0),
        (5.00, Big, true, Normal, 600.0),
        (29.99, Big, true, Normal, 700.0),
        (15.00, Big, true, Normal, 700.0),
        (15.00, Big, true, Increased, 840.0),
        (15.00, Big, true, High, 980.0),
        (15.00, Big, true, Heavy, 1120.0),
    ];

    for (distance, size, fragile, load, expected) in cases {
        let actual = cost(distance, size, fragile, load);
        assert!(
            (actual - expected).abs() < ALLOWED_COST_DELTA,
            "cost({}, {}, {}, {}) = {}, expected {}",
            distance,
            size,
            fragile,
            load,
            actual,
            expected
        );
    }
}

#[test]
fn test_very_long_non_fragile_delivery() {
    // 300 + 200 = 500, above the floor
    assert_cost(cost(30.01, CargoSize::Big, false, CarrierLoad::Normal), 500.0);
    assert_cost(cost(1e6, CargoSize::Big, false, CarrierLoad::Heavy), 800.0);
}

// ============================================================================
// Test Group 2: Tier boundaries
// ============================================================================

#[test]
fn test_tier_boundaries_with_fragile_big_cargo() {
    // Fragile big cargo keeps every tier above the floor
    let big_fragile = |d| cost(d, CargoSize::Big, true, CarrierLoad::Normal);

    assert_cost(big_fragile(2.00), 550.0);
    assert_cost(big_fragile(2.01), 600.0);
    assert_cost(big_fragile(10.00), 600.0);
    assert_cost(big_fragile(10.01), 700.0);
    assert_cost(big_fragile(30.00), 700.0);
}

#[test]
fn test_tier_boundary_at_thirty_km() {
    let big_heavy = |d| cost(d, CargoSize::Big, false, CarrierLoad::Heavy);

    assert_cost(big_heavy(30.00), 640.0);
    assert_cost(big_heavy(30.01), 800.0);
}

#[test]
fn test_breakdown_reports_tier_below_floor() {
    let calculator = CostCalculator::new();
    let cases = [
        (2.00, DistanceTier::Short, 50.0),
        (2.01, DistanceTier::Middle, 100.0),
        (10.00, DistanceTier::Middle, 100.0),
        (10.01, DistanceTier::Long, 200.0),
        (30.00, DistanceTier::Long, 200.0),
        (30.01, DistanceTier::VeryLong, 300.0),
    ];

    for (distance, tier, fee) in cases {
        let request = ShipmentRequest::new(distance, CargoSize::Small, false, CarrierLoad::Normal);
        let breakdown = calculator.estimate(&request).unwrap();
        assert_eq!(breakdown.distance_tier, tier, "distance {}", distance);
        assert_eq!(breakdown.distance_fee, fee, "distance {}", distance);
        assert_eq!(breakdown.total, 400.0);
    }
}

// ============================================================================
// Test Group 3: Breakdown consistency
// ============================================================================

#[test]
fn test_breakdown_total_matches_quote() {
    let calculator = CostCalculator::new();

    for size in CargoSize::ALL {
        for load in CarrierLoad::ALL {
            for fragile in [false, true] {
                for distance in [0.5, 2.0, 7.0, 10.0, 25.0, 30.0] {
                    let request = ShipmentRequest::new(distance, size, fragile, load);
                    let breakdown = calculator.estimate(&request).unwrap();
                    let quote = calculator.quote(&request).unwrap();

                    assert_eq!(breakdown.total, quote);
                    assert_cost(
                        breakdown.raw_cost,
                        breakdown.surcharge_sum() * breakdown.load_multiplier,
                    );
                    assert_eq!(breakdown.total, breakdown.raw_cost.max(400.0));
                }
            }
        }
    }
}

#[test]
fn test_request_from_json() {
    let json = r#"{"distance_km": 15.0, "size": "BIG", "fragile": true, "load": "HIGH"}"#;
    let request: ShipmentRequest = serde_json::from_str(json).unwrap();

    let quote = CostCalculator::new().quote(&request).unwrap();
    assert_cost(quote, 980.0);
}

// ============================================================================
// Test Group 4: Logging
// ============================================================================

/// Shared in-memory sink for formatted log lines
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a debug-level subscriber writing into a fresh buffer
fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_writer(logs.clone())
        .with_ansi(false)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, logs.contents())
}

#[test]
fn test_estimate_emits_debug_event() {
    let (quote, output) =
        with_captured_logs(|| cost(3.0, CargoSize::Big, true, CarrierLoad::Increased));

    assert_cost(quote, 720.0);
    assert!(output.contains("DEBUG"), "{}", output);
    assert!(output.contains("estimated delivery cost"), "{}", output);
    assert!(output.contains("distance_km=3"), "{}", output);
    assert!(output.contains("size=BIG"), "{}", output);
    assert!(output.contains("fragile=true"), "{}", output);
    assert!(output.contains("load=INCREASED"), "{}", output);
    assert!(output.contains("total=720"), "{}", output);
}

#[test]
fn test_rejected_estimate_is_not_logged() {
    let (result, output) = with_captured_logs(|| {
        compute_cost(30.01, Some(CargoSize::Big), true, Some(CarrierLoad::Normal))
    });

    assert!(result.is_err());
    assert!(output.is_empty(), "unexpected log output: {}", output);
}
