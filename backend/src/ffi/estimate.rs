//! PyO3 wrappers for the delivery cost estimator
//!
//! # Example (from Python)
//!
//! ```python
//! from cargo_delivery_cost_rs import compute_cost
//!
//! cost = compute_cost(15.0, "BIG", True, "INCREASED")
//! assert abs(cost - 840.0) < 1e-4
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::costs::get_fee_schema;
use crate::estimate::{self, EstimateError};
use crate::models::{CargoSize, CarrierLoad, ParseCategoryError};

fn estimate_error_to_py(err: EstimateError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn parse_error_to_py(err: ParseCategoryError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Parse an optional category name, leaving absence for the estimator to report
fn parse_optional<T>(value: Option<String>) -> PyResult<Option<T>>
where
    T: std::str::FromStr<Err = ParseCategoryError>,
{
    value
        .map(|s| s.parse::<T>())
        .transpose()
        .map_err(parse_error_to_py)
}

/// Compute the delivery cost for a single shipment
///
/// # Errors
///
/// Raises ValueError if:
/// - size or load is not a known category name
/// - size or load is None
/// - distance is not positive
/// - fragile cargo travels beyond 30 km
#[pyfunction]
#[pyo3(signature = (distance, size=None, fragile=false, load=None))]
pub fn compute_cost(
    distance: f64,
    size: Option<String>,
    fragile: bool,
    load: Option<String>,
) -> PyResult<f64> {
    let size = parse_optional::<CargoSize>(size)?;
    let load = parse_optional::<CarrierLoad>(load)?;

    estimate::compute_cost(distance, size, fragile, load).map_err(estimate_error_to_py)
}

/// Fee schema documentation as a JSON string
#[pyfunction]
pub fn fee_schema_json() -> PyResult<String> {
    get_fee_schema().map_err(|e| PyValueError::new_err(e.to_string()))
}
