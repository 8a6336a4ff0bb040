//! Python bindings (feature `pyo3`)
//!
//! Thin wrappers that parse Python inputs, call the Rust estimator and map
//! `EstimateError` onto `ValueError`.

pub mod estimate;
