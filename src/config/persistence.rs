//! Embedded dataset location and versioning

/// Current version of the historical dataset format.
/// Bump when the JSON layout changes.
pub const DATASET_VERSION: f64 = 1.0;

/// Historical halving prices and monthly averages, compiled into the binary.
pub const EMBEDDED_DATASET: &str = include_str!("../../data/btc_history.json");
