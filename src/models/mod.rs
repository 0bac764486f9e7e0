// Models for the HPR analysis
// These modules contain pure computation independent of reporting

pub mod regression;
pub mod synthetic;
pub mod trend_curve;

// Re-export key types for convenience
pub use regression::{RegressionError, RegressionModel};
pub use synthetic::{SeriesSummary, SyntheticPoint, SyntheticSeries, seeded_rng};
pub use trend_curve::{KeyLevel, TrendCurve, TrendSample, key_levels};
