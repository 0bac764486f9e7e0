// Zone evaluation, statistics and reporting
pub mod report;
pub mod validation;
pub mod zone_efficacy;
pub mod zones;

// Re-export commonly used types
pub use report::{CurrentAnalysis, HprReport, current_analysis};
pub use validation::{HalvingCheck, validate_halvings};
pub use zone_efficacy::{Recommendation, ZoneStats, compute_zone_stats};
pub use zones::{ZoneBands, ZoneConfigError, ZoneMultipliers};
