// Domain types and value objects
pub mod halving_point;
pub mod zone_tier;

// Re-export commonly used types
pub use halving_point::{HalvingPoint, MonthlyAverages};
pub use zone_tier::ZoneTier;
