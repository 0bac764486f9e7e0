//! Configuration module for the HPR zone analysis.

pub mod model;
pub mod persistence;
pub mod report;
pub mod synthetic;
pub mod zones;

mod debug; // Private; files use crate::config::PRINT_* via the re-export below
pub use debug::{PRINT_FIT_POINTS, PRINT_SYNTHETIC_SUMMARY, PRINT_ZONE_CLASSIFICATIONS};

// Re-export commonly used items
pub use model::{GENESIS_YEAR, MODEL};
pub use persistence::{DATASET_VERSION, EMBEDDED_DATASET};
pub use report::REPORT;
pub use synthetic::SYNTHETIC;
pub use zones::ZONES;
