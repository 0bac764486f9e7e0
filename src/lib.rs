// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use analysis::{HprReport, ZoneMultipliers};
pub use data::{HistoryDataset, load_embedded};
pub use domain::{HalvingPoint, MonthlyAverages, ZoneTier};
pub use models::{RegressionModel, SyntheticSeries, TrendCurve};

use anyhow::{Context, Result};

use crate::config::{REPORT, SYNTHETIC, ZONES};
use crate::models::seeded_rng;
use crate::utils::TimeUtils;

/// Main analysis entry point: load the embedded history, build the weekly
/// series and assemble the report.
/// This is the public API for the binary to call
pub fn run_analysis() -> Result<HprReport> {
    let dataset = load_embedded().context("Failed to load embedded price history")?;

    let mut rng = seeded_rng(SYNTHETIC.seed);
    let series = SyntheticSeries::generate(&dataset.monthly_averages, &SYNTHETIC, &mut rng)
        .context("Failed to generate weekly price series")?;

    let current_year = REPORT
        .current_year_override
        .unwrap_or_else(TimeUtils::current_year_fraction);

    HprReport::build(&dataset, &series, &ZONES, current_year)
}
