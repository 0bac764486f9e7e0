//! Regression model and trend curve configuration

/// Year the log-time axis is anchored at. Every halving year must come after it.
pub const GENESIS_YEAR: i32 = 2008;

/// Settings for sampling the extended trendline and its bands
pub struct TrendCurveConfig {
    pub start_year: f64,
    pub end_year: f64,
    // Number of evenly spaced samples (inclusive of both ends)
    pub samples: usize,
}

/// The Master Model Configuration
pub struct ModelConfig {
    pub genesis_year: i32,
    pub trend_curve: TrendCurveConfig,
    // Years at which the trend price is annotated as a key level
    pub key_level_years: &'static [i32],
}

pub const MODEL: ModelConfig = ModelConfig {
    genesis_year: GENESIS_YEAR,

    trend_curve: TrendCurveConfig {
        // 2..30 years after genesis
        start_year: 2010.0,
        end_year: 2038.0,
        samples: 1000,
    },

    key_level_years: &[2016, 2020, 2024, 2028, 2032, 2036],
};
