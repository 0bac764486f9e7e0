//! Zone statistics and report configuration

/// Thresholds (as fractions of analysed points) that trigger multiplier tuning hints
pub struct RecommendationThresholds {
    pub max_extreme_resistance_breach: f64,
    pub min_normal_range_time: f64,
    pub max_extreme_support_breach: f64,
}

pub struct ReportConfig {
    /// Synthetic points before this year are excluded from zone statistics
    pub analysis_start_year: f64,
    pub recommendations: RecommendationThresholds,
    /// Pin the "current" analysis to a fractional year instead of the wall clock
    pub current_year_override: Option<f64>,
}

pub const REPORT: ReportConfig = ReportConfig {
    analysis_start_year: 2012.0,

    recommendations: RecommendationThresholds {
        max_extreme_resistance_breach: 0.05,
        min_normal_range_time: 0.4,
        max_extreme_support_breach: 0.05,
    },

    current_year_override: None,
};
