use std::fmt;

use strum::IntoEnumIterator;

use crate::analysis::zones::{ZoneMultipliers, trend_ratio};
use crate::config::PRINT_ZONE_CLASSIFICATIONS;
use crate::config::report::RecommendationThresholds;
use crate::domain::ZoneTier;
use crate::models::{RegressionError, RegressionModel, SyntheticSeries};
use crate::utils::maths_utils::{pct, percentile};

/// How the synthetic weekly series distributes across the bands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneStats {
    /// Indexed by `ZoneTier::index()`
    pub tier_counts: [usize; ZoneTier::COUNT],
    /// Points on or after the analysis start year
    pub total_points: usize,
    /// Points above the extreme resistance line
    pub extreme_resistance_breaches: usize,
    /// Points below the extreme support line
    pub extreme_support_breaches: usize,
    pub ratio_p10: f64,
    pub ratio_median: f64,
    pub ratio_p90: f64,
}

/// Multiplier tuning hints
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Recommendation {
    RaiseExtremeResistance { current: f64 },
    WidenNormalRange { lower: f64, upper: f64 },
    LowerExtremeSupport { current: f64 },
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Recommendation::RaiseExtremeResistance { current } => write!(
                f,
                "Consider increasing the extreme resistance multiplier (currently {current}x)"
            ),
            Recommendation::WidenNormalRange { lower, upper } => write!(
                f,
                "Consider widening the normal range bounds (currently {lower}x - {upper}x)"
            ),
            Recommendation::LowerExtremeSupport { current } => write!(
                f,
                "Consider decreasing the extreme support multiplier (currently {current}x)"
            ),
        }
    }
}

impl ZoneStats {
    pub fn count(&self, tier: ZoneTier) -> usize {
        self.tier_counts[tier.index()]
    }

    /// Share of analysed points in `tier` (0–100)
    pub fn tier_pct(&self, tier: ZoneTier) -> f64 {
        pct(self.count(tier), self.total_points)
    }

    pub fn extreme_resistance_breach_pct(&self) -> f64 {
        pct(self.extreme_resistance_breaches, self.total_points)
    }

    pub fn extreme_support_breach_pct(&self) -> f64 {
        pct(self.extreme_support_breaches, self.total_points)
    }

    /// Tier breakdown, highest band first
    pub fn tier_breakdown(&self) -> Vec<(ZoneTier, usize, f64)> {
        ZoneTier::iter()
            .map(|tier| (tier, self.count(tier), self.tier_pct(tier)))
            .collect()
    }

    pub fn recommendations(
        &self,
        multipliers: &ZoneMultipliers,
        thresholds: &RecommendationThresholds,
    ) -> Vec<Recommendation> {
        let mut hints = Vec::new();
        if self.total_points == 0 {
            return hints;
        }

        if self.extreme_resistance_breach_pct() / 100.0 > thresholds.max_extreme_resistance_breach {
            hints.push(Recommendation::RaiseExtremeResistance {
                current: multipliers.extreme_resistance,
            });
        }
        if self.tier_pct(ZoneTier::NormalRange) / 100.0 < thresholds.min_normal_range_time {
            hints.push(Recommendation::WidenNormalRange {
                lower: multipliers.lower_normal,
                upper: multipliers.upper_normal,
            });
        }
        if self.extreme_support_breach_pct() / 100.0 > thresholds.max_extreme_support_breach {
            hints.push(Recommendation::LowerExtremeSupport {
                current: multipliers.extreme_support,
            });
        }
        hints
    }
}

/// Classify every synthetic point from `start_year` on against the trend.
pub fn compute_zone_stats(
    model: &RegressionModel,
    series: &SyntheticSeries,
    multipliers: &ZoneMultipliers,
    start_year: f64,
) -> Result<ZoneStats, RegressionError> {
    let mut stats = ZoneStats::default();
    let mut ratios = Vec::with_capacity(series.len());

    for point in series.points.iter().filter(|p| p.year >= start_year) {
        let trend_price = model.project(point.year)?;
        let ratio = trend_ratio(point.price, trend_price);
        let tier = multipliers.classify(ratio);

        stats.tier_counts[tier.index()] += 1;
        stats.total_points += 1;
        if multipliers.breaches_extreme_resistance(ratio) {
            stats.extreme_resistance_breaches += 1;
        }
        if multipliers.breaches_extreme_support(ratio) {
            stats.extreme_support_breaches += 1;
        }
        ratios.push(ratio);

        if PRINT_ZONE_CLASSIFICATIONS {
            log::debug!(
                "{:.3}: price={:.2} trend={:.2} ratio={:.3} -> {}",
                point.year,
                point.price,
                trend_price,
                ratio,
                tier
            );
        }
    }

    ratios.sort_by(f64::total_cmp);
    stats.ratio_p10 = percentile(&ratios, 0.1);
    stats.ratio_median = percentile(&ratios, 0.5);
    stats.ratio_p90 = percentile(&ratios, 0.9);

    log::info!(
        "Zone statistics over {} points (from {})",
        stats.total_points,
        start_year
    );
    Ok(stats)
}
