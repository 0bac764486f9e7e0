//! Human-readable stdout report tying the fit, projections, bands and statistics together.

use std::fmt;

use anyhow::{Context, Result};

use crate::analysis::validation::{HalvingCheck, validate_halvings};
use crate::analysis::zone_efficacy::{Recommendation, ZoneStats, compute_zone_stats};
use crate::analysis::zones::{ZoneBands, ZoneMultipliers, trend_ratio};
use crate::config::{MODEL, REPORT};
use crate::data::HistoryDataset;
use crate::domain::{HalvingPoint, ZoneTier};
use crate::models::{
    KeyLevel, RegressionError, RegressionModel, SeriesSummary, SyntheticSeries, TrendCurve,
    TrendSample, key_levels,
};
use crate::utils::{TimeUtils, format_usd};

/// Most recent monthly average against the trend
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatestObservation {
    pub year: f64,
    pub price: f64,
    pub ratio: f64,
    pub tier: ZoneTier,
}

/// Trend and band prices "now"
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentAnalysis {
    pub year: f64,
    pub trend_price: f64,
    pub bands: ZoneBands,
    pub latest: Option<LatestObservation>,
}

pub fn current_analysis(
    model: &RegressionModel,
    multipliers: &ZoneMultipliers,
    year: f64,
    latest_monthly: Option<(f64, f64)>,
) -> Result<CurrentAnalysis, RegressionError> {
    let trend_price = model.project(year)?;

    let latest = match latest_monthly {
        Some((when, price)) => {
            let ratio = trend_ratio(price, model.project(when)?);
            Some(LatestObservation {
                year: when,
                price,
                ratio,
                tier: multipliers.classify(ratio),
            })
        }
        None => None,
    };

    Ok(CurrentAnalysis {
        year,
        trend_price,
        bands: multipliers.bands(trend_price),
        latest,
    })
}

/// Everything the binary prints
#[derive(Debug, Clone)]
pub struct HprReport {
    pub model: RegressionModel,
    pub r_squared: f64,
    pub projections: Vec<HalvingPoint>,
    pub multipliers: ZoneMultipliers,
    pub key_levels: Vec<KeyLevel>,
    /// First and last sample of the extended trendline
    pub curve_span: Option<(TrendSample, TrendSample)>,
    pub curve_samples: usize,
    pub series: Option<SeriesSummary>,
    pub zone_stats: ZoneStats,
    pub recommendations: Vec<Recommendation>,
    pub current: CurrentAnalysis,
    pub validation: Vec<HalvingCheck>,
}

impl HprReport {
    pub fn build(
        dataset: &HistoryDataset,
        series: &SyntheticSeries,
        multipliers: &ZoneMultipliers,
        current_year: f64,
    ) -> Result<Self> {
        multipliers
            .validate()
            .context("Invalid zone multipliers")?;

        // 1. Fit and project
        let model = RegressionModel::fit(MODEL.genesis_year, &dataset.halvings)
            .context("Failed to fit HPR model to historical halvings")?;
        let r_squared = model.r_squared(&dataset.halvings)?;
        let projections = model
            .project_halvings(&dataset.future_halving_years)
            .context("Failed to project future halvings")?;

        // 2. Trendline and annotations
        let curve = TrendCurve::sample(
            &model,
            multipliers,
            MODEL.trend_curve.start_year,
            MODEL.trend_curve.end_year,
            MODEL.trend_curve.samples,
        )
        .context("Failed to sample trend curve")?;
        let curve_span = match (curve.first(), curve.last()) {
            (Some(first), Some(last)) => Some((*first, *last)),
            _ => None,
        };
        let last_observed = dataset
            .last_halving_year()
            .unwrap_or(MODEL.genesis_year);
        let key_levels = key_levels(&model, MODEL.key_level_years, last_observed)
            .context("Failed to compute key levels")?;

        // 3. Zone statistics over the synthetic series
        let zone_stats =
            compute_zone_stats(&model, series, multipliers, REPORT.analysis_start_year)
                .context("Failed to compute zone statistics")?;
        let recommendations = zone_stats.recommendations(multipliers, &REPORT.recommendations);

        // 4. Now, and the historical check
        let current = current_analysis(
            &model,
            multipliers,
            current_year,
            dataset.latest_monthly(),
        )
        .context("Failed to evaluate current trend")?;
        let validation = validate_halvings(&model, multipliers, &dataset.halvings)?;

        Ok(Self {
            model,
            r_squared,
            projections,
            multipliers: *multipliers,
            key_levels,
            curve_span,
            curve_samples: curve.samples.len(),
            series: series.summary(),
            zone_stats,
            recommendations,
            current,
            validation,
        })
    }
}

impl fmt::Display for HprReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let m = &self.multipliers;

        writeln!(
            f,
            "log10(price) = {:.4} * ln(x-genesis) + {:.4}",
            self.model.slope, self.model.intercept
        )?;
        writeln!(f, "R² (historical): {:.4}", self.r_squared)?;

        writeln!(f, "\nProjected future halving prices:")?;
        for point in &self.projections {
            writeln!(f, "{}: {}", point.year, format_usd(point.price))?;
        }

        writeln!(f, "\nCurrent Zone Multipliers:")?;
        writeln!(f, "Extreme Resistance: {}x", m.extreme_resistance)?;
        writeln!(f, "Strong Resistance: {}x", m.strong_resistance)?;
        writeln!(f, "Normal Range: {}x - {}x", m.lower_normal, m.upper_normal)?;
        writeln!(f, "Strong Support: {}x", m.strong_support)?;
        writeln!(f, "Extreme Support: {}x", m.extreme_support)?;

        writeln!(f, "\nHPR trend key levels:")?;
        for level in &self.key_levels {
            let marker = if level.historical { "" } else { " (projected)" };
            writeln!(f, "{}: {}{}", level.year, format_usd(level.trend_price), marker)?;
        }
        if let Some((first, last)) = &self.curve_span {
            writeln!(
                f,
                "Trendline {:.0}-{:.0} ({} samples): {} -> {}",
                first.year,
                last.year,
                self.curve_samples,
                format_usd(first.trend_price),
                format_usd(last.trend_price)
            )?;
        }

        if let Some(series) = &self.series {
            writeln!(
                f,
                "\nWeekly price series: {} points, {} to {}",
                series.points,
                TimeUtils::year_fraction_to_month_label(series.first_year),
                TimeUtils::year_fraction_to_month_label(series.last_year)
            )?;
            writeln!(
                f,
                "Peak {} ({}), trough {} ({})",
                format_usd(series.peak.price),
                TimeUtils::year_fraction_to_month_label(series.peak.year),
                format_usd(series.trough.price),
                TimeUtils::year_fraction_to_month_label(series.trough.year)
            )?;
        }

        let stats = &self.zone_stats;
        writeln!(f, "\nZone Statistics (% of time, {} points):", stats.total_points)?;
        for (tier, _, share) in stats.tier_breakdown() {
            writeln!(f, "• {tier} ({}): {share:.1}%", m.tier_range_label(tier))?;
        }
        writeln!(
            f,
            "• Above extreme resistance ({}x): {:.1}%",
            m.extreme_resistance,
            stats.extreme_resistance_breach_pct()
        )?;
        writeln!(
            f,
            "• Below extreme support ({}x): {:.1}%",
            m.extreme_support,
            stats.extreme_support_breach_pct()
        )?;
        writeln!(
            f,
            "Price/trend ratio p10 {:.2}x, median {:.2}x, p90 {:.2}x",
            stats.ratio_p10, stats.ratio_median, stats.ratio_p90
        )?;

        writeln!(f, "\nRECOMMENDED ADJUSTMENTS:")?;
        if self.recommendations.is_empty() {
            writeln!(f, "• None, current multipliers fit the series")?;
        }
        for hint in &self.recommendations {
            writeln!(f, "• {hint}")?;
        }

        let current = &self.current;
        let bands = &current.bands;
        writeln!(f, "\nCurrent Analysis ({:.2}):", current.year)?;
        writeln!(f, "Current HPR trend value: {}", format_usd(current.trend_price))?;
        writeln!(f, "Extreme Resistance zone: {}", format_usd(bands.extreme_resistance))?;
        writeln!(f, "Strong Resistance zone: {}", format_usd(bands.strong_resistance))?;
        writeln!(
            f,
            "Normal Range: {} - {}",
            format_usd(bands.lower_normal),
            format_usd(bands.upper_normal)
        )?;
        writeln!(f, "Strong Support zone: {}", format_usd(bands.strong_support))?;
        writeln!(f, "Extreme Support zone: {}", format_usd(bands.extreme_support))?;
        if let Some(latest) = &current.latest {
            writeln!(
                f,
                "Latest monthly average ({}): {} = {:.2}x trend - {}",
                TimeUtils::year_fraction_to_month_label(latest.year),
                format_usd(latest.price),
                latest.ratio,
                latest.tier
            )?;
        }

        writeln!(f, "\nHistorical Zone Validation:")?;
        for check in &self.validation {
            writeln!(
                f,
                "{}: {:.2}x trend ({} vs {}) - {}",
                check.year,
                check.ratio,
                format_usd(check.actual_price),
                format_usd(check.trend_price),
                check.tier
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SYNTHETIC, ZONES};
    use crate::data::load_embedded;
    use crate::models::seeded_rng;

    fn build_report() -> HprReport {
        let dataset = load_embedded().unwrap();
        let series = SyntheticSeries::generate(
            &dataset.monthly_averages,
            &SYNTHETIC,
            &mut seeded_rng(Some(2024)),
        )
        .unwrap();
        HprReport::build(&dataset, &series, &ZONES, 2025.7).unwrap()
    }

    #[test]
    fn report_carries_fit_and_projections() {
        let report = build_report();
        assert!((report.model.slope - 2.6634).abs() < 1e-3);
        assert_eq!(
            report.projections.iter().map(|p| p.year).collect::<Vec<_>>(),
            vec![2028, 2032, 2036]
        );
        assert_eq!(report.curve_samples, 1000);
        assert_eq!(report.validation.len(), 4);
        assert_eq!(report.key_levels.len(), 6);
    }

    #[test]
    fn current_analysis_uses_latest_month() {
        let report = build_report();
        let current = report.current;
        assert!((current.trend_price / 101_426.0 - 1.0).abs() < 1e-3);
        assert_eq!(current.bands.strong_resistance, current.trend_price * 2.5);

        let latest = current.latest.unwrap();
        assert_eq!(latest.price, 113_322.0);
        assert_eq!(latest.tier, ZoneTier::NormalRange);
    }

    #[test]
    fn rendered_report_has_every_section() {
        let text = build_report().to_string();
        for heading in [
            "log10(price) = 2.6634 * ln(x-genesis) + -2.6474",
            "Projected future halving prices:",
            "Current Zone Multipliers:",
            "HPR trend key levels:",
            "Zone Statistics",
            "• Extreme Resistance (>2.5x): ",
            "• Normal Range (0.7x-1.8x): ",
            "• Extreme Support (<=0.5x): ",
            "RECOMMENDED ADJUSTMENTS:",
            "Current Analysis (2025.70):",
            "Historical Zone Validation:",
            "Latest monthly average (2025-08): $113,322",
            "2024: 1.17x trend ($63,807 vs $54,602) - Normal Range",
        ] {
            assert!(text.contains(heading), "missing {heading:?} in:\n{text}");
        }
    }

    #[test]
    fn invalid_multipliers_abort_the_build() {
        let dataset = load_embedded().unwrap();
        let broken = ZoneMultipliers {
            upper_normal: 3.0,
            ..ZONES
        };
        let result = HprReport::build(&dataset, &SyntheticSeries::default(), &broken, 2025.7);
        assert!(result.is_err());
    }
}
