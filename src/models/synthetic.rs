use argminmax::ArgMinMax;
use rand::distributions::{Distribution, Uniform};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use thiserror::Error;

use crate::config::PRINT_SYNTHETIC_SUMMARY;
use crate::config::synthetic::SyntheticConfig;
use crate::domain::MonthlyAverages;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SyntheticError {
    #[error("noise bounds [{low}, {high}] must be positive and ordered")]
    InvalidNoiseBounds { low: f64, high: f64 },
    #[error("weeks_per_month must be at least 1")]
    NoWeeks,
}

/// One weekly point of the overlay series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyntheticPoint {
    /// Fractional year, e.g. 2013.25 for the start of April 2013
    pub year: f64,
    pub price: f64,
    /// The monthly average this point was derived from
    pub source_price: f64,
}

/// Quick description of a generated series (for logging and the report)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    pub points: usize,
    pub first_year: f64,
    pub last_year: f64,
    pub peak: SyntheticPoint,
    pub trough: SyntheticPoint,
}

/// Weekly price texture derived from monthly averages.
/// Never fed back into the regression.
#[derive(Debug, Clone, Default)]
pub struct SyntheticSeries {
    pub points: Vec<SyntheticPoint>,
}

impl SyntheticSeries {
    /// Expand each monthly average into `weeks_per_month` points at
    /// `year + (month + week / weeks_per_month) / 12`, each scaled by an independent
    /// uniform draw from `[noise_low, noise_high]`.
    pub fn generate<R: Rng + ?Sized>(
        monthly: &[MonthlyAverages],
        config: &SyntheticConfig,
        rng: &mut R,
    ) -> Result<Self, SyntheticError> {
        let (low, high) = (config.noise_low, config.noise_high);
        if low.is_nan() || low <= 0.0 || high.is_nan() || high < low || high.is_infinite() {
            return Err(SyntheticError::InvalidNoiseBounds { low, high });
        }
        if config.weeks_per_month == 0 {
            return Err(SyntheticError::NoWeeks);
        }

        let noise = Uniform::new_inclusive(low, high);
        let weeks = config.weeks_per_month;
        let total: usize = monthly.iter().map(|m| m.prices.len() * weeks).sum();
        let mut points = Vec::with_capacity(total);

        for year_data in monthly {
            for (month_idx, &month_price) in year_data.prices.iter().enumerate() {
                for week in 0..weeks {
                    let week_fraction = month_idx as f64 + week as f64 / weeks as f64;
                    points.push(SyntheticPoint {
                        year: f64::from(year_data.year) + week_fraction / 12.0,
                        price: month_price * noise.sample(rng),
                        source_price: month_price,
                    });
                }
            }
        }

        let series = Self { points };
        if PRINT_SYNTHETIC_SUMMARY {
            if let Some(summary) = series.summary() {
                log::info!(
                    "Created {} weekly price points from {:.2} to {:.2}",
                    summary.points,
                    summary.first_year,
                    summary.last_year
                );
            }
        }
        Ok(series)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }

    /// `None` for an empty series
    pub fn summary(&self) -> Option<SeriesSummary> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        let (min_idx, max_idx) = self.prices().argminmax();

        Some(SeriesSummary {
            points: self.points.len(),
            first_year: first.year,
            last_year: last.year,
            peak: self.points[max_idx],
            trough: self.points[min_idx],
        })
    }
}

/// RNG for the synthetic series: reproducible when `seed` is set, fresh otherwise.
pub fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_entropy(),
    }
}
