use serde::{Deserialize, Serialize};

use crate::analysis::zones::{ZoneBands, ZoneMultipliers};
use crate::models::regression::{RegressionError, RegressionModel};

/// Trend and band prices at one sampled year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendSample {
    pub year: f64,
    pub trend_price: f64,
    pub bands: ZoneBands,
}

/// Evenly sampled trendline with its bands - everything needed to draw the chart
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrendCurve {
    pub samples: Vec<TrendSample>,
}

/// Annotated trend price at a halving year
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyLevel {
    pub year: i32,
    pub trend_price: f64,
    /// `false` for years after the last observed halving
    pub historical: bool,
}

impl TrendCurve {
    /// `samples` points spaced evenly over `[start_year, end_year]`, both ends included.
    /// A single sample lands on `start_year`; zero samples gives an empty curve.
    pub fn sample(
        model: &RegressionModel,
        multipliers: &ZoneMultipliers,
        start_year: f64,
        end_year: f64,
        samples: usize,
    ) -> Result<Self, RegressionError> {
        let step = if samples > 1 {
            (end_year - start_year) / (samples - 1) as f64
        } else {
            0.0
        };

        let points = (0..samples)
            .map(|i| {
                // Pin the last sample to end_year to avoid accumulated drift
                let year = if samples > 1 && i == samples - 1 {
                    end_year
                } else {
                    start_year + step * i as f64
                };
                let trend_price = model.project(year)?;
                Ok(TrendSample {
                    year,
                    trend_price,
                    bands: multipliers.bands(trend_price),
                })
            })
            .collect::<Result<Vec<_>, RegressionError>>()?;

        Ok(Self { samples: points })
    }

    pub fn first(&self) -> Option<&TrendSample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&TrendSample> {
        self.samples.last()
    }
}

/// Trend price at each of `years`; anything after `last_observed_year` is a projection.
pub fn key_levels(
    model: &RegressionModel,
    years: &[i32],
    last_observed_year: i32,
) -> Result<Vec<KeyLevel>, RegressionError> {
    years
        .iter()
        .map(|&year| {
            Ok(KeyLevel {
                year,
                trend_price: model.project(f64::from(year))?,
                historical: year <= last_observed_year,
            })
        })
        .collect()
}
