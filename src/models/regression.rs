use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;
use thiserror::Error;

use crate::config::PRINT_FIT_POINTS;
use crate::domain::HalvingPoint;

/// Reasons the HPR fit or a projection can't be evaluated
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegressionError {
    #[error("year {year} is not after genesis year {genesis_year}")]
    YearNotAfterGenesis { year: f64, genesis_year: i32 },
    #[error("price {price} at year {year} is not a positive finite number")]
    NonPositivePrice { year: i32, price: f64 },
    #[error("need at least 2 halving points to fit a trend, got {0}")]
    TooFewPoints(usize),
    #[error("all halving points share the same year, slope is undefined")]
    DegenerateInput,
}

/// Halving Price Regression: `log10(price) = slope * ln(year - genesis_year) + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionModel {
    pub genesis_year: i32,
    pub slope: f64,
    pub intercept: f64,
}

impl RegressionModel {
    pub fn new(genesis_year: i32, slope: f64, intercept: f64) -> Self {
        Self {
            genesis_year,
            slope,
            intercept,
        }
    }

    /// Ordinary least squares on (ln(year - genesis), log10(price)).
    pub fn fit(genesis_year: i32, points: &[HalvingPoint]) -> Result<Self, RegressionError> {
        if points.len() < 2 {
            return Err(RegressionError::TooFewPoints(points.len()));
        }

        let (xs, ys) = log_coordinates(genesis_year, points)?;

        let x_mean = xs.iter().mean();
        let y_mean = ys.iter().mean();

        let (sxx, sxy) = xs
            .iter()
            .zip(ys.iter())
            .fold((0.0, 0.0), |(sxx, sxy), (&x, &y)| {
                let dx = x - x_mean;
                (sxx + dx * dx, sxy + dx * (y - y_mean))
            });

        if sxx <= f64::EPSILON {
            return Err(RegressionError::DegenerateInput);
        }

        let slope = sxy / sxx;
        let intercept = y_mean - slope * x_mean;
        let model = Self::new(genesis_year, slope, intercept);

        if PRINT_FIT_POINTS {
            for (point, (x, y)) in points.iter().zip(xs.iter().zip(ys.iter())) {
                log::debug!(
                    "fit point {}: ln(x)={:.4} log10(p)={:.4} residual={:+.4}",
                    point.year,
                    x,
                    y,
                    y - (slope * x + intercept)
                );
            }
        }
        log::info!(
            "HPR fit over {} points: slope={:.4} intercept={:.4}",
            points.len(),
            slope,
            intercept
        );

        Ok(model)
    }

    /// Natural log of years elapsed since genesis; fractional years are fine.
    fn log_elapsed(&self, year: f64) -> Result<f64, RegressionError> {
        let elapsed = year - f64::from(self.genesis_year);
        if elapsed <= 0.0 || !elapsed.is_finite() {
            return Err(RegressionError::YearNotAfterGenesis {
                year,
                genesis_year: self.genesis_year,
            });
        }
        Ok(elapsed.ln())
    }

    /// Trend value in log10-price space
    pub fn log_price_at(&self, year: f64) -> Result<f64, RegressionError> {
        Ok(self.slope * self.log_elapsed(year)? + self.intercept)
    }

    /// Trend price at `year`
    pub fn project(&self, year: f64) -> Result<f64, RegressionError> {
        Ok(10f64.powf(self.log_price_at(year)?))
    }

    /// Projected halving points for each of `years`, in the given order
    pub fn project_halvings(&self, years: &[i32]) -> Result<Vec<HalvingPoint>, RegressionError> {
        years
            .iter()
            .map(|&year| Ok(HalvingPoint::new(year, self.project(f64::from(year))?)))
            .collect()
    }

    /// Observed minus fitted, in log10-price space
    pub fn residuals(&self, points: &[HalvingPoint]) -> Result<Vec<f64>, RegressionError> {
        let (xs, ys) = log_coordinates(self.genesis_year, points)?;
        Ok(xs
            .iter()
            .zip(ys.iter())
            .map(|(x, y)| y - (self.slope * x + self.intercept))
            .collect())
    }

    /// Squared Pearson correlation between observed and fitted log10 prices
    pub fn r_squared(&self, points: &[HalvingPoint]) -> Result<f64, RegressionError> {
        let (xs, ys) = log_coordinates(self.genesis_year, points)?;
        let fitted: Vec<f64> = xs
            .iter()
            .map(|x| self.slope * x + self.intercept)
            .collect();

        let denom = ys.iter().std_dev() * fitted.iter().std_dev();
        if denom.is_nan() || denom <= 0.0 {
            // Flat fit or flat data: nothing to correlate
            return Ok(0.0);
        }
        let r = ys.iter().covariance(fitted.iter()) / denom;
        Ok(r * r)
    }
}

/// Validates and transforms halving points into (ln(year - genesis), log10(price)) pairs
fn log_coordinates(
    genesis_year: i32,
    points: &[HalvingPoint],
) -> Result<(Vec<f64>, Vec<f64>), RegressionError> {
    let mut xs = Vec::with_capacity(points.len());
    let mut ys = Vec::with_capacity(points.len());

    for point in points {
        if point.year <= genesis_year {
            return Err(RegressionError::YearNotAfterGenesis {
                year: f64::from(point.year),
                genesis_year,
            });
        }
        if point.price.is_nan() || point.price <= 0.0 || point.price.is_infinite() {
            return Err(RegressionError::NonPositivePrice {
                year: point.year,
                price: point.price,
            });
        }
        xs.push(point.years_since(genesis_year).ln());
        ys.push(point.price.log10());
    }

    Ok((xs, ys))
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn halvings() -> Vec<HalvingPoint> {
        vec![
            HalvingPoint::new(2012, 12.33),
            HalvingPoint::new(2016, 651.94),
            HalvingPoint::new(2020, 8591.65),
            HalvingPoint::new(2024, 63807.0),
        ]
    }

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn fit_recovers_known_coefficients() {
        let truth = RegressionModel::new(2008, 2.5, -2.0);
        let points: Vec<HalvingPoint> = [2012, 2016, 2020, 2024]
            .iter()
            .map(|&year| HalvingPoint::new(year, truth.project(f64::from(year)).unwrap()))
            .collect();

        let fitted = RegressionModel::fit(2008, &points).unwrap();
        assert!(approx_eq(fitted.slope, 2.5, 1e-9));
        assert!(approx_eq(fitted.intercept, -2.0, 1e-9));
        assert!(fitted.residuals(&points).unwrap().iter().all(|r| r.abs() < 1e-9));
        assert!(approx_eq(fitted.r_squared(&points).unwrap(), 1.0, 1e-9));
    }

    #[test]
    fn fit_on_historical_halvings() {
        let model = RegressionModel::fit(2008, &halvings()).unwrap();
        assert!(approx_eq(model.slope, 2.6634, 1e-3));
        assert!(approx_eq(model.intercept, -2.6474, 1e-3));

        let r2 = model.r_squared(&halvings()).unwrap();
        assert!(r2 > 0.99 && r2 <= 1.0);
    }

    #[test]
    fn projection_stays_close_to_history() {
        let points = halvings();
        let model = RegressionModel::fit(2008, &points).unwrap();
        let residuals = model.residuals(&points).unwrap();

        for (point, residual) in points.iter().zip(residuals) {
            let projected = model.project(f64::from(point.year)).unwrap();
            // Projection differs from history by exactly the least-squares residual
            assert!(approx_eq(
                point.price.log10() - projected.log10(),
                residual,
                1e-12
            ));
            // Historical halvings sit within ~±0.1 log10 of the trend
            assert!(residual.abs() < 0.1);
        }

        // OLS residuals sum to zero
        let sum: f64 = model.residuals(&points).unwrap().iter().sum();
        assert!(approx_eq(sum, 0.0, 1e-9));
    }

    #[test]
    fn projected_halvings_match_expected_magnitudes() {
        let model = RegressionModel::fit(2008, &halvings()).unwrap();
        let future = model.project_halvings(&[2028, 2032, 2036]).unwrap();

        assert_eq!(future.len(), 3);
        assert!(approx_eq(future[0].price / 214_553.0, 1.0, 1e-3));
        assert!(approx_eq(future[1].price / 656_355.0, 1.0, 1e-3));
        assert!(approx_eq(future[2].price / 1_689_314.0, 1.0, 1e-3));
    }

    #[test]
    fn projection_is_monotonic_for_positive_slope() {
        let model = RegressionModel::new(2008, 2.66, -2.65);
        let prices: Vec<f64> = (1..=400)
            .map(|i| model.project(2008.0 + i as f64 * 0.1).unwrap())
            .collect();
        assert!(prices.iter().tuple_windows().all(|(a, b)| b > a));
    }

    #[test]
    fn rejects_years_at_or_before_genesis() {
        let model = RegressionModel::new(2008, 2.66, -2.65);
        assert!(matches!(
            model.project(2008.0),
            Err(RegressionError::YearNotAfterGenesis { .. })
        ));

        let mut points = halvings();
        points[0].year = 2007;
        assert!(matches!(
            RegressionModel::fit(2008, &points),
            Err(RegressionError::YearNotAfterGenesis { .. })
        ));
    }

    #[test]
    fn rejects_bad_prices_and_degenerate_input() {
        let mut points = halvings();
        points[2].price = 0.0;
        assert_eq!(
            RegressionModel::fit(2008, &points),
            Err(RegressionError::NonPositivePrice {
                year: 2020,
                price: 0.0
            })
        );

        assert_eq!(
            RegressionModel::fit(2008, &halvings()[..1]),
            Err(RegressionError::TooFewPoints(1))
        );

        let same_year = vec![HalvingPoint::new(2012, 10.0), HalvingPoint::new(2012, 20.0)];
        assert_eq!(
            RegressionModel::fit(2008, &same_year),
            Err(RegressionError::DegenerateInput)
        );
    }

    #[test]
    fn non_finite_prices_are_rejected() {
        for bad in [f64::NAN, f64::INFINITY, -5.0] {
            let mut points = halvings();
            points[1].price = bad;
            assert!(matches!(
                RegressionModel::fit(2008, &points),
                Err(RegressionError::NonPositivePrice { year: 2016, .. })
            ));
        }
    }

    #[test]
    fn flat_fit_has_zero_r_squared() {
        let flat = RegressionModel::new(2008, 0.0, 2.0);
        assert_eq!(flat.r_squared(&halvings()).unwrap(), 0.0);
    }
}
