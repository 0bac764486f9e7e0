use crate::analysis::zones::{ZoneMultipliers, trend_ratio};
use crate::domain::{HalvingPoint, ZoneTier};
use crate::models::{RegressionError, RegressionModel};

/// Where an observed halving price landed relative to the fitted trend
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalvingCheck {
    pub year: i32,
    pub actual_price: f64,
    pub trend_price: f64,
    pub ratio: f64,
    pub tier: ZoneTier,
}

impl HalvingCheck {
    /// log10(actual) - log10(trend); the regression residual for this point
    pub fn log_residual(&self) -> f64 {
        self.ratio.log10()
    }
}

pub fn validate_halvings(
    model: &RegressionModel,
    multipliers: &ZoneMultipliers,
    halvings: &[HalvingPoint],
) -> Result<Vec<HalvingCheck>, RegressionError> {
    halvings
        .iter()
        .map(|point| {
            let trend_price = model.project(f64::from(point.year))?;
            let ratio = trend_ratio(point.price, trend_price);
            Ok(HalvingCheck {
                year: point.year,
                actual_price: point.price,
                trend_price,
                ratio,
                tier: multipliers.classify(ratio),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ZONES;
    use crate::data::load_embedded;

    #[test]
    fn historical_halvings_sit_in_the_normal_range() {
        let dataset = load_embedded().unwrap();
        let model = RegressionModel::fit(2008, &dataset.halvings).unwrap();
        let checks = validate_halvings(&model, &ZONES, &dataset.halvings).unwrap();

        assert_eq!(checks.len(), 4);
        let expected_ratios = [1.1119, 0.8378, 0.9185, 1.1686];
        for (check, expected) in checks.iter().zip(expected_ratios) {
            assert!((check.ratio - expected).abs() < 1e-3, "{check:?}");
            assert_eq!(check.tier, ZoneTier::NormalRange);
        }

        let residuals = model.residuals(&dataset.halvings).unwrap();
        for (check, residual) in checks.iter().zip(residuals) {
            assert!((check.log_residual() - residual).abs() < 1e-9);
        }
    }
}
