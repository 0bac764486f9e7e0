use serde::{Deserialize, Serialize};

/// A (year, price) observation at a halving.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct HalvingPoint {
    pub year: i32,
    pub price: f64,
}

impl HalvingPoint {
    // A constructor for convenience
    pub fn new(year: i32, price: f64) -> Self {
        HalvingPoint { year, price }
    }

    // Years elapsed since `genesis_year` (the regression's x before taking ln)
    pub fn years_since(&self, genesis_year: i32) -> f64 {
        f64::from(self.year - genesis_year)
    }
}

/// Hand-entered monthly average prices for one calendar year.
/// `prices[0]` is January; a partial year simply has fewer entries.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MonthlyAverages {
    pub year: i32,
    pub prices: Vec<f64>,
}

impl MonthlyAverages {
    /// Fractional year at the start of `month_index` (0-based)
    pub fn month_start(&self, month_index: usize) -> f64 {
        f64::from(self.year) + month_index as f64 / 12.0
    }

    /// Last (year fraction, price) entry, if the year has any months at all
    pub fn latest(&self) -> Option<(f64, f64)> {
        let idx = self.prices.len().checked_sub(1)?;
        Some((self.month_start(idx), self.prices[idx]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn years_since_genesis() {
        let point = HalvingPoint::new(2012, 12.33);
        assert_eq!(point.years_since(2008), 4.0);
    }

    #[test]
    fn latest_month_of_partial_year() {
        let year = MonthlyAverages {
            year: 2025,
            prices: vec![100.0, 200.0, 300.0],
        };
        let (when, price) = year.latest().unwrap();
        assert!((when - (2025.0 + 2.0 / 12.0)).abs() < 1e-12);
        assert_eq!(price, 300.0);

        let empty = MonthlyAverages {
            year: 2026,
            prices: vec![],
        };
        assert!(empty.latest().is_none());
    }
}
