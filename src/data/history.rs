use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{DATASET_VERSION, EMBEDDED_DATASET, GENESIS_YEAR};
use crate::domain::{HalvingPoint, MonthlyAverages};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to parse dataset JSON")]
    Parse(#[from] serde_json::Error),
    #[error("dataset version {found} does not match expected {expected}")]
    VersionMismatch { found: f64, expected: f64 },
    #[error("dataset has no historical halvings")]
    NoHalvings,
    #[error("halving year {year} is not after genesis year {genesis_year}")]
    HalvingBeforeGenesis { year: i32, genesis_year: i32 },
    #[error("halving years must be strictly increasing ({previous} then {year})")]
    HalvingsOutOfOrder { previous: i32, year: i32 },
    #[error("future halving year {year} must be after the last observed halving {last} and any earlier future year")]
    FutureHalvingNotAfterHistory { year: i32, last: i32 },
    #[error("non-positive price {price} in {context}")]
    NonPositivePrice { price: f64, context: String },
    #[error("monthly average years must be strictly increasing ({previous} then {year})")]
    MonthlyAveragesOutOfOrder { previous: i32, year: i32 },
    #[error("{year} lists {months} monthly averages (max 12)")]
    TooManyMonths { year: i32, months: usize },
}

/// Versioned historical dataset: halving prices plus hand-entered monthly averages.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HistoryDataset {
    pub version: f64,
    pub halvings: Vec<HalvingPoint>,
    pub future_halving_years: Vec<i32>,
    pub monthly_averages: Vec<MonthlyAverages>,
}

impl HistoryDataset {
    /// Parse and validate a dataset table
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let dataset: HistoryDataset = serde_json::from_str(json)?;
        dataset.validate()?;
        Ok(dataset)
    }

    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.version != DATASET_VERSION {
            return Err(DatasetError::VersionMismatch {
                found: self.version,
                expected: DATASET_VERSION,
            });
        }

        let mut previous: Option<i32> = None;
        for point in &self.halvings {
            if point.year <= GENESIS_YEAR {
                return Err(DatasetError::HalvingBeforeGenesis {
                    year: point.year,
                    genesis_year: GENESIS_YEAR,
                });
            }
            if let Some(previous) = previous {
                if point.year <= previous {
                    return Err(DatasetError::HalvingsOutOfOrder {
                        previous,
                        year: point.year,
                    });
                }
            }
            check_price(point.price, || format!("halving {}", point.year))?;
            previous = Some(point.year);
        }

        let last = previous.ok_or(DatasetError::NoHalvings)?;
        let mut previous_future = last;
        for &year in &self.future_halving_years {
            if year <= previous_future {
                return Err(DatasetError::FutureHalvingNotAfterHistory { year, last });
            }
            previous_future = year;
        }

        let mut previous_month_year: Option<i32> = None;
        for year_data in &self.monthly_averages {
            if let Some(previous) = previous_month_year {
                if year_data.year <= previous {
                    return Err(DatasetError::MonthlyAveragesOutOfOrder {
                        previous,
                        year: year_data.year,
                    });
                }
            }
            previous_month_year = Some(year_data.year);
            if year_data.prices.len() > 12 {
                return Err(DatasetError::TooManyMonths {
                    year: year_data.year,
                    months: year_data.prices.len(),
                });
            }
            for (month_idx, &price) in year_data.prices.iter().enumerate() {
                check_price(price, || {
                    format!("monthly average {}-{:02}", year_data.year, month_idx + 1)
                })?;
            }
        }

        Ok(())
    }

    /// Year of the most recent observed halving
    pub fn last_halving_year(&self) -> Option<i32> {
        self.halvings.last().map(|p| p.year)
    }

    /// Most recent monthly average as (year fraction, price)
    pub fn latest_monthly(&self) -> Option<(f64, f64)> {
        self.monthly_averages.iter().rev().find_map(|m| m.latest())
    }
}

fn check_price(price: f64, context: impl FnOnce() -> String) -> Result<(), DatasetError> {
    if price > 0.0 && price.is_finite() {
        Ok(())
    } else {
        Err(DatasetError::NonPositivePrice {
            price,
            context: context(),
        })
    }
}

/// The dataset compiled into the crate
pub fn load_embedded() -> Result<HistoryDataset, DatasetError> {
    let dataset = HistoryDataset::from_json(EMBEDDED_DATASET)?;
    log::info!(
        "Loaded dataset v{}: {} halvings, {} years of monthly averages",
        dataset.version,
        dataset.halvings.len(),
        dataset.monthly_averages.len()
    );
    Ok(dataset)
}
