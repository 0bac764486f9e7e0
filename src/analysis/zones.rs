//! Support/resistance bands around the HPR trend and ratio classification.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::ZoneTier;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ZoneConfigError {
    #[error("{name} multiplier must be positive and finite, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("multipliers out of order: {lower} ({lower_value}) must be below {upper} ({upper_value})")]
    OutOfOrder {
        lower: &'static str,
        lower_value: f64,
        upper: &'static str,
        upper_value: f64,
    },
}

/// Multiples of the trend price that bound each band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneMultipliers {
    pub extreme_resistance: f64,
    pub strong_resistance: f64,
    pub upper_normal: f64,
    pub lower_normal: f64,
    pub strong_support: f64,
    pub extreme_support: f64,
}

/// Band prices at one trend value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneBands {
    pub extreme_resistance: f64,
    pub strong_resistance: f64,
    pub upper_normal: f64,
    pub lower_normal: f64,
    pub strong_support: f64,
    pub extreme_support: f64,
}

impl ZoneMultipliers {
    /// Named multipliers from lowest to highest
    fn ascending(&self) -> [(&'static str, f64); 6] {
        [
            ("extreme_support", self.extreme_support),
            ("strong_support", self.strong_support),
            ("lower_normal", self.lower_normal),
            ("upper_normal", self.upper_normal),
            ("strong_resistance", self.strong_resistance),
            ("extreme_resistance", self.extreme_resistance),
        ]
    }

    /// Checks positivity and the intended ordering.
    /// `lower_normal == upper_normal` is tolerated; every other neighbour must be strictly ordered.
    pub fn validate(&self) -> Result<(), ZoneConfigError> {
        let named = self.ascending();
        for &(name, value) in &named {
            if value.is_nan() || value <= 0.0 || value.is_infinite() {
                return Err(ZoneConfigError::NonPositive { name, value });
            }
        }

        for pair in named.windows(2) {
            let ((lower, lower_value), (upper, upper_value)) = (pair[0], pair[1]);
            let ordered = if lower == "lower_normal" {
                lower_value <= upper_value
            } else {
                lower_value < upper_value
            };
            if !ordered {
                return Err(ZoneConfigError::OutOfOrder {
                    lower,
                    lower_value,
                    upper,
                    upper_value,
                });
            }
        }
        Ok(())
    }

    /// Band prices for a given trend price
    pub fn bands(&self, trend_price: f64) -> ZoneBands {
        ZoneBands {
            extreme_resistance: zone_price(trend_price, self.extreme_resistance),
            strong_resistance: zone_price(trend_price, self.strong_resistance),
            upper_normal: zone_price(trend_price, self.upper_normal),
            lower_normal: zone_price(trend_price, self.lower_normal),
            strong_support: zone_price(trend_price, self.strong_support),
            extreme_support: zone_price(trend_price, self.extreme_support),
        }
    }

    /// Highest band first; a ratio sitting exactly on a line belongs to the band below it.
    pub fn classify(&self, ratio: f64) -> ZoneTier {
        if ratio > self.strong_resistance {
            ZoneTier::ExtremeResistance
        } else if ratio > self.upper_normal {
            ZoneTier::StrongResistance
        } else if ratio > self.lower_normal {
            ZoneTier::NormalRange
        } else if ratio > self.strong_support {
            ZoneTier::StrongSupport
        } else {
            ZoneTier::ExtremeSupport
        }
    }

    /// Multiplier edges of a tier's band, e.g. `1.8x-2.5x`; top and bottom bands are open-ended.
    pub fn tier_range_label(&self, tier: ZoneTier) -> String {
        match tier {
            ZoneTier::ExtremeResistance => format!(">{}x", self.strong_resistance),
            ZoneTier::StrongResistance => {
                format!("{}x-{}x", self.upper_normal, self.strong_resistance)
            }
            ZoneTier::NormalRange => format!("{}x-{}x", self.lower_normal, self.upper_normal),
            ZoneTier::StrongSupport => format!("{}x-{}x", self.strong_support, self.lower_normal),
            ZoneTier::ExtremeSupport => format!("<={}x", self.strong_support),
        }
    }

    /// Above the outermost resistance line
    pub fn breaches_extreme_resistance(&self, ratio: f64) -> bool {
        ratio > self.extreme_resistance
    }

    /// Below the outermost support line
    pub fn breaches_extreme_support(&self, ratio: f64) -> bool {
        ratio < self.extreme_support
    }
}

impl ZoneBands {
    /// Lowest to highest
    pub fn as_array(&self) -> [f64; 6] {
        [
            self.extreme_support,
            self.strong_support,
            self.lower_normal,
            self.upper_normal,
            self.strong_resistance,
            self.extreme_resistance,
        ]
    }
}

pub fn zone_price(trend_price: f64, multiplier: f64) -> f64 {
    trend_price * multiplier
}

/// How far `actual_price` sits from the trend, as a multiple of it
pub fn trend_ratio(actual_price: f64, trend_price: f64) -> f64 {
    actual_price / trend_price
}
