//! Support/resistance band multipliers (relative to the HPR trend)

use crate::analysis::zones::ZoneMultipliers;

// Adjust these to customise the bands. Keep the ordering:
// extreme_support < strong_support < lower_normal <= 1 <= upper_normal < strong_resistance < extreme_resistance
pub const ZONES: ZoneMultipliers = ZoneMultipliers {
    extreme_resistance: 4.2, // Bubble territory
    strong_resistance: 2.5,  // Bull market peaks
    upper_normal: 1.8,
    lower_normal: 0.7,
    strong_support: 0.5,    // Bear market lows
    extreme_support: 0.35, // Capitulation territory
};
