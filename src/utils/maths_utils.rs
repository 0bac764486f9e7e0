/// Linear-interpolated percentile of an already sorted slice.
/// `percentile` is a fraction in `[0, 1]` (clamped); an empty slice yields 0.
pub fn percentile(sorted: &[f64], percentile: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }

    if sorted.len() == 1 {
        return sorted[0];
    }

    let clamped = percentile.clamp(0.0, 1.0);
    let max_index = (sorted.len() - 1) as f64;
    let position = clamped * max_index;
    let lower_index = position.floor() as usize;
    let upper_index = position.ceil() as usize;

    if lower_index == upper_index {
        sorted[lower_index]
    } else {
        let lower_value = sorted[lower_index];
        let upper_value = sorted[upper_index];
        let weight = position - lower_index as f64;
        lower_value + (upper_value - lower_value) * weight
    }
}

/// `part / whole` as a percentage; 0 when `whole` is 0
pub fn pct(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
