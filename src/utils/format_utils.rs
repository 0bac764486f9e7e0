/// Dollar amount rounded to whole units with thousands separators, e.g. `$1,234,567`.
pub fn format_usd(value: f64) -> String {
    if !value.is_finite() {
        return format!("${value}");
    }

    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_usd(0.4), "$0");
        assert_eq!(format_usd(12.33), "$12");
        assert_eq!(format_usd(999.5), "$1,000");
        assert_eq!(format_usd(63_807.0), "$63,807");
        assert_eq!(format_usd(1_689_314.2), "$1,689,314");
        assert_eq!(format_usd(-2500.0), "-$2,500");
    }
}
