use chrono::{Datelike, NaiveDate, Utc};

pub struct TimeUtils;

impl TimeUtils {
    pub const MONTHS_IN_YEAR: f64 = 12.0;
    /// Absorbs rounding in `year + month / 12` so month starts don't floor into the previous month
    const MONTH_EPSILON: f64 = 1e-9;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";

    /// Calendar date as a fractional year, e.g. 1 July 2025 -> ~2025.496
    pub fn year_fraction(date: NaiveDate) -> f64 {
        let days_in_year = if date.leap_year() { 366.0 } else { 365.0 };
        f64::from(date.year()) + f64::from(date.ordinal0()) / days_in_year
    }

    /// Today (UTC) as a fractional year
    pub fn current_year_fraction() -> f64 {
        Self::year_fraction(Utc::now().date_naive())
    }

    /// Short `YYYY-MM` label for a fractional year (month taken from the fractional part)
    pub fn year_fraction_to_month_label(year_fraction: f64) -> String {
        let shifted = year_fraction + Self::MONTH_EPSILON;
        let year = shifted.floor();
        let month = ((shifted - year) * Self::MONTHS_IN_YEAR).floor() as i64 + 1;
        format!("{}-{:02}", year as i64, month.clamp(1, 12))
    }
}

pub fn today_utc() -> String {
    // Used for display purposes
    Utc::now()
        .date_naive()
        .format(TimeUtils::STANDARD_TIME_FORMAT)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MonthlyAverages;

    #[test]
    fn year_fraction_of_known_dates() {
        let new_year = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(TimeUtils::year_fraction(new_year), 2025.0);

        // 2024 is a leap year: 1 July is day 182 (0-based)
        let mid = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        assert!((TimeUtils::year_fraction(mid) - (2024.0 + 182.0 / 366.0)).abs() < 1e-12);
    }

    #[test]
    fn month_labels() {
        assert_eq!(TimeUtils::year_fraction_to_month_label(2013.0), "2013-01");
        assert_eq!(TimeUtils::year_fraction_to_month_label(2013.0 + 11.75 / 12.0), "2013-12");
        assert_eq!(TimeUtils::year_fraction_to_month_label(2025.7), "2025-09");
    }

    #[test]
    fn month_labels_for_every_month_start_and_week() {
        for year in 2012..=2025 {
            let months = MonthlyAverages {
                year,
                prices: vec![1.0; 12],
            };
            for month_idx in 0..12 {
                let expected = format!("{}-{:02}", year, month_idx + 1);
                let start = months.month_start(month_idx);
                assert_eq!(TimeUtils::year_fraction_to_month_label(start), expected);

                // Weekly points inside the month keep the same label
                for week in 1..4 {
                    let weekly = f64::from(year) + (month_idx as f64 + week as f64 / 4.0) / 12.0;
                    assert_eq!(TimeUtils::year_fraction_to_month_label(weekly), expected);
                }
            }
        }
    }
}
