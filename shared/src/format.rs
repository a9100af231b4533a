use chrono::NaiveDate;

/// Format a monetary amount with exactly two decimal places.
///
/// Exact half-cent amounts round away from zero, and a zero total never
/// renders as `-0.00`.
pub fn format_cost(amount: f64) -> String {
    let cents = amount * 100.0;
    // Only multiples of 1/8 can sit exactly on a half cent
    let rounded = if (amount * 8.0).fract() == 0.0 && cents.fract().abs() == 0.5 {
        cents.round() / 100.0
    } else {
        amount
    };
    format!("{:.2}", rounded + 0.0)
}

/// Format a calendar date as `YYYY-MM-DD` with zero-padded month and day
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today's date in the local time zone
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_zero_pads() {
        let march = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(march), "2024-03-05");

        let new_year_eve = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(format_date(new_year_eve), "2024-12-31");
    }

    #[test]
    fn test_format_cost_two_decimals() {
        assert_eq!(format_cost(5.0), "5.00");
        assert_eq!(format_cost(12.5), "12.50");
        assert_eq!(format_cost(0.125 + 0.001), "0.13");
        assert_eq!(format_cost(812.5), "812.50");
    }

    #[test]
    fn test_format_cost_half_cents_round_up() {
        assert_eq!(format_cost(0.125), "0.13");
        assert_eq!(format_cost(0.625), "0.63");
        assert_eq!(format_cost(0.375), "0.38");
        assert_eq!(format_cost(-0.125), "-0.13");
        // Not an exact tie in binary
        assert_eq!(format_cost(1.005), "1.00");
        assert_eq!(format_cost(2.675), "2.67");
    }

    #[test]
    fn test_format_cost_zero_has_no_sign() {
        assert_eq!(format_cost(0.0), "0.00");
        assert_eq!(format_cost(-0.0), "0.00");
    }
}
