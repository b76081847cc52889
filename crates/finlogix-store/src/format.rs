use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate};
use numfmt::{Formatter, Precision};

/// Fixed currency symbol used everywhere an amount is displayed.
pub const CURRENCY_SYMBOL: &str = "₦";

/// Long display form of a calendar date: month name, day without leading
/// zero, year, hyphen-joined (`January-5-2025`). Shared by the list view
/// and both export formats.
pub fn long_date(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.format("%B"), date.day(), date.year())
}

/// Renders an amount with the naira symbol, thousands separators, and
/// exactly two decimal places.
pub fn format_naira(amount: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency(CURRENCY_SYMBOL)
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-₦")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    let mut formatted_string = if amount < 0.0 {
        negative_fmt.fmt_string(amount.abs())
    } else if amount > 0.0 {
        positive_fmt.fmt_string(amount)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        format!("{CURRENCY_SYMBOL}0.00")
    };

    // Past its grouping range numfmt switches to scientific notation;
    // render those amounts by hand so the separator rule still holds.
    if formatted_string.contains('e') {
        return group_decimal(amount);
    }

    // numfmt omits the last trailing zero, so we must add it ourselves.
    // For example, "12.30" is rendered as "12.3" so we append "0".
    if formatted_string.as_bytes()[formatted_string.len() - 2] == b'.' {
        formatted_string.push('0');
    }

    formatted_string
}

fn group_decimal(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (integer, decimals) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (offset, digit) in integer.chars().enumerate() {
        if offset > 0 && (integer.len() - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}{CURRENCY_SYMBOL}{grouped}.{decimals}")
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{format_naira, long_date};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
    }

    #[test]
    fn long_date_uses_month_name_and_no_leading_zero() {
        assert_eq!(long_date(date(2025, 1, 5)), "January-5-2025");
        assert_eq!(long_date(date(2025, 12, 31)), "December-31-2025");
    }

    #[test]
    fn naira_amounts_get_thousands_separators_and_two_decimals() {
        assert_eq!(format_naira(150_000.0), "₦150,000.00");
        assert_eq!(format_naira(45_000.0), "₦45,000.00");
        assert_eq!(format_naira(1_234_567.89), "₦1,234,567.89");
    }

    #[test]
    fn small_amounts_keep_both_decimals() {
        assert_eq!(format_naira(12.3), "₦12.30");
        assert_eq!(format_naira(0.5), "₦0.50");
    }

    #[test]
    fn zero_is_rendered_explicitly() {
        assert_eq!(format_naira(0.0), "₦0.00");
    }

    #[test]
    fn negative_balance_keeps_the_sign_before_the_symbol() {
        assert_eq!(format_naira(-1_500.0), "-₦1,500.00");
    }

    #[test]
    fn amounts_past_the_formatter_range_keep_separators_and_decimals() {
        assert_eq!(
            format_naira(123_456_789_012_345.0),
            "₦123,456,789,012,345.00"
        );
        assert_eq!(
            format_naira(-123_456_789_012_345.0),
            "-₦123,456,789,012,345.00"
        );
    }

    #[test]
    fn huge_amounts_never_render_in_scientific_notation() {
        let rendered = format_naira(1e300);
        assert!(!rendered.contains('e'));
        assert!(rendered.contains(','));
        assert!(rendered.ends_with(".00"));
    }
}
