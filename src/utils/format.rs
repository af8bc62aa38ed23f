//! Formatting utilities for currency, percentage, and number display values.

/// Format a dollar amount for display (e.g., "$1,234", "-$500").
///
/// Rounds to whole dollars; zero and non-finite values display as "$0".
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() || amount == 0.0 {
        return "$0".to_string();
    }

    let rounded = amount.round();
    if rounded < 0.0 {
        format!("-${}", group_thousands(-rounded))
    } else {
        format!("${}", group_thousands(rounded))
    }
}

/// Format a percentage for display with one decimal (e.g., "12.5%").
///
/// Zero and non-finite values display as "0%".
pub fn format_percentage(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return "0%".to_string();
    }
    format!("{:.1}%", value)
}

/// Format a number with thousands separators (e.g., "1,234,567").
///
/// Zero and non-finite values display as "0". Used for currency inputs on
/// blur, so the fractional part is dropped.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return "0".to_string();
    }
    if value < 0.0 {
        format!("-{}", group_thousands(-value))
    } else {
        group_thousands(value)
    }
}

/// Group the integer part of a non-negative value into thousands.
fn group_thousands(value: f64) -> String {
    let digits = format!("{}", value.round() as i64);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(f64::NAN), "$0");
        assert_eq!(format_currency(950.0), "$950");
        assert_eq!(format_currency(1234.0), "$1,234");
        assert_eq!(format_currency(1_500_000.0), "$1,500,000");
        assert_eq!(format_currency(3749.6), "$3,750");
        assert_eq!(format_currency(-500.0), "-$500");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.0), "0%");
        assert_eq!(format_percentage(75.0), "75.0%");
        assert_eq!(format_percentage(3.55), "3.5%");
        assert_eq!(format_percentage(f64::INFINITY), "0%");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(500.0), "500");
        assert_eq!(format_number(500000.0), "500,000");
        assert_eq!(format_number(-12345.0), "-12,345");
    }
}
