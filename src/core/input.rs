//! Raw form-field parsing and sanitization rules.
//!
//! Form records hold the raw text the user typed; parsing happens here, on
//! demand, and is total: empty or unparseable fields read as zero.

use crate::config::limits;

/// Parse a currency/amount field.
///
/// Accepts thousands separators and a leading `$`; empty or unparseable
/// input reads as 0.
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    cleaned.parse().unwrap_or(0.0)
}

/// Parse an integer field (e.g. timeline months). Empty reads as 0.
pub fn parse_months(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

/// True when the field contains no user input.
pub fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

/// Sanitize a currency field while typing: digits only, capped length.
pub fn sanitize_currency(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(limits::MAX_CURRENCY_DIGITS)
        .collect()
}

/// Sanitize a percentage field while typing: digits and one decimal point.
pub fn sanitize_percentage(raw: &str) -> String {
    let mut seen_dot = false;
    raw.chars()
        .filter(|c| {
            if c.is_ascii_digit() {
                true
            } else if *c == '.' && !seen_dot {
                seen_dot = true;
                true
            } else {
                false
            }
        })
        .collect()
}

/// Sanitize an integer field while typing: digits only.
pub fn sanitize_integer(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

// ============================================================================
// Field-level checks
// ============================================================================

/// Input kinds with independent advisory range checks.
///
/// These drive the per-field error/valid styling; the blocking validation
/// lives with each calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Whole-dollar amount, must be positive.
    Currency,
    /// Percentage in the range 0-100.
    Percentage,
    /// Positive whole number (months).
    Integer,
}

/// Check a single field against its kind's range, returning `false` for
/// out-of-range or empty input. Never alters the stored value.
pub fn field_is_valid(kind: FieldKind, raw: &str) -> bool {
    if is_blank(raw) {
        return false;
    }

    match kind {
        FieldKind::Currency => parse_amount(raw) > 0.0,
        FieldKind::Percentage => {
            let value = parse_amount(raw);
            (0.0..=100.0).contains(&value)
        }
        FieldKind::Integer => parse_months(raw) >= 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("  "), 0.0);
        assert_eq!(parse_amount("500000"), 500000.0);
        assert_eq!(parse_amount("1,234,567"), 1234567.0);
        assert_eq!(parse_amount("$2,500"), 2500.0);
        assert_eq!(parse_amount("3.5"), 3.5);
        assert_eq!(parse_amount("abc"), 0.0);
    }

    #[test]
    fn test_parse_months() {
        assert_eq!(parse_months(""), 0);
        assert_eq!(parse_months("24"), 24);
        assert_eq!(parse_months(" 600 "), 600);
        assert_eq!(parse_months("2.5"), 0);
    }

    #[test]
    fn test_sanitize_currency() {
        assert_eq!(sanitize_currency("1,234"), "1234");
        assert_eq!(sanitize_currency("$500"), "500");
        assert_eq!(sanitize_currency("12a34"), "1234");
        // Capped at ten digits
        assert_eq!(sanitize_currency("123456789012345"), "1234567890");
    }

    #[test]
    fn test_sanitize_percentage() {
        assert_eq!(sanitize_percentage("3.5"), "3.5");
        assert_eq!(sanitize_percentage("3.5.5"), "3.55");
        assert_eq!(sanitize_percentage("abc12"), "12");
    }

    #[test]
    fn test_field_checks() {
        assert!(field_is_valid(FieldKind::Currency, "500"));
        assert!(!field_is_valid(FieldKind::Currency, ""));
        assert!(!field_is_valid(FieldKind::Currency, "0"));

        assert!(field_is_valid(FieldKind::Percentage, "0"));
        assert!(field_is_valid(FieldKind::Percentage, "100"));
        assert!(!field_is_valid(FieldKind::Percentage, "101"));

        assert!(field_is_valid(FieldKind::Integer, "1"));
        assert!(!field_is_valid(FieldKind::Integer, "0"));
    }
}
