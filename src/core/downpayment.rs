//! Down-payment savings calculation and validation.
//!
//! All calculation functions are total: undefined-denominator cases return
//! zero rather than signaling an error.

use crate::config::limits;
use crate::core::input::{is_blank, parse_amount, parse_months};
use crate::models::{DownPaymentForm, DownPaymentMode, DownPaymentResults};

/// Down payment in dollars for the given mode.
pub fn down_payment_amount(mode: DownPaymentMode, price: f64, field_value: f64) -> f64 {
    match mode {
        DownPaymentMode::Dollar => field_value,
        DownPaymentMode::Percentage => price * field_value / 100.0,
    }
}

/// Down payment as a percentage of price; 0 when price is not positive.
pub fn down_payment_pct(price: f64, amount: f64) -> f64 {
    if price <= 0.0 {
        return 0.0;
    }
    amount / price * 100.0
}

/// Closing costs in dollars.
pub fn closing_costs(price: f64, closing_pct: f64) -> f64 {
    price * closing_pct / 100.0
}

/// Remaining amount to save; may be negative when savings exceed the goal.
pub fn total_needed(down_payment: f64, closing: f64, existing_savings: f64) -> f64 {
    down_payment + closing - existing_savings
}

/// Required monthly savings; 0 when the timeline is not positive.
pub fn monthly_target(total: f64, timeline_months: u32) -> f64 {
    if timeline_months == 0 {
        return 0.0;
    }
    total / timeline_months as f64
}

/// Monthly target as a percentage of income; 0 when income is not positive.
pub fn savings_rate(monthly: f64, monthly_income: f64) -> f64 {
    if monthly_income <= 0.0 {
        return 0.0;
    }
    monthly / monthly_income * 100.0
}

/// Existing savings as a share of the full goal, clamped to 0-100.
pub fn progress_pct(existing_savings: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        return 0.0;
    }
    (existing_savings / goal * 100.0).clamp(0.0, 100.0)
}

/// Compute the full savings plan from the raw form.
pub fn compute(form: &DownPaymentForm) -> DownPaymentResults {
    let price = parse_amount(&form.property_price);
    let field_value = parse_amount(&form.down_payment);
    let existing = parse_amount(&form.existing_savings);
    let timeline = parse_months(&form.timeline);
    let income = parse_amount(&form.monthly_income);

    let down_payment = down_payment_amount(form.down_payment_mode, price, field_value);
    let pct = match form.down_payment_mode {
        DownPaymentMode::Percentage => field_value,
        DownPaymentMode::Dollar => down_payment_pct(price, down_payment),
    };
    let closing = closing_costs(price, parse_amount(&form.closing_costs));
    let total = total_needed(down_payment, closing, existing);
    let monthly = monthly_target(total, timeline);

    DownPaymentResults {
        down_payment,
        down_payment_pct: pct,
        closing_costs: closing,
        total_needed: total,
        monthly_target: monthly,
        savings_rate: savings_rate(monthly, income),
        progress_pct: progress_pct(existing, total + existing),
    }
}

/// Validate the form, returning human-readable messages.
///
/// An empty vector means the calculation may proceed. Validation is
/// advisory and never alters stored values.
pub fn validate(form: &DownPaymentForm) -> Vec<String> {
    let mut errors = Vec::new();

    let price = parse_amount(&form.property_price);
    if is_blank(&form.property_price) {
        errors.push("Property price is required".to_string());
    } else if price <= 0.0 {
        errors.push("Property price must be greater than $0".to_string());
    } else if price > limits::MAX_PROPERTY_PRICE {
        errors.push("Property price seems unusually high. Please verify the amount.".to_string());
    }

    let field_value = parse_amount(&form.down_payment);
    match form.down_payment_mode {
        DownPaymentMode::Percentage => {
            if field_value <= 0.0 || field_value > 100.0 {
                errors.push("Down payment percentage must be between 0% and 100%".to_string());
            } else if field_value < limits::MIN_DOWN_PAYMENT_PCT {
                errors.push("Down payment must be at least 3.5% of property price".to_string());
            }
        }
        DownPaymentMode::Dollar => {
            if field_value <= 0.0 {
                errors.push("Down payment amount must be greater than $0".to_string());
            } else if price > 0.0 && field_value > price {
                errors.push("Down payment cannot exceed property price".to_string());
            } else if price > 0.0
                && down_payment_pct(price, field_value) < limits::MIN_DOWN_PAYMENT_PCT
            {
                errors.push("Down payment must be at least 3.5% of property price".to_string());
            }
        }
    }

    let closing_pct = parse_amount(&form.closing_costs);
    if closing_pct < 0.0 || closing_pct > limits::MAX_CLOSING_COST_PCT {
        errors.push("Closing costs should typically be between 0% and 10%".to_string());
    }

    let timeline = parse_months(&form.timeline);
    if is_blank(&form.timeline) {
        errors.push("Timeline is required".to_string());
    } else if timeline < limits::MIN_TIMELINE_MONTHS {
        errors.push("Timeline must be at least 1 month".to_string());
    } else if timeline > limits::MAX_TIMELINE_MONTHS {
        errors
            .push("Timeline seems unusually long. Please verify the number of months.".to_string());
    }

    let income = parse_amount(&form.monthly_income);
    if income > 0.0 && income < limits::MIN_PLAUSIBLE_INCOME {
        errors.push("Monthly income seems unusually low. Please verify the amount.".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> DownPaymentForm {
        DownPaymentForm {
            property_price: "500000".to_string(),
            down_payment: "20".to_string(),
            down_payment_mode: DownPaymentMode::Percentage,
            closing_costs: "3.5".to_string(),
            existing_savings: "25000".to_string(),
            timeline: "24".to_string(),
            monthly_income: "8000".to_string(),
            results: None,
        }
    }

    #[test]
    fn test_percentage_mode_down_payment() {
        assert_eq!(
            down_payment_amount(DownPaymentMode::Percentage, 500_000.0, 20.0),
            100_000.0
        );
    }

    #[test]
    fn test_dollar_mode_down_payment() {
        assert_eq!(
            down_payment_amount(DownPaymentMode::Dollar, 500_000.0, 80_000.0),
            80_000.0
        );
        assert_eq!(down_payment_pct(500_000.0, 100_000.0), 20.0);
        assert_eq!(down_payment_pct(0.0, 100_000.0), 0.0);
    }

    #[test]
    fn test_closing_costs() {
        assert_eq!(closing_costs(500_000.0, 3.5), 17_500.0);
    }

    #[test]
    fn test_total_needed_and_monthly_target() {
        let total = total_needed(100_000.0, 15_000.0, 25_000.0);
        assert_eq!(total, 90_000.0);
        assert_eq!(monthly_target(total, 24), 3_750.0);
        assert_eq!(savings_rate(3_750.0, 5_000.0), 75.0);
    }

    #[test]
    fn test_zero_timeline_yields_zero_target() {
        assert_eq!(monthly_target(90_000.0, 0), 0.0);
    }

    #[test]
    fn test_zero_income_yields_zero_rate() {
        assert_eq!(savings_rate(3_750.0, 0.0), 0.0);
        assert_eq!(savings_rate(3_750.0, -100.0), 0.0);
    }

    #[test]
    fn test_total_needed_may_go_negative() {
        assert_eq!(total_needed(20_000.0, 1_000.0, 30_000.0), -9_000.0);
    }

    #[test]
    fn test_progress_clamped() {
        assert_eq!(progress_pct(25_000.0, 125_000.0), 20.0);
        assert_eq!(progress_pct(200_000.0, 125_000.0), 100.0);
        assert_eq!(progress_pct(25_000.0, 0.0), 0.0);
    }

    #[test]
    fn test_compute_full_plan() {
        let results = compute(&filled_form());
        assert_eq!(results.down_payment, 100_000.0);
        assert_eq!(results.down_payment_pct, 20.0);
        assert_eq!(results.closing_costs, 17_500.0);
        assert_eq!(results.total_needed, 92_500.0);
        assert_eq!(results.monthly_target, 92_500.0 / 24.0);
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(validate(&filled_form()).is_empty());
    }

    #[test]
    fn test_empty_form_requires_price() {
        let errors = validate(&DownPaymentForm::default());
        assert!(errors.contains(&"Property price is required".to_string()));
    }

    #[test]
    fn test_percentage_below_minimum() {
        let mut form = filled_form();
        form.down_payment = "2".to_string();
        let errors = validate(&form);
        assert!(errors.contains(&"Down payment must be at least 3.5% of property price".to_string()));
    }

    #[test]
    fn test_dollar_mode_cannot_exceed_price() {
        let mut form = filled_form();
        form.down_payment_mode = DownPaymentMode::Dollar;
        form.down_payment = "600000".to_string();
        let errors = validate(&form);
        assert!(errors.contains(&"Down payment cannot exceed property price".to_string()));
    }

    #[test]
    fn test_timeline_bounds() {
        let mut form = filled_form();
        form.timeline = "0".to_string();
        assert!(validate(&form).contains(&"Timeline must be at least 1 month".to_string()));

        form.timeline = "601".to_string();
        assert!(
            validate(&form).iter().any(|e| e.contains("unusually long")),
            "timeline above 600 months should warn"
        );
    }

    #[test]
    fn test_implausibly_low_income() {
        let mut form = filled_form();
        form.monthly_income = "500".to_string();
        assert!(validate(&form).iter().any(|e| e.contains("unusually low")));

        // Empty income is allowed; the field is optional.
        form.monthly_income = String::new();
        assert!(validate(&form).is_empty());
    }

    #[test]
    fn test_closing_costs_range() {
        let mut form = filled_form();
        form.closing_costs = "12".to_string();
        assert!(
            validate(&form)
                .contains(&"Closing costs should typically be between 0% and 10%".to_string())
        );
    }

    #[test]
    fn test_price_sanity_cap() {
        let mut form = filled_form();
        form.property_price = "20000000".to_string();
        assert!(validate(&form).iter().any(|e| e.contains("unusually high")));
    }
}
