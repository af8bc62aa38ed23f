//! Mortgage affordability via debt-service ratios.
//!
//! Uses the standard Canadian lender rules of thumb: gross debt service
//! (GDS, housing costs over gross income) capped at 32% and total debt
//! service (TDS, housing plus all debt payments) capped at 40%. Outputs are
//! ratios and a monthly budget figure; no amortization math.

use crate::config::debt_service;
use crate::core::input::{is_blank, parse_amount};
use crate::models::{MortgageForm, MortgageResults};

/// Monthly housing costs: property taxes are annual, condo fees count at
/// half per lender convention.
pub fn monthly_housing_costs(
    annual_property_taxes: f64,
    heating: f64,
    condo_fees: f64,
    other: f64,
) -> f64 {
    annual_property_taxes / 12.0 + heating + condo_fees / 2.0 + other
}

/// A debt-service ratio in percent; 0 when income is not positive.
pub fn service_ratio(monthly_obligations: f64, monthly_income: f64) -> f64 {
    if monthly_income <= 0.0 {
        return 0.0;
    }
    monthly_obligations / monthly_income * 100.0
}

/// Monthly housing budget left under the GDS cap; may be negative.
pub fn housing_room(monthly_income: f64, housing_costs: f64) -> f64 {
    monthly_income * debt_service::GDS_LIMIT_PCT / 100.0 - housing_costs
}

/// Compute debt-service ratios from the raw form.
pub fn compute(form: &MortgageForm) -> MortgageResults {
    let monthly_income = parse_amount(&form.annual_income) / 12.0;
    let housing = monthly_housing_costs(
        parse_amount(&form.property_taxes),
        parse_amount(&form.heating_costs),
        parse_amount(&form.condo_fees),
        parse_amount(&form.other_housing_costs),
    );
    let debts = parse_amount(&form.credit_card_payments)
        + parse_amount(&form.car_payments)
        + parse_amount(&form.other_debts);

    let gds_pct = service_ratio(housing, monthly_income);
    let tds_pct = service_ratio(housing + debts, monthly_income);

    MortgageResults {
        monthly_income,
        monthly_housing_costs: housing,
        monthly_debt_payments: debts,
        gds_pct,
        tds_pct,
        housing_room: housing_room(monthly_income, housing),
        within_limits: monthly_income > 0.0
            && gds_pct <= debt_service::GDS_LIMIT_PCT
            && tds_pct <= debt_service::TDS_LIMIT_PCT,
    }
}

/// Validate the form, returning human-readable messages.
pub fn validate(form: &MortgageForm) -> Vec<String> {
    let mut errors = Vec::new();

    if is_blank(&form.annual_income) {
        errors.push("Annual income is required".to_string());
    } else if parse_amount(&form.annual_income) <= 0.0 {
        errors.push("Annual income must be greater than $0".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> MortgageForm {
        MortgageForm {
            annual_income: "96000".to_string(),
            down_payment: "60000".to_string(),
            credit_card_payments: "200".to_string(),
            car_payments: "400".to_string(),
            other_debts: String::new(),
            property_taxes: "4800".to_string(),
            heating_costs: "150".to_string(),
            condo_fees: "500".to_string(),
            other_housing_costs: String::new(),
            results: None,
        }
    }

    #[test]
    fn test_monthly_housing_costs() {
        // 4800/12 + 150 + 500/2 + 0 = 800
        assert_eq!(monthly_housing_costs(4800.0, 150.0, 500.0, 0.0), 800.0);
    }

    #[test]
    fn test_ratios() {
        let results = compute(&filled_form());
        assert_eq!(results.monthly_income, 8000.0);
        assert_eq!(results.monthly_housing_costs, 800.0);
        assert_eq!(results.monthly_debt_payments, 600.0);
        assert_eq!(results.gds_pct, 10.0);
        assert_eq!(results.tds_pct, 17.5);
        assert!(results.within_limits);
    }

    #[test]
    fn test_housing_room() {
        // 32% of 8000 is 2560; 800 already spent
        assert_eq!(housing_room(8000.0, 800.0), 1760.0);
        assert!(housing_room(1000.0, 800.0) < 0.0);
    }

    #[test]
    fn test_zero_income_guards() {
        assert_eq!(service_ratio(800.0, 0.0), 0.0);

        let mut form = filled_form();
        form.annual_income = String::new();
        let results = compute(&form);
        assert_eq!(results.gds_pct, 0.0);
        assert_eq!(results.tds_pct, 0.0);
        assert!(!results.within_limits);
    }

    #[test]
    fn test_over_limit() {
        let mut form = filled_form();
        form.annual_income = "24000".to_string(); // 2000/month
        let results = compute(&form);
        assert_eq!(results.gds_pct, 40.0);
        assert!(!results.within_limits);
    }

    #[test]
    fn test_validation() {
        assert!(validate(&filled_form()).is_empty());

        let errors = validate(&MortgageForm::default());
        assert_eq!(errors, vec!["Annual income is required".to_string()]);
    }
}
