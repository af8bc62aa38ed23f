//! Monthly cash flow calculation and validation.

use crate::core::input::{is_blank, parse_amount};
use crate::core::networth::sum_fields;
use crate::models::{CashFlowForm, CashFlowResults, HealthTier};

/// Cash left over after expenses and savings allocations; may be negative.
pub fn cash_surplus(income: f64, fixed: f64, variable: f64, savings: f64) -> f64 {
    income - fixed - variable - savings
}

/// Health tier from the surplus-to-income ratio.
pub fn health(income: f64, surplus: f64) -> HealthTier {
    if income <= 0.0 || surplus < 0.0 {
        return HealthTier::Attention;
    }

    let ratio = surplus / income;
    if ratio >= 0.2 {
        HealthTier::Excellent
    } else if ratio >= 0.1 {
        HealthTier::Good
    } else {
        HealthTier::Fair
    }
}

/// User-facing description of the health tier.
pub fn health_message(tier: HealthTier) -> &'static str {
    match tier {
        HealthTier::Excellent => "Excellent - you keep 20% or more of your income.",
        HealthTier::Good => "Good - a solid monthly buffer.",
        HealthTier::Fair => "Fair - your budget balances, but the margin is thin.",
        HealthTier::Attention => "Needs attention - you are spending more than you earn.",
    }
}

/// Compute totals, surplus, and health from the raw form.
pub fn compute(form: &CashFlowForm) -> CashFlowResults {
    let total_income = parse_amount(&form.income.monthly_income);
    let total_fixed = sum_fields(form.fixed_expenses.values().iter().copied());
    let total_variable = sum_fields(form.variable_expenses.values().iter().copied());
    let total_savings = sum_fields(form.savings.values().iter().copied());
    let surplus = cash_surplus(total_income, total_fixed, total_variable, total_savings);

    CashFlowResults {
        total_income,
        total_fixed_expenses: total_fixed,
        total_variable_expenses: total_variable,
        total_savings,
        cash_surplus: surplus,
        health: health(total_income, surplus),
    }
}

/// Validate the form, returning human-readable messages.
pub fn validate(form: &CashFlowForm) -> Vec<String> {
    let mut errors = Vec::new();

    if is_blank(&form.income.monthly_income) {
        errors.push("Monthly income is required".to_string());
    } else if parse_amount(&form.income.monthly_income) <= 0.0 {
        errors.push("Monthly income must be greater than $0".to_string());
    }

    let any_expense = form
        .fixed_expenses
        .values()
        .iter()
        .chain(form.variable_expenses.values().iter())
        .any(|field| !is_blank(field));
    if !any_expense {
        errors.push("Please enter at least one expense value".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FixedExpenseFields, IncomeFields, SavingsFields, VariableExpenseFields};

    fn filled_form() -> CashFlowForm {
        CashFlowForm {
            income: IncomeFields {
                monthly_income: "4800".to_string(),
            },
            fixed_expenses: FixedExpenseFields {
                rent_mortgage: "1800".to_string(),
                utilities: "200".to_string(),
                internet: "80".to_string(),
                phone: "60".to_string(),
                insurance: "150".to_string(),
                transit_car: "300".to_string(),
                subscriptions: "50".to_string(),
                minimum_debt_payments: "200".to_string(),
            },
            variable_expenses: VariableExpenseFields {
                groceries: "400".to_string(),
                dining: "200".to_string(),
                gas: "150".to_string(),
                shopping: "200".to_string(),
                personal: "100".to_string(),
                travel: "150".to_string(),
                miscellaneous: "100".to_string(),
            },
            savings: SavingsFields {
                emergency_fund: "200".to_string(),
                home_fund: String::new(),
                rrsp_fhsa: String::new(),
            },
            results: None,
        }
    }

    #[test]
    fn test_category_totals() {
        let results = compute(&filled_form());
        assert_eq!(results.total_income, 4800.0);
        assert_eq!(results.total_fixed_expenses, 2840.0);
        assert_eq!(results.total_variable_expenses, 1300.0);
        assert_eq!(results.total_savings, 200.0);
    }

    #[test]
    fn test_cash_surplus() {
        let results = compute(&filled_form());
        assert_eq!(results.cash_surplus, 460.0);
        assert_eq!(cash_surplus(4800.0, 2840.0, 1300.0, 200.0), 460.0);
    }

    #[test]
    fn test_surplus_may_be_negative() {
        assert_eq!(cash_surplus(3000.0, 2500.0, 800.0, 100.0), -400.0);
    }

    #[test]
    fn test_health_tiers() {
        assert_eq!(health(4800.0, 2400.0), HealthTier::Excellent);
        assert_eq!(health(4800.0, 600.0), HealthTier::Good);
        assert_eq!(health(4800.0, 100.0), HealthTier::Fair);
        assert_eq!(health(4800.0, -200.0), HealthTier::Attention);
        assert_eq!(health(0.0, 0.0), HealthTier::Attention);
    }

    #[test]
    fn test_validation_requires_income() {
        let errors = validate(&CashFlowForm::default());
        assert!(errors.contains(&"Monthly income is required".to_string()));
        assert!(errors.contains(&"Please enter at least one expense value".to_string()));
    }

    #[test]
    fn test_validation_passes_with_income_and_expense() {
        assert!(validate(&filled_form()).is_empty());
    }

    #[test]
    fn test_income_alone_is_not_enough() {
        let mut form = CashFlowForm::default();
        form.income.monthly_income = "4800".to_string();
        let errors = validate(&form);
        assert_eq!(
            errors,
            vec!["Please enter at least one expense value".to_string()]
        );
    }
}
