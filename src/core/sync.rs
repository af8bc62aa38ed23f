//! Cross-calculator shared-value propagation.
//!
//! After a calculation, values one calculator produced are copied into the
//! forms (and the `shared` record) where another calculator consumes them:
//!
//! - down-payment monthly income → cash flow income, shared
//! - down-payment monthly target → cash flow home fund, shared
//! - cash flow total savings → shared
//!
//! Only non-empty sources are copied; sync never blanks a field.

use crate::core::input::is_blank;
use crate::models::Calculators;
use crate::utils::format;

/// Propagate shared values between calculators in place.
pub fn sync_shared(calculators: &mut Calculators) {
    let income = calculators.down_payment.monthly_income.clone();
    if !is_blank(&income) {
        calculators.cash_flow.income.monthly_income = income.clone();
        calculators.shared.monthly_income = income;
    }

    if let Some(results) = &calculators.down_payment.results {
        let target = format::format_number(results.monthly_target);
        calculators.cash_flow.savings.home_fund = target.clone();
        calculators.shared.home_fund_target = target;
    }

    if let Some(results) = &calculators.cash_flow.results {
        calculators.shared.monthly_savings = format::format_number(results.total_savings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{cashflow, downpayment};

    #[test]
    fn test_income_flows_to_cash_flow() {
        let mut calculators = Calculators::default();
        calculators.down_payment.monthly_income = "8000".to_string();

        sync_shared(&mut calculators);

        assert_eq!(calculators.cash_flow.income.monthly_income, "8000");
        assert_eq!(calculators.shared.monthly_income, "8000");
    }

    #[test]
    fn test_blank_income_does_not_overwrite() {
        let mut calculators = Calculators::default();
        calculators.cash_flow.income.monthly_income = "4800".to_string();

        sync_shared(&mut calculators);

        assert_eq!(calculators.cash_flow.income.monthly_income, "4800");
    }

    #[test]
    fn test_monthly_target_becomes_home_fund() {
        let mut calculators = Calculators::default();
        calculators.down_payment.property_price = "500000".to_string();
        calculators.down_payment.down_payment = "20".to_string();
        calculators.down_payment.existing_savings = "25000".to_string();
        calculators.down_payment.timeline = "24".to_string();
        calculators.down_payment.results =
            Some(downpayment::compute(&calculators.down_payment));

        sync_shared(&mut calculators);

        assert!(!calculators.cash_flow.savings.home_fund.is_empty());
        assert_eq!(
            calculators.shared.home_fund_target,
            calculators.cash_flow.savings.home_fund
        );
    }

    #[test]
    fn test_total_savings_shared() {
        let mut calculators = Calculators::default();
        calculators.cash_flow.income.monthly_income = "4800".to_string();
        calculators.cash_flow.savings.emergency_fund = "200".to_string();
        calculators.cash_flow.savings.rrsp_fhsa = "300".to_string();
        calculators.cash_flow.results = Some(cashflow::compute(&calculators.cash_flow));

        sync_shared(&mut calculators);

        assert_eq!(calculators.shared.monthly_savings, "500");
    }
}
