//! Calculator form records and computed results.
//!
//! Form fields hold the raw text the user typed (empty by default) so every
//! record round-trips losslessly through serialization; parsing to numbers
//! happens in [`crate::core`] when a calculation runs. The whole
//! [`Calculators`] record is persisted as one JSON blob.

use serde::{Deserialize, Serialize};

// ============================================================================
// Down Payment
// ============================================================================

/// How the down payment field is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownPaymentMode {
    /// Field is a dollar amount.
    Dollar,
    /// Field is a percentage of the property price.
    #[default]
    Percentage,
}

/// Down-payment savings calculator form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DownPaymentForm {
    pub property_price: String,
    pub down_payment: String,
    pub down_payment_mode: DownPaymentMode,
    pub closing_costs: String,
    pub existing_savings: String,
    pub timeline: String,
    pub monthly_income: String,
    pub results: Option<DownPaymentResults>,
}

impl Default for DownPaymentForm {
    fn default() -> Self {
        Self {
            property_price: String::new(),
            down_payment: String::new(),
            down_payment_mode: DownPaymentMode::default(),
            // Typical transaction-fee prefill
            closing_costs: "3.5".to_string(),
            existing_savings: String::new(),
            timeline: String::new(),
            monthly_income: String::new(),
            results: None,
        }
    }
}

/// Computed down-payment savings plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownPaymentResults {
    /// Down payment in dollars (input or derived from percentage).
    pub down_payment: f64,
    /// Down payment as a percentage of property price.
    pub down_payment_pct: f64,
    pub closing_costs: f64,
    /// May be negative when existing savings exceed the goal.
    pub total_needed: f64,
    pub monthly_target: f64,
    /// Monthly target as a percentage of monthly income.
    pub savings_rate: f64,
    /// Existing savings as a share of the full goal, clamped to 0-100.
    pub progress_pct: f64,
}

// ============================================================================
// Net Worth
// ============================================================================

/// Asset fields for the net worth calculator.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetFields {
    pub cash_checking: String,
    pub high_interest_savings: String,
    pub tfsa: String,
    pub rrsp: String,
    pub fhsa: String,
    pub investments: String,
    pub other_assets: String,
}

impl AssetFields {
    /// Raw field values in display order.
    pub fn values(&self) -> [&str; 7] {
        [
            &self.cash_checking,
            &self.high_interest_savings,
            &self.tfsa,
            &self.rrsp,
            &self.fhsa,
            &self.investments,
            &self.other_assets,
        ]
    }
}

/// Liability fields for the net worth calculator.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LiabilityFields {
    pub credit_cards: String,
    pub lines_of_credit: String,
    pub car_loans: String,
    pub student_loans: String,
    pub other_debts: String,
}

impl LiabilityFields {
    pub fn values(&self) -> [&str; 5] {
        [
            &self.credit_cards,
            &self.lines_of_credit,
            &self.car_loans,
            &self.student_loans,
            &self.other_debts,
        ]
    }
}

/// Net worth calculator form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetWorthForm {
    pub assets: AssetFields,
    pub liabilities: LiabilityFields,
    pub results: Option<NetWorthResults>,
}

/// Computed net worth summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthResults {
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub net_worth: f64,
    pub health: HealthTier,
}

// ============================================================================
// Cash Flow
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IncomeFields {
    pub monthly_income: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FixedExpenseFields {
    pub rent_mortgage: String,
    pub utilities: String,
    pub internet: String,
    pub phone: String,
    pub insurance: String,
    pub transit_car: String,
    pub subscriptions: String,
    pub minimum_debt_payments: String,
}

impl FixedExpenseFields {
    pub fn values(&self) -> [&str; 8] {
        [
            &self.rent_mortgage,
            &self.utilities,
            &self.internet,
            &self.phone,
            &self.insurance,
            &self.transit_car,
            &self.subscriptions,
            &self.minimum_debt_payments,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VariableExpenseFields {
    pub groceries: String,
    pub dining: String,
    pub gas: String,
    pub shopping: String,
    pub personal: String,
    pub travel: String,
    pub miscellaneous: String,
}

impl VariableExpenseFields {
    pub fn values(&self) -> [&str; 7] {
        [
            &self.groceries,
            &self.dining,
            &self.gas,
            &self.shopping,
            &self.personal,
            &self.travel,
            &self.miscellaneous,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SavingsFields {
    pub emergency_fund: String,
    pub home_fund: String,
    pub rrsp_fhsa: String,
}

impl SavingsFields {
    pub fn values(&self) -> [&str; 3] {
        [&self.emergency_fund, &self.home_fund, &self.rrsp_fhsa]
    }
}

/// Cash flow calculator form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CashFlowForm {
    pub income: IncomeFields,
    pub fixed_expenses: FixedExpenseFields,
    pub variable_expenses: VariableExpenseFields,
    pub savings: SavingsFields,
    pub results: Option<CashFlowResults>,
}

/// Computed monthly cash flow summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowResults {
    pub total_income: f64,
    pub total_fixed_expenses: f64,
    pub total_variable_expenses: f64,
    pub total_savings: f64,
    /// Income minus expenses and savings allocations; may be negative.
    pub cash_surplus: f64,
    pub health: HealthTier,
}

// ============================================================================
// Mortgage Affordability
// ============================================================================

/// Mortgage affordability calculator form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MortgageForm {
    pub annual_income: String,
    pub down_payment: String,
    pub credit_card_payments: String,
    pub car_payments: String,
    pub other_debts: String,
    pub property_taxes: String,
    pub heating_costs: String,
    pub condo_fees: String,
    pub other_housing_costs: String,
    pub results: Option<MortgageResults>,
}

/// Computed debt-service ratios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageResults {
    pub monthly_income: f64,
    pub monthly_housing_costs: f64,
    pub monthly_debt_payments: f64,
    /// Gross debt service ratio, percent of gross monthly income.
    pub gds_pct: f64,
    /// Total debt service ratio, percent of gross monthly income.
    pub tds_pct: f64,
    /// Monthly housing budget left under the GDS cap; may be negative.
    pub housing_room: f64,
    pub within_limits: bool,
}

// ============================================================================
// Shared Values
// ============================================================================

/// Values copied between calculators (e.g. monthly income entered in the
/// down-payment calculator feeds the cash flow calculator).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SharedValues {
    pub monthly_income: String,
    pub monthly_savings: String,
    pub home_fund_target: String,
}

// ============================================================================
// Calculators (the persisted blob)
// ============================================================================

/// All calculator state, persisted under a single storage key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Calculators {
    pub down_payment: DownPaymentForm,
    pub net_worth: NetWorthForm,
    pub cash_flow: CashFlowForm,
    pub mortgage: MortgageForm,
    pub shared: SharedValues,
}

// ============================================================================
// Health Tier
// ============================================================================

/// Coarse financial-health tier shown with calculator results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthTier {
    Excellent,
    Good,
    Fair,
    Attention,
}

impl HealthTier {
    /// CSS class suffix for the status banner.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Attention => "attention",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_down_payment_defaults() {
        let form = DownPaymentForm::default();
        assert_eq!(form.closing_costs, "3.5");
        assert_eq!(form.down_payment_mode, DownPaymentMode::Percentage);
        assert!(form.property_price.is_empty());
        assert!(form.results.is_none());
    }

    #[test]
    fn test_mode_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&DownPaymentMode::Dollar).unwrap(),
            "\"dollar\""
        );
        assert_eq!(
            serde_json::to_string(&DownPaymentMode::Percentage).unwrap(),
            "\"percentage\""
        );
    }

    #[test]
    fn test_calculators_round_trip() {
        let mut calculators = Calculators::default();
        calculators.down_payment.property_price = "500000".to_string();
        calculators.net_worth.assets.tfsa = "25000".to_string();
        calculators.cash_flow.income.monthly_income = "4800".to_string();
        calculators.shared.monthly_income = "4800".to_string();

        let json = serde_json::to_string(&calculators).unwrap();
        let back: Calculators = serde_json::from_str(&json).unwrap();
        assert_eq!(back, calculators);
    }

    #[test]
    fn test_unknown_fields_fall_back_to_defaults() {
        // A partial record (older version, missing fields) still loads.
        let back: Calculators = serde_json::from_str(r#"{"shared":{"monthlyIncome":"5000"}}"#)
            .expect("partial record should deserialize");
        assert_eq!(back.shared.monthly_income, "5000");
        assert_eq!(back.down_payment.closing_costs, "3.5");
    }
}
