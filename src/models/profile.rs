//! Cross-calculator financial profile.
//!
//! The profile is the numeric record of the user's financial state, fed by
//! calculator results. It also keeps bounded snapshot histories for net
//! worth and cash flow, and timestamps of the last update per area. All
//! timestamps are ISO-8601 strings captured at the UI boundary.

use serde::{Deserialize, Serialize};

use crate::config::MAX_SNAPSHOTS;
use crate::utils::History;

// ============================================================================
// Numeric amount groups
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetAmounts {
    pub cash_checking: f64,
    pub high_interest_savings: f64,
    pub tfsa: f64,
    pub rrsp: f64,
    pub fhsa: f64,
    pub investments: f64,
    pub other_assets: f64,
}

impl AssetAmounts {
    pub fn total(&self) -> f64 {
        self.cash_checking
            + self.high_interest_savings
            + self.tfsa
            + self.rrsp
            + self.fhsa
            + self.investments
            + self.other_assets
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LiabilityAmounts {
    pub credit_cards: f64,
    pub lines_of_credit: f64,
    pub car_loans: f64,
    pub student_loans: f64,
    pub other_debts: f64,
}

impl LiabilityAmounts {
    pub fn total(&self) -> f64 {
        self.credit_cards
            + self.lines_of_credit
            + self.car_loans
            + self.student_loans
            + self.other_debts
    }
}

/// Monthly budget allocations mirrored from the cash flow calculator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BudgetAmounts {
    pub fixed_expenses: f64,
    pub variable_expenses: f64,
    pub savings: f64,
}

/// Savings goals fed by the down-payment calculator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Goals {
    pub down_payment_target: f64,
    pub monthly_savings_goal: f64,
    /// Months to the down-payment target.
    pub target_timeline: f64,
}

/// The user's current financial state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialState {
    pub monthly_income: f64,
    pub existing_savings: f64,
    pub assets: AssetAmounts,
    pub liabilities: LiabilityAmounts,
    pub budget: BudgetAmounts,
    pub goals: Goals,
}

// ============================================================================
// Snapshots
// ============================================================================

/// A point-in-time net worth record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthSnapshot {
    pub timestamp: String,
    pub assets: AssetAmounts,
    pub liabilities: LiabilityAmounts,
    pub total_net_worth: f64,
}

/// A point-in-time cash flow record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowSnapshot {
    pub timestamp: String,
    pub total_income: f64,
    pub total_expenses: f64,
    pub total_savings: f64,
    pub cash_surplus: f64,
}

/// Last-updated timestamps per profile area.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LastUpdated {
    pub financial_state: Option<String>,
    pub net_worth: Option<String>,
    pub cash_flow: Option<String>,
    pub goals: Option<String>,
}

// ============================================================================
// Profile
// ============================================================================

/// Persistent user financial profile, one storage key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub financial_state: FinancialState,
    pub net_worth_history: History<NetWorthSnapshot, MAX_SNAPSHOTS>,
    pub cash_flow_history: History<CashFlowSnapshot, MAX_SNAPSHOTS>,
    pub last_updated: LastUpdated,
}

impl Profile {
    /// Record a down-payment calculation: income, savings, and goals.
    pub fn record_down_payment(
        &mut self,
        monthly_income: f64,
        existing_savings: f64,
        down_payment_target: f64,
        monthly_savings_goal: f64,
        timeline_months: f64,
        timestamp: &str,
    ) {
        if monthly_income > 0.0 {
            self.financial_state.monthly_income = monthly_income;
        }
        self.financial_state.existing_savings = existing_savings;
        self.financial_state.goals = Goals {
            down_payment_target,
            monthly_savings_goal,
            target_timeline: timeline_months,
        };
        self.last_updated.financial_state = Some(timestamp.to_string());
        self.last_updated.goals = Some(timestamp.to_string());
    }

    /// Record a net worth calculation and append a snapshot.
    pub fn record_net_worth(
        &mut self,
        assets: AssetAmounts,
        liabilities: LiabilityAmounts,
        total_net_worth: f64,
        timestamp: &str,
    ) {
        self.financial_state.assets = assets;
        self.financial_state.liabilities = liabilities;
        self.net_worth_history.push(NetWorthSnapshot {
            timestamp: timestamp.to_string(),
            assets,
            liabilities,
            total_net_worth,
        });
        self.last_updated.net_worth = Some(timestamp.to_string());
    }

    /// Record a cash flow calculation and append a snapshot.
    pub fn record_cash_flow(
        &mut self,
        monthly_income: f64,
        total_fixed: f64,
        total_variable: f64,
        total_savings: f64,
        cash_surplus: f64,
        timestamp: &str,
    ) {
        if monthly_income > 0.0 {
            self.financial_state.monthly_income = monthly_income;
        }
        self.financial_state.budget = BudgetAmounts {
            fixed_expenses: total_fixed,
            variable_expenses: total_variable,
            savings: total_savings,
        };
        self.cash_flow_history.push(CashFlowSnapshot {
            timestamp: timestamp.to_string(),
            total_income: monthly_income,
            total_expenses: total_fixed + total_variable,
            total_savings,
            cash_surplus,
        });
        self.last_updated.cash_flow = Some(timestamp.to_string());
        self.last_updated.financial_state = Some(timestamp.to_string());
    }

    /// Monthly income previously recorded by any calculator, for
    /// prefilling income fields elsewhere.
    pub fn recorded_income(&self) -> Option<f64> {
        let income = self.financial_state.monthly_income;
        (income > 0.0).then_some(income)
    }

    /// Latest recorded net worth, if any snapshot exists.
    pub fn latest_net_worth(&self) -> Option<f64> {
        self.net_worth_history
            .latest()
            .map(|snapshot| snapshot.total_net_worth)
    }

    /// True when any part of the profile holds a non-zero value.
    pub fn has_data(&self) -> bool {
        let state = &self.financial_state;
        state.monthly_income > 0.0
            || state.existing_savings > 0.0
            || state.assets.total() > 0.0
            || state.liabilities.total() > 0.0
            || !self.net_worth_history.is_empty()
            || !self.cash_flow_history.is_empty()
    }

    /// Reset the whole profile, including histories.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_inputs(i: usize) -> (AssetAmounts, LiabilityAmounts) {
        let assets = AssetAmounts {
            cash_checking: 1000.0 * i as f64,
            ..Default::default()
        };
        (assets, LiabilityAmounts::default())
    }

    #[test]
    fn test_net_worth_history_capped_at_twelve() {
        let mut profile = Profile::default();
        for i in 0..20 {
            let (assets, liabilities) = snapshot_inputs(i);
            profile.record_net_worth(assets, liabilities, assets.total(), "2026-01-01T00:00:00Z");
        }

        assert_eq!(profile.net_worth_history.len(), 12);
        // Oldest entries evicted first: entry 8 is now the oldest.
        let oldest = profile.net_worth_history.iter().next().unwrap();
        assert_eq!(oldest.total_net_worth, 8000.0);
        assert_eq!(profile.latest_net_worth(), Some(19000.0));
    }

    #[test]
    fn test_cash_flow_history_capped_at_twelve() {
        let mut profile = Profile::default();
        for i in 0..15 {
            profile.record_cash_flow(4800.0, 2840.0, 1300.0, 200.0 + i as f64, 460.0, "t");
        }
        assert_eq!(profile.cash_flow_history.len(), 12);
    }

    #[test]
    fn test_record_down_payment_skips_zero_income() {
        let mut profile = Profile::default();
        profile.financial_state.monthly_income = 5000.0;
        profile.record_down_payment(0.0, 25000.0, 115000.0, 3750.0, 24.0, "t");

        // Absent income leaves the existing profile value alone.
        assert_eq!(profile.financial_state.monthly_income, 5000.0);
        assert_eq!(profile.financial_state.goals.down_payment_target, 115000.0);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut profile = Profile::default();
        profile.record_cash_flow(4800.0, 2840.0, 1300.0, 200.0, 460.0, "t");
        assert!(profile.has_data());

        profile.clear();
        assert!(!profile.has_data());
        assert_eq!(profile, Profile::default());
    }

    #[test]
    fn test_profile_round_trip() {
        let mut profile = Profile::default();
        let (assets, liabilities) = snapshot_inputs(3);
        profile.record_net_worth(assets, liabilities, 3000.0, "2026-08-30T10:00:00Z");

        let json = serde_json::to_string(&profile).unwrap();
        let back: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }
}
