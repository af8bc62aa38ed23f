//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Calculators`] and the per-calculator form/result records
//! - [`Profile`] - Cross-calculator financial state and snapshot history
//! - [`ThemeState`] - Theme preference and resolution
//! - [`Route`] - Hash-based navigation
//! - [`UiState`] - Persisted UI chrome state

mod calculators;
mod profile;
mod route;
mod theme;
mod ui;

pub use calculators::{
    AssetFields, Calculators, CashFlowForm, CashFlowResults, DownPaymentForm, DownPaymentMode,
    DownPaymentResults, FixedExpenseFields, HealthTier, IncomeFields, LiabilityFields,
    MortgageForm, MortgageResults, NetWorthForm, NetWorthResults, SavingsFields, SharedValues,
    VariableExpenseFields,
};
pub use profile::{
    AssetAmounts, BudgetAmounts, CashFlowSnapshot, FinancialState, Goals, LastUpdated,
    LiabilityAmounts, NetWorthSnapshot, Profile,
};
pub use route::Route;
pub use theme::{ResolvedTheme, ThemeChoice, ThemeState};
pub use ui::UiState;
