//! The four calculator views plus their shared form and result widgets.
//!
//! Components:
//! - [`DownPayment`] - Down payment savings plan
//! - [`NetWorth`] - Assets vs. liabilities
//! - [`CashFlow`] - Monthly income vs. spending and savings
//! - [`Mortgage`] - Debt-service affordability check

mod cash_flow;
mod down_payment;
mod errors;
mod fields;
mod mortgage;
mod net_worth;
mod results;

pub use cash_flow::CashFlow;
pub use down_payment::DownPayment;
pub use mortgage::Mortgage;
pub use net_worth::NetWorth;
