//! Utility modules for web, DOM, and data structure operations.
//!
//! Provides:
//! - [`History`] - Bounded FIFO list for snapshot history
//! - [`storage::LocalStore`] - localStorage persistence back end
//! - [`format`] - Currency/percentage display formatting
//! - [`dom`] - Safe browser API access

pub mod dom;
pub mod format;
mod history;
pub mod log;
pub mod storage;

pub use history::History;
