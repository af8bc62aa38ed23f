//! Core business logic: calculation, validation, and persistence.
//!
//! Everything here is pure and browser-free so it can be unit tested on the
//! host. This module provides:
//! - [`downpayment`], [`networth`], [`cashflow`], [`mortgage`] - per-calculator
//!   computation and validation
//! - [`persist`] - the [`persist::StateStore`] trait and load/save helpers
//! - [`input`] - raw-field parsing and sanitization
//! - [`sync_shared`] - cross-calculator value propagation

pub mod cashflow;
pub mod downpayment;
pub mod error;
pub mod input;
pub mod mortgage;
pub mod networth;
pub mod persist;
mod sync;

pub use sync::sync_shared;
