//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`layout`] - Sidebar, header, and page shell
//! - [`overview`] - Dashboard overview with stat and launch cards
//! - [`calculators`] - The four calculator views and shared form widgets
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod calculators;
pub mod icons;
pub mod layout;
pub mod overview;
pub mod router;

pub use router::AppRouter;
