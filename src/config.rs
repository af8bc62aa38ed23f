//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application:
//! storage keys, validation limits, and UI settings.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the sidebar brand and page title.
pub const APP_NAME: &str = "Hearthplan";

// =============================================================================
// Storage Keys
// =============================================================================

/// localStorage keys, one per logical store. Each key holds a single JSON
/// blob that is read and replaced wholesale.
pub mod storage_keys {
    /// Calculator form data and results.
    pub const CALCULATORS: &str = "hearthplan_calculators";
    /// Cross-calculator financial profile and snapshot history.
    pub const PROFILE: &str = "hearthplan_profile";
    /// Theme preference.
    pub const THEME: &str = "hearthplan_theme";
    /// UI chrome state (sidebar, last view).
    pub const UI: &str = "hearthplan_ui";
}

// =============================================================================
// Validation Limits
// =============================================================================

/// Bounds used by the calculator validation rules. Validation is advisory:
/// it blocks the Calculate action but never alters stored values.
pub mod limits {
    /// Upper sanity bound on property price, in dollars.
    pub const MAX_PROPERTY_PRICE: f64 = 10_000_000.0;

    /// Minimum down payment as a percentage of property price.
    pub const MIN_DOWN_PAYMENT_PCT: f64 = 3.5;

    /// Closing costs sanity range, as a percentage of property price.
    pub const MAX_CLOSING_COST_PCT: f64 = 10.0;

    /// Savings timeline range, in months.
    pub const MIN_TIMELINE_MONTHS: u32 = 1;
    pub const MAX_TIMELINE_MONTHS: u32 = 600;

    /// Monthly income below this triggers a plausibility warning.
    pub const MIN_PLAUSIBLE_INCOME: f64 = 1_000.0;

    /// Maximum digits accepted by a currency input field.
    pub const MAX_CURRENCY_DIGITS: usize = 10;
}

// =============================================================================
// Affordability Rules
// =============================================================================

/// Debt-service ratio caps used by the mortgage affordability calculator.
pub mod debt_service {
    /// Gross debt service cap: housing costs as a share of gross income.
    pub const GDS_LIMIT_PCT: f64 = 32.0;
    /// Total debt service cap: housing plus all debt payments.
    pub const TDS_LIMIT_PCT: f64 = 40.0;
}

// =============================================================================
// History Configuration
// =============================================================================

/// Number of snapshots retained per history list (oldest evicted first).
pub const MAX_SNAPSHOTS: usize = 12;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
