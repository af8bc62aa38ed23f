//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Current time as an ISO-8601 string (e.g. "2026-08-30T12:34:56.789Z").
///
/// Snapshot timestamps are captured here at the UI boundary so the data
/// layer stays clock-free and testable.
pub fn now_iso() -> String {
    js_sys::Date::new_0()
        .to_iso_string()
        .as_string()
        .unwrap_or_default()
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL hash (without the '#' prefix).
pub fn get_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
        .trim_start_matches('#')
        .to_string()
}

/// Update the page title shown in the browser tab.
pub fn set_title(title: &str) {
    if let Some(window) = window()
        && let Some(document) = window.document()
    {
        document.set_title(title);
    }
}

// =============================================================================
// Theme Application
// =============================================================================

/// Apply a resolved theme to the document element.
///
/// Sets `data-theme="light|dark"` and swaps the `theme-light`/`theme-dark`
/// classes so CSS variables can target either mechanism.
pub fn apply_document_theme(theme: &str) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let classes = root.class_list();
    let _ = classes.remove_2("theme-light", "theme-dark");
    let _ = classes.add_1(&format!("theme-{theme}"));
    let _ = root.set_attribute("data-theme", theme);
}
