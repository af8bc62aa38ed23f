//! Hash-based routing between dashboard views.
//!
//! URL format: `#/slug` (e.g. `#/down-payment`). Hash routing keeps the app
//! servable from any static host and lets browser back/forward work via
//! `hashchange` events.

/// Application views reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// Dashboard overview: `#/` or empty hash.
    #[default]
    Overview,
    DownPayment,
    NetWorth,
    CashFlow,
    Mortgage,
}

impl Route {
    /// All routes in sidebar order (also the 1-5 keyboard shortcut order).
    pub const ALL: [Route; 5] = [
        Route::Overview,
        Route::DownPayment,
        Route::NetWorth,
        Route::CashFlow,
        Route::Mortgage,
    ];

    /// Parse a URL hash into a route. Unknown slugs fall back to Overview.
    pub fn from_hash(hash: &str) -> Self {
        let slug = hash.trim_start_matches('#').trim_matches('/');
        Self::from_slug(slug)
    }

    /// Parse a bare slug (no '#' or '/').
    pub fn from_slug(slug: &str) -> Self {
        match slug {
            "down-payment" => Self::DownPayment,
            "net-worth" => Self::NetWorth,
            "cash-flow" => Self::CashFlow,
            "mortgage" => Self::Mortgage,
            _ => Self::Overview,
        }
    }

    /// Slug used in the URL hash and the persisted last-view record.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Overview => "",
            Self::DownPayment => "down-payment",
            Self::NetWorth => "net-worth",
            Self::CashFlow => "cash-flow",
            Self::Mortgage => "mortgage",
        }
    }

    /// Convert the route to a URL hash.
    pub fn to_hash(&self) -> String {
        match self {
            Self::Overview => "#/".to_string(),
            _ => format!("#/{}", self.slug()),
        }
    }

    /// Title shown in the page header.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Overview => "Dashboard",
            Self::DownPayment => "Down Payment Calculator",
            Self::NetWorth => "Net Worth Calculator",
            Self::CashFlow => "Cash Flow Calculator",
            Self::Mortgage => "Mortgage Affordability",
        }
    }

    /// Get the current route from the browser URL.
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::from_hash(&hash)
    }

    /// Update the browser URL to match this route (using pushState).
    pub fn push(&self) {
        if let Some(window) = web_sys::window()
            && let Ok(history) = window.history()
        {
            let hash = self.to_hash();
            let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&hash));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(Route::from_hash(""), Route::Overview);
        assert_eq!(Route::from_hash("#"), Route::Overview);
        assert_eq!(Route::from_hash("#/"), Route::Overview);
        assert_eq!(Route::from_hash("#/down-payment"), Route::DownPayment);
        assert_eq!(Route::from_hash("#/net-worth"), Route::NetWorth);
        assert_eq!(Route::from_hash("#/cash-flow"), Route::CashFlow);
        assert_eq!(Route::from_hash("#/mortgage"), Route::Mortgage);
        // Unknown slugs land on the overview
        assert_eq!(Route::from_hash("#/nonsense"), Route::Overview);
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(Route::Overview.to_hash(), "#/");
        assert_eq!(Route::DownPayment.to_hash(), "#/down-payment");
        assert_eq!(Route::Mortgage.to_hash(), "#/mortgage");
    }

    #[test]
    fn test_hash_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_hash(&route.to_hash()), route);
        }
    }
}
