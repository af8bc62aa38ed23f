//! Persisted UI chrome state.

use serde::{Deserialize, Serialize};

/// Sidebar and last-view state, restored on load.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UiState {
    pub sidebar_collapsed: bool,
    /// Slug of the last visited view, restored when the URL has no hash.
    pub last_view: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let state = UiState {
            sidebar_collapsed: true,
            last_view: "net-worth".to_string(),
        };
        let json = serde_json::to_string(&state).unwrap();
        let back: UiState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
