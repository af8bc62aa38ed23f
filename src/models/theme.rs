//! Theme preference model.
//!
//! The user either follows the system `prefers-color-scheme` preference or
//! pins an explicit light/dark choice. The resolved theme is applied to the
//! document element; the preference record is persisted on change.

use serde::{Deserialize, Serialize};

/// User-facing theme choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    Light,
    Dark,
    #[default]
    System,
}

/// The theme that actually gets applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl ResolvedTheme {
    /// Value for the `data-theme` document attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Persisted theme preference.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeState {
    pub choice: ThemeChoice,
    /// The user's last explicit pick, kept when switching back to system.
    pub user_choice: Option<ThemeChoice>,
}

impl ThemeState {
    /// Resolve the preference against the current system preference.
    pub fn resolve(&self, system_prefers_dark: bool) -> ResolvedTheme {
        match self.choice {
            ThemeChoice::Light => ResolvedTheme::Light,
            ThemeChoice::Dark => ResolvedTheme::Dark,
            ThemeChoice::System => {
                if system_prefers_dark {
                    ResolvedTheme::Dark
                } else {
                    ResolvedTheme::Light
                }
            }
        }
    }

    /// Set an explicit theme, or return to following the system.
    pub fn set(&mut self, choice: ThemeChoice) {
        self.choice = choice;
        if choice != ThemeChoice::System {
            self.user_choice = Some(choice);
        }
    }

    /// Flip between light and dark relative to the resolved theme.
    pub fn toggle(&mut self, system_prefers_dark: bool) {
        let next = match self.resolve(system_prefers_dark) {
            ResolvedTheme::Light => ThemeChoice::Dark,
            ResolvedTheme::Dark => ThemeChoice::Light,
        };
        self.set(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_follows_media_query() {
        let state = ThemeState::default();
        assert_eq!(state.resolve(true), ResolvedTheme::Dark);
        assert_eq!(state.resolve(false), ResolvedTheme::Light);
    }

    #[test]
    fn test_explicit_choice_wins_over_system() {
        let mut state = ThemeState::default();
        state.set(ThemeChoice::Light);
        assert_eq!(state.resolve(true), ResolvedTheme::Light);
        assert_eq!(state.user_choice, Some(ThemeChoice::Light));
    }

    #[test]
    fn test_toggle_flips_resolved_theme() {
        let mut state = ThemeState::default();
        // System is dark, so toggling pins light.
        state.toggle(true);
        assert_eq!(state.choice, ThemeChoice::Light);
        state.toggle(true);
        assert_eq!(state.choice, ThemeChoice::Dark);
    }

    #[test]
    fn test_round_trip() {
        let mut state = ThemeState::default();
        state.set(ThemeChoice::Dark);

        let json = serde_json::to_string(&state).unwrap();
        let back: ThemeState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
