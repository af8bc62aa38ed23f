//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::components::AppRouter;
use crate::config::storage_keys;
use crate::core::persist::{self, StateStore};
use crate::models::{Calculators, Profile, ThemeState, UiState};
use crate::utils::storage::LocalStore;
use crate::utils::{dom, log};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component via `use_context::<AppContext>()`. Each field mirrors one
/// persisted logical store; mutations go through the `update_*` helpers so
/// every change is written back to localStorage wholesale.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// All calculator form data and results.
    pub calculators: RwSignal<Calculators>,
    /// Cross-calculator financial profile and snapshot history.
    pub profile: RwSignal<Profile>,
    /// Theme preference.
    pub theme: RwSignal<ThemeState>,
    /// Sidebar and last-view state.
    pub ui: RwSignal<UiState>,
    /// Whether the mobile slide-over menu is open (not persisted).
    pub mobile_menu_open: RwSignal<bool>,
}

impl AppContext {
    /// Creates the context by loading every store from localStorage.
    ///
    /// Missing or malformed records fall back to defaults.
    pub fn load() -> Self {
        let store = LocalStore;
        Self {
            calculators: RwSignal::new(persist::load(&store, storage_keys::CALCULATORS)),
            profile: RwSignal::new(persist::load(&store, storage_keys::PROFILE)),
            theme: RwSignal::new(persist::load(&store, storage_keys::THEME)),
            ui: RwSignal::new(persist::load(&store, storage_keys::UI)),
            mobile_menu_open: RwSignal::new(false),
        }
    }

    fn persist<T: serde::Serialize>(key: &str, value: &T) {
        if let Err(err) = persist::save(&LocalStore, key, value) {
            log::warn(&format!("failed to persist {key}: {err}"));
        }
    }

    /// Mutate the calculator store and write it back.
    pub fn update_calculators(&self, mutate: impl FnOnce(&mut Calculators)) {
        self.calculators.update(mutate);
        self.calculators
            .with_untracked(|value| Self::persist(storage_keys::CALCULATORS, value));
    }

    /// Mutate the profile and write it back.
    pub fn update_profile(&self, mutate: impl FnOnce(&mut Profile)) {
        self.profile.update(mutate);
        self.profile
            .with_untracked(|value| Self::persist(storage_keys::PROFILE, value));
    }

    /// Mutate the theme preference and write it back.
    pub fn update_theme(&self, mutate: impl FnOnce(&mut ThemeState)) {
        self.theme.update(mutate);
        self.theme
            .with_untracked(|value| Self::persist(storage_keys::THEME, value));
    }

    /// Mutate the UI state and write it back.
    pub fn update_ui(&self, mutate: impl FnOnce(&mut UiState)) {
        self.ui.update(mutate);
        self.ui
            .with_untracked(|value| Self::persist(storage_keys::UI, value));
    }

    /// Toggle the sidebar and persist the collapsed flag.
    pub fn toggle_sidebar(&self) {
        self.update_ui(|ui| ui.sidebar_collapsed = !ui.sidebar_collapsed);
    }

    /// Reset every store to defaults and clear the persisted blobs.
    pub fn reset_all(&self) {
        let store = LocalStore;
        for key in [
            storage_keys::CALCULATORS,
            storage_keys::PROFILE,
            storage_keys::UI,
        ] {
            if let Err(err) = store.remove(key) {
                log::warn(&format!("failed to clear {key}: {err}"));
            }
        }
        self.calculators.set(Calculators::default());
        self.profile.update(Profile::clear);
        self.ui.set(UiState::default());
    }
}

// ============================================================================
// App
// ============================================================================

/// Root application component with error boundary.
///
/// This component:
/// - Loads persisted state and provides the global AppContext
/// - Keeps the document theme in sync with the resolved preference
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::load();
    provide_context(ctx);

    // Resolve the theme against the live system preference and apply it to
    // the document element whenever either side changes.
    let system_prefers_dark = use_media_query("(prefers-color-scheme: dark)");
    Effect::new(move || {
        let resolved = ctx.theme.get().resolve(system_prefers_dark.get());
        dom::apply_document_theme(resolved.as_str());
    });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #dc2626; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #6b7280; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details style="text-align: left; margin-bottom: 1rem;">
                            <summary style="cursor: pointer; color: #6b7280;">
                                "Error details"
                            </summary>
                            <ul style="margin: 1rem 0 0 0; padding-left: 1.5rem; color: #dc2626;">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #2563eb;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 8px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
