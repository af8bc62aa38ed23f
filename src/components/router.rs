//! Application router component.
//!
//! Handles URL-based routing with hash history so the app works from any
//! static host. Uses native hashchange events instead of leptos_router for
//! true hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the current view is derived from
//!   `#/slug`, and browser back/forward buttons work automatically
//! - **Layout never re-renders on navigation**: only the page body swaps
//! - **Last view is persisted**: an empty hash restores the previous view

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::layout::Layout;
use crate::models::Route;

/// Navigation handle provided below the router.
///
/// Components navigate through this so the URL, the reactive route, and the
/// persisted last-view record stay in step (pushState does not fire
/// hashchange).
#[derive(Clone, Copy)]
pub struct Navigator {
    route: RwSignal<Route>,
    ctx: AppContext,
}

impl Navigator {
    /// The current route as a reactive signal.
    pub fn route(&self) -> RwSignal<Route> {
        self.route
    }

    /// Navigate to a view: update the URL, the route signal, and the
    /// persisted last-view slug, and close the mobile menu.
    pub fn go(&self, target: Route) {
        target.push();
        self.route.set(target);
        self.ctx
            .update_ui(|ui| ui.last_view = target.slug().to_string());
        self.ctx.mobile_menu_open.set(false);
    }
}

/// Main application router.
///
/// Routes:
/// - `#/` → Overview dashboard
/// - `#/down-payment`, `#/net-worth`, `#/cash-flow`, `#/mortgage` →
///   the corresponding calculator
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    // An empty hash on startup restores the last visited view.
    let initial = {
        let from_url = Route::current();
        if from_url == Route::Overview && crate::utils::dom::get_hash().is_empty() {
            ctx.ui.with_untracked(|ui| Route::from_slug(&ui.last_view))
        } else {
            from_url
        }
    };

    let route = RwSignal::new(initial);
    let navigator = Navigator { route, ctx };
    provide_context(navigator);

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(Route::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    // Global keyboard shortcuts: Ctrl/Cmd+B toggles the sidebar, digits 1-5
    // jump between views, Escape closes the mobile menu. Shortcuts are
    // ignored while an input field has focus.
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move |ev: web_sys::KeyboardEvent| {
            let typing = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .is_some_and(|el| {
                    matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT")
                });

            match ev.key().as_str() {
                "b" | "B" if ev.ctrl_key() || ev.meta_key() => {
                    ev.prevent_default();
                    ctx.toggle_sidebar();
                }
                "Escape" => {
                    ctx.mobile_menu_open.set(false);
                }
                digit @ ("1" | "2" | "3" | "4" | "5")
                    if !typing && !ev.ctrl_key() && !ev.meta_key() =>
                {
                    let index = digit.as_bytes()[0] - b'1';
                    ev.prevent_default();
                    navigator.go(Route::ALL[index as usize]);
                }
                _ => {}
            }
        }) as Box<dyn Fn(web_sys::KeyboardEvent)>);

        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        }

        closure.forget();
    }

    // Keep the browser tab title in sync with the current view.
    Effect::new(move || {
        let title = route.get().title();
        crate::utils::dom::set_title(&format!("{} - {}", title, crate::config::APP_NAME));
    });

    let route_memo = Memo::new(move |_| route.get());

    view! { <Layout route=route_memo /> }
}
