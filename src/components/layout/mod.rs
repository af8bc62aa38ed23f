//! Page shell: sidebar navigation, top header, and the routed page body.
//!
//! Components:
//! - [`Layout`] - Outer grid holding sidebar, header, and content
//! - [`Sidebar`] - Navigation rail with collapse toggle
//! - [`Header`] - Page title, theme toggle, and mobile menu button

mod header;
mod sidebar;

pub use header::Header;
pub use sidebar::Sidebar;

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::calculators::{CashFlow, DownPayment, Mortgage, NetWorth};
use crate::components::overview::Overview;
use crate::models::Route;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

/// Outer application shell.
///
/// The shell itself never re-renders on navigation; only the page body
/// swaps when the route changes.
#[component]
pub fn Layout(route: Memo<Route>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let collapsed = Signal::derive(move || ctx.ui.with(|ui| ui.sidebar_collapsed));
    let shell_class = move || {
        if collapsed.get() {
            format!("{} {}", css::shell, css::shellCollapsed)
        } else {
            css::shell.to_string()
        }
    };

    // Backdrop behind the mobile slide-over menu
    let menu_open = ctx.mobile_menu_open;

    view! {
        <div class=shell_class>
            <Sidebar route=route />
            <Show when=move || menu_open.get()>
                <div class=css::backdrop on:click=move |_| menu_open.set(false) />
            </Show>
            <div class=css::main>
                <Header route=route />
                <main class=css::content>
                    {move || match route.get() {
                        Route::Overview => view! { <Overview /> }.into_any(),
                        Route::DownPayment => view! { <DownPayment /> }.into_any(),
                        Route::NetWorth => view! { <NetWorth /> }.into_any(),
                        Route::CashFlow => view! { <CashFlow /> }.into_any(),
                        Route::Mortgage => view! { <Mortgage /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}
