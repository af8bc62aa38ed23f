//! Sidebar navigation rail.
//!
//! ## Responsive behavior
//!
//! | Breakpoint | Display |
//! |------------|---------|
//! | Desktop (> 768px) | Fixed rail, collapsible to icon-only width |
//! | Mobile (< 768px) | Hidden; slides over the content when the menu opens |

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::router::Navigator;
use crate::config;
use crate::models::Route;

stylance::import_crate_style!(css, "src/components/layout/sidebar.module.css");

fn route_icon(route: Route) -> icondata::Icon {
    match route {
        Route::Overview => ic::DASHBOARD,
        Route::DownPayment => ic::DOWN_PAYMENT,
        Route::NetWorth => ic::NET_WORTH,
        Route::CashFlow => ic::CASH_FLOW,
        Route::Mortgage => ic::MORTGAGE,
    }
}

fn route_label(route: Route) -> &'static str {
    match route {
        Route::Overview => "Overview",
        Route::DownPayment => "Down Payment",
        Route::NetWorth => "Net Worth",
        Route::CashFlow => "Cash Flow",
        Route::Mortgage => "Mortgage",
    }
}

/// Navigation sidebar listing every view in keyboard-shortcut order.
#[component]
pub fn Sidebar(route: Memo<Route>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let navigator = use_context::<Navigator>().expect("Navigator must be provided by the router");

    let collapsed = Signal::derive(move || ctx.ui.with(|ui| ui.sidebar_collapsed));
    let menu_open = ctx.mobile_menu_open;

    let rail_class = move || {
        let mut class = css::rail.to_string();
        if collapsed.get() {
            class.push(' ');
            class.push_str(css::railCollapsed);
        }
        if menu_open.get() {
            class.push(' ');
            class.push_str(css::railOpen);
        }
        class
    };

    view! {
        <nav class=rail_class>
            <div class=css::brand>
                <span class=css::brandIcon><Icon icon=ic::SAVINGS /></span>
                <Show when=move || !collapsed.get()>
                    <span class=css::brandName>{config::APP_NAME}</span>
                </Show>
            </div>

            <ul class=css::navList>
                {Route::ALL
                    .into_iter()
                    .map(|target| {
                        let active = move || route.get() == target;
                        let link_class = move || {
                            if active() {
                                format!("{} {}", css::navLink, css::navLinkActive)
                            } else {
                                css::navLink.to_string()
                            }
                        };
                        view! {
                            <li>
                                <button
                                    class=link_class
                                    title=route_label(target)
                                    on:click=move |_| navigator.go(target)
                                >
                                    <span class=css::navIcon>
                                        <Icon icon=route_icon(target) />
                                    </span>
                                    <Show when=move || !collapsed.get()>
                                        <span class=css::navLabel>{route_label(target)}</span>
                                    </Show>
                                </button>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>

            <button
                class=css::collapseButton
                title=move || if collapsed.get() { "Expand sidebar" } else { "Collapse sidebar" }
                on:click=move |_| ctx.toggle_sidebar()
            >
                {move || {
                    if collapsed.get() {
                        view! { <Icon icon=ic::CHEVRON_RIGHT /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::CHEVRON_LEFT /> }.into_any()
                    }
                }}
            </button>
        </nav>
    }
}
