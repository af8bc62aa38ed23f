//! Top header bar.
//!
//! Shows the current view title plus the theme toggle, the reset-all
//! button, and (on mobile) the menu button.

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{ResolvedTheme, Route};

stylance::import_crate_style!(css, "src/components/layout/header.module.css");

/// Page header with title and global actions.
#[component]
pub fn Header(route: Memo<Route>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let system_prefers_dark = use_media_query("(prefers-color-scheme: dark)");
    let resolved = Signal::derive(move || ctx.theme.get().resolve(system_prefers_dark.get()));
    let theme_title = Signal::derive(move || match resolved.get() {
        ResolvedTheme::Light => "Switch to dark theme",
        ResolvedTheme::Dark => "Switch to light theme",
    });

    let toggle_theme = move |_: leptos::ev::MouseEvent| {
        let dark = system_prefers_dark.get_untracked();
        ctx.update_theme(|theme| theme.toggle(dark));
    };

    let menu_open = ctx.mobile_menu_open;

    view! {
        <header class=css::bar>
            <button
                class=css::menuButton
                title="Open menu"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                {move || {
                    if menu_open.get() {
                        view! { <Icon icon=ic::CLOSE /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::MENU /> }.into_any()
                    }
                }}
            </button>

            <h1 class=css::title>{move || route.get().title()}</h1>

            <div class=css::actions>
                <button
                    class=css::actionButton
                    title="Reset all data"
                    on:click=move |_| ctx.reset_all()
                >
                    <Icon icon=ic::RESET />
                </button>
                <button class=css::actionButton title=theme_title on:click=toggle_theme>
                    {move || match resolved.get() {
                        ResolvedTheme::Light => view! { <Icon icon=ic::MOON /> }.into_any(),
                        ResolvedTheme::Dark => view! { <Icon icon=ic::SUN /> }.into_any(),
                    }}
                </button>
            </div>
        </header>
    }
}
