//! Dashboard overview.
//!
//! Summarizes the cross-calculator profile (income, savings, goals, latest
//! net worth) and links into each calculator. Shows a getting-started nudge
//! until some data has been recorded.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::router::Navigator;
use crate::models::Route;
use crate::utils::format::format_currency;

stylance::import_crate_style!(css, "src/components/overview/overview.module.css");

struct LaunchCard {
    route: Route,
    icon: icondata::Icon,
    title: &'static str,
    blurb: &'static str,
}

static LAUNCH_CARDS: [LaunchCard; 4] = [
    LaunchCard {
        route: Route::DownPayment,
        icon: ic::DOWN_PAYMENT,
        title: "Down Payment",
        blurb: "Plan how much to save each month for your home purchase.",
    },
    LaunchCard {
        route: Route::NetWorth,
        icon: ic::NET_WORTH,
        title: "Net Worth",
        blurb: "Track assets against liabilities over time.",
    },
    LaunchCard {
        route: Route::CashFlow,
        icon: ic::CASH_FLOW,
        title: "Cash Flow",
        blurb: "See where your monthly income actually goes.",
    },
    LaunchCard {
        route: Route::Mortgage,
        icon: ic::MORTGAGE,
        title: "Mortgage",
        blurb: "Check affordability with standard debt-service ratios.",
    },
];

#[component]
pub fn Overview() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let navigator = use_context::<Navigator>().expect("Navigator must be provided by the router");

    let has_data = Signal::derive(move || ctx.profile.with(|p| p.has_data()));
    let monthly_income =
        Signal::derive(move || ctx.profile.with(|p| p.financial_state.monthly_income));
    let existing_savings =
        Signal::derive(move || ctx.profile.with(|p| p.financial_state.existing_savings));
    let savings_goal = Signal::derive(move || {
        ctx.profile
            .with(|p| p.financial_state.goals.monthly_savings_goal)
    });
    let timeline_months = Signal::derive(move || {
        ctx.profile
            .with(|p| p.financial_state.goals.target_timeline)
    });
    let latest_net_worth = Signal::derive(move || ctx.profile.with(|p| p.latest_net_worth()));

    view! {
        <div class=css::page>
            <Show when=move || !has_data.get()>
                <div class=css::welcome>
                    <span class=css::welcomeIcon><Icon icon=ic::TRENDING /></span>
                    <div>
                        <h2 class=css::welcomeTitle>"Welcome to Hearthplan"</h2>
                        <p class=css::welcomeText>
                            "Run any calculator below and your numbers will show up here. \
                             Everything stays in this browser."
                        </p>
                    </div>
                </div>
            </Show>

            <Show when=move || has_data.get()>
                <div class=css::statRow>
                    <div class=css::card>
                        <span class=css::cardLabel>"Monthly income"</span>
                        <span class=css::cardValue>
                            {move || format_currency(monthly_income.get())}
                        </span>
                    </div>
                    <div class=css::card>
                        <span class=css::cardLabel>"Saved so far"</span>
                        <span class=css::cardValue>
                            {move || format_currency(existing_savings.get())}
                        </span>
                    </div>
                    <div class=css::card>
                        <span class=css::cardLabel>"Monthly savings goal"</span>
                        <span class=css::cardValue>
                            {move || format_currency(savings_goal.get())}
                        </span>
                    </div>
                    <div class=css::card>
                        <span class=css::cardLabel>"Timeline"</span>
                        <span class=css::cardValue>
                            {move || {
                                let months = timeline_months.get();
                                if months > 0.0 {
                                    format!("{months:.0} months")
                                } else {
                                    "—".to_string()
                                }
                            }}
                        </span>
                    </div>
                    <div class=css::card>
                        <span class=css::cardLabel>"Net worth"</span>
                        <span class=css::cardValue>
                            {move || {
                                latest_net_worth
                                    .get()
                                    .map(format_currency)
                                    .unwrap_or_else(|| "—".to_string())
                            }}
                        </span>
                    </div>
                </div>
            </Show>

            <div class=css::launchGrid>
                {LAUNCH_CARDS
                    .iter()
                    .map(|card| {
                        let route = card.route;
                        view! {
                            <button
                                class=css::launchCard
                                on:click=move |_| navigator.go(route)
                            >
                                <span class=css::launchIcon><Icon icon=card.icon /></span>
                                <span class=css::launchTitle>{card.title}</span>
                                <span class=css::launchBlurb>{card.blurb}</span>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
