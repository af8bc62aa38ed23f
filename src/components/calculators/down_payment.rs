//! Down payment savings calculator.
//!
//! Computes the savings goal for a home purchase (down payment + closing
//! costs − existing savings) and the monthly amount needed to hit it within
//! the chosen timeline. Calculating also records income and goals into the
//! cross-calculator profile and syncs shared values.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::calculators::errors::ValidationErrors;
use crate::components::calculators::fields::{bind, FieldSection, FormField};
use crate::components::calculators::results::{ProgressBar, Stat, StatGrid};
use crate::core::input::{self, FieldKind};
use crate::core::{downpayment, sync_shared};
use crate::models::{DownPaymentForm, DownPaymentMode};
use crate::utils::dom;
use crate::utils::format::{format_currency, format_percentage};

stylance::import_crate_style!(css, "src/components/calculators/calculator.module.css");

#[component]
pub fn DownPayment() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let errors = RwSignal::new(Vec::new());

    let (price, set_price) = bind(
        ctx,
        FieldKind::Currency,
        |c| &c.down_payment.property_price,
        |c, v| c.down_payment.property_price = v,
    );
    let (amount, set_amount) = bind(
        ctx,
        FieldKind::Currency,
        |c| &c.down_payment.down_payment,
        |c, v| c.down_payment.down_payment = v,
    );
    let (amount_pct, set_amount_pct) = bind(
        ctx,
        FieldKind::Percentage,
        |c| &c.down_payment.down_payment,
        |c, v| c.down_payment.down_payment = v,
    );
    let (closing, set_closing) = bind(
        ctx,
        FieldKind::Percentage,
        |c| &c.down_payment.closing_costs,
        |c, v| c.down_payment.closing_costs = v,
    );
    let (savings, set_savings) = bind(
        ctx,
        FieldKind::Currency,
        |c| &c.down_payment.existing_savings,
        |c, v| c.down_payment.existing_savings = v,
    );
    let (timeline, set_timeline) = bind(
        ctx,
        FieldKind::Integer,
        |c| &c.down_payment.timeline,
        |c, v| c.down_payment.timeline = v,
    );
    let (income, set_income) = bind(
        ctx,
        FieldKind::Currency,
        |c| &c.down_payment.monthly_income,
        |c, v| c.down_payment.monthly_income = v,
    );

    let mode = Signal::derive(move || ctx.calculators.with(|c| c.down_payment.down_payment_mode));
    let set_mode = move |next: DownPaymentMode| {
        // Dollar amounts and percentages are not interchangeable text, so
        // switching modes clears the field.
        ctx.update_calculators(|c| {
            if c.down_payment.down_payment_mode != next {
                c.down_payment.down_payment_mode = next;
                c.down_payment.down_payment = String::new();
            }
        });
    };
    let mode_class = move |this: DownPaymentMode| {
        if mode.get() == this {
            format!("{} {}", css::modeButton, css::modeButtonActive)
        } else {
            css::modeButton.to_string()
        }
    };

    let profile_income = Signal::derive(move || ctx.profile.with(|p| p.recorded_income()));
    let show_prefill = Signal::derive(move || {
        profile_income.get().is_some() && income.with(|v| input::is_blank(v))
    });
    let prefill_income = move |_| {
        if let Some(amount) = profile_income.get_untracked() {
            set_income.run(format!("{amount:.0}"));
        }
    };

    let on_calculate = move |_| {
        let form = ctx.calculators.with_untracked(|c| c.down_payment.clone());
        let problems = downpayment::validate(&form);
        if !problems.is_empty() {
            errors.set(problems);
            return;
        }
        errors.set(Vec::new());

        let results = downpayment::compute(&form);
        let timestamp = dom::now_iso();
        ctx.update_profile(|profile| {
            profile.record_down_payment(
                input::parse_amount(&form.monthly_income),
                input::parse_amount(&form.existing_savings),
                results.down_payment,
                results.monthly_target,
                f64::from(input::parse_months(&form.timeline)),
                &timestamp,
            );
        });
        ctx.update_calculators(|c| {
            c.down_payment.results = Some(results);
            sync_shared(c);
        });
    };

    let on_reset = move |_| {
        errors.set(Vec::new());
        ctx.update_calculators(|c| c.down_payment = DownPaymentForm::default());
    };

    let results = Signal::derive(move || ctx.calculators.with(|c| c.down_payment.results.clone()));

    view! {
        <div class=css::page>
            <ValidationErrors errors=errors />

            <div class=css::form>
                <FieldSection title="Purchase">
                    <FormField
                        label="Property price"
                        kind=FieldKind::Currency
                        value=price
                        on_input=set_price
                        placeholder="500,000"
                    />
                    {move || match mode.get() {
                        DownPaymentMode::Dollar => view! {
                            <FormField
                                label="Down payment"
                                kind=FieldKind::Currency
                                value=amount
                                on_input=set_amount
                                placeholder="100,000"
                            />
                        }
                        .into_any(),
                        DownPaymentMode::Percentage => view! {
                            <FormField
                                label="Down payment"
                                kind=FieldKind::Percentage
                                value=amount_pct
                                on_input=set_amount_pct
                                placeholder="20"
                            />
                        }
                        .into_any(),
                    }}
                    <FormField
                        label="Closing costs"
                        kind=FieldKind::Percentage
                        value=closing
                        on_input=set_closing
                        hint="Legal fees, land transfer tax, inspection"
                    />
                </FieldSection>

                <div class=css::modeToggle>
                    <button
                        class=move || mode_class(DownPaymentMode::Percentage)
                        on:click=move |_| set_mode(DownPaymentMode::Percentage)
                    >
                        "Percentage"
                    </button>
                    <button
                        class=move || mode_class(DownPaymentMode::Dollar)
                        on:click=move |_| set_mode(DownPaymentMode::Dollar)
                    >
                        "Dollar amount"
                    </button>
                </div>

                <FieldSection title="Savings plan">
                    <FormField
                        label="Existing savings"
                        kind=FieldKind::Currency
                        value=savings
                        on_input=set_savings
                        placeholder="25,000"
                    />
                    <FormField
                        label="Timeline (months)"
                        kind=FieldKind::Integer
                        value=timeline
                        on_input=set_timeline
                        placeholder="24"
                    />
                    <FormField
                        label="Monthly take-home income"
                        kind=FieldKind::Currency
                        value=income
                        on_input=set_income
                        placeholder="5,000"
                        hint="Optional - used for the savings-rate check"
                    />
                    <Show when=move || show_prefill.get()>
                        <button class=css::prefillButton on:click=prefill_income>
                            {move || {
                                profile_income
                                    .get()
                                    .map(|v| format!("Use my profile ({}/mo)", format_currency(v)))
                                    .unwrap_or_default()
                            }}
                        </button>
                    </Show>
                </FieldSection>

                <div class=css::actions>
                    <button class=css::primaryButton on:click=on_calculate>"Calculate"</button>
                    <button class=css::secondaryButton on:click=on_reset>"Reset"</button>
                </div>
            </div>

            {move || {
                results.get().map(|r| {
                    let savings_rate = r.savings_rate;
                    view! {
                        <div class=css::resultsPanel>
                            <h2 class=css::resultsTitle>"Your savings plan"</h2>
                            <StatGrid>
                                <Stat
                                    label="Down payment"
                                    value=format!(
                                        "{} ({})",
                                        format_currency(r.down_payment),
                                        format_percentage(r.down_payment_pct),
                                    )
                                />
                                <Stat
                                    label="Closing costs"
                                    value=format_currency(r.closing_costs)
                                />
                                <Stat
                                    label="Still to save"
                                    value=format_currency(r.total_needed)
                                />
                                <Stat
                                    label="Monthly target"
                                    value=format_currency(r.monthly_target)
                                    highlight=true
                                />
                            </StatGrid>
                            <Show when=move || { savings_rate > 0.0 }>
                                <StatGrid>
                                    <Stat
                                        label="Share of monthly income"
                                        value=format_percentage(savings_rate)
                                    />
                                </StatGrid>
                            </Show>
                            <ProgressBar label="Progress toward goal" pct=r.progress_pct />
                        </div>
                    }
                })
            }}
        </div>
    }
}
