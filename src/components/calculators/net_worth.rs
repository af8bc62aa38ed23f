//! Net worth calculator.
//!
//! Sums asset and liability fields, shows the difference with a health
//! tier, and appends a snapshot to the profile history on each calculation.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::calculators::errors::ValidationErrors;
use crate::components::calculators::fields::{bind, FieldSection, FormField};
use crate::components::calculators::results::{HealthBanner, Stat, StatGrid};
use crate::core::input::FieldKind;
use crate::core::networth;
use crate::models::NetWorthForm;
use crate::utils::dom;
use crate::utils::format::format_currency;

stylance::import_crate_style!(css, "src/components/calculators/calculator.module.css");

#[component]
pub fn NetWorth() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let errors = RwSignal::new(Vec::new());

    let currency = |get: fn(&crate::models::Calculators) -> &str,
                    set: fn(&mut crate::models::Calculators, String)| {
        bind(ctx, FieldKind::Currency, get, set)
    };

    let (cash, set_cash) = currency(
        |c| &c.net_worth.assets.cash_checking,
        |c, v| c.net_worth.assets.cash_checking = v,
    );
    let (hisa, set_hisa) = currency(
        |c| &c.net_worth.assets.high_interest_savings,
        |c, v| c.net_worth.assets.high_interest_savings = v,
    );
    let (tfsa, set_tfsa) = currency(
        |c| &c.net_worth.assets.tfsa,
        |c, v| c.net_worth.assets.tfsa = v,
    );
    let (rrsp, set_rrsp) = currency(
        |c| &c.net_worth.assets.rrsp,
        |c, v| c.net_worth.assets.rrsp = v,
    );
    let (fhsa, set_fhsa) = currency(
        |c| &c.net_worth.assets.fhsa,
        |c, v| c.net_worth.assets.fhsa = v,
    );
    let (investments, set_investments) = currency(
        |c| &c.net_worth.assets.investments,
        |c, v| c.net_worth.assets.investments = v,
    );
    let (other_assets, set_other_assets) = currency(
        |c| &c.net_worth.assets.other_assets,
        |c, v| c.net_worth.assets.other_assets = v,
    );

    let (credit_cards, set_credit_cards) = currency(
        |c| &c.net_worth.liabilities.credit_cards,
        |c, v| c.net_worth.liabilities.credit_cards = v,
    );
    let (locs, set_locs) = currency(
        |c| &c.net_worth.liabilities.lines_of_credit,
        |c, v| c.net_worth.liabilities.lines_of_credit = v,
    );
    let (car_loans, set_car_loans) = currency(
        |c| &c.net_worth.liabilities.car_loans,
        |c, v| c.net_worth.liabilities.car_loans = v,
    );
    let (student_loans, set_student_loans) = currency(
        |c| &c.net_worth.liabilities.student_loans,
        |c, v| c.net_worth.liabilities.student_loans = v,
    );
    let (other_debts, set_other_debts) = currency(
        |c| &c.net_worth.liabilities.other_debts,
        |c, v| c.net_worth.liabilities.other_debts = v,
    );

    let on_calculate = move |_| {
        let form = ctx.calculators.with_untracked(|c| c.net_worth.clone());
        let problems = networth::validate(&form);
        if !problems.is_empty() {
            errors.set(problems);
            return;
        }
        errors.set(Vec::new());

        let results = networth::compute(&form);
        let timestamp = dom::now_iso();
        ctx.update_profile(|profile| {
            profile.record_net_worth(
                networth::asset_amounts(&form),
                networth::liability_amounts(&form),
                results.net_worth,
                &timestamp,
            );
        });
        ctx.update_calculators(|c| c.net_worth.results = Some(results));
    };

    let on_reset = move |_| {
        errors.set(Vec::new());
        ctx.update_calculators(|c| c.net_worth = NetWorthForm::default());
    };

    let results = Signal::derive(move || ctx.calculators.with(|c| c.net_worth.results.clone()));

    view! {
        <div class=css::page>
            <ValidationErrors errors=errors />

            <div class=css::form>
                <FieldSection title="Assets">
                    <FormField label="Cash & checking" kind=FieldKind::Currency
                        value=cash on_input=set_cash />
                    <FormField label="High-interest savings" kind=FieldKind::Currency
                        value=hisa on_input=set_hisa />
                    <FormField label="TFSA" kind=FieldKind::Currency
                        value=tfsa on_input=set_tfsa />
                    <FormField label="RRSP" kind=FieldKind::Currency
                        value=rrsp on_input=set_rrsp />
                    <FormField label="FHSA" kind=FieldKind::Currency
                        value=fhsa on_input=set_fhsa />
                    <FormField label="Non-registered investments" kind=FieldKind::Currency
                        value=investments on_input=set_investments />
                    <FormField label="Other assets" kind=FieldKind::Currency
                        value=other_assets on_input=set_other_assets />
                </FieldSection>

                <FieldSection title="Liabilities">
                    <FormField label="Credit cards" kind=FieldKind::Currency
                        value=credit_cards on_input=set_credit_cards />
                    <FormField label="Lines of credit" kind=FieldKind::Currency
                        value=locs on_input=set_locs />
                    <FormField label="Car loans" kind=FieldKind::Currency
                        value=car_loans on_input=set_car_loans />
                    <FormField label="Student loans" kind=FieldKind::Currency
                        value=student_loans on_input=set_student_loans />
                    <FormField label="Other debts" kind=FieldKind::Currency
                        value=other_debts on_input=set_other_debts />
                </FieldSection>

                <div class=css::actions>
                    <button class=css::primaryButton on:click=on_calculate>"Calculate"</button>
                    <button class=css::secondaryButton on:click=on_reset>"Reset"</button>
                </div>
            </div>

            {move || {
                results.get().map(|r| {
                    view! {
                        <div class=css::resultsPanel>
                            <h2 class=css::resultsTitle>"Where you stand"</h2>
                            <HealthBanner
                                tier=r.health
                                message=networth::health_message(r.health)
                            />
                            <StatGrid>
                                <Stat
                                    label="Total assets"
                                    value=format_currency(r.total_assets)
                                />
                                <Stat
                                    label="Total liabilities"
                                    value=format_currency(r.total_liabilities)
                                />
                                <Stat
                                    label="Net worth"
                                    value=format_currency(r.net_worth)
                                    highlight=true
                                />
                            </StatGrid>
                        </div>
                    }
                })
            }}
        </div>
    }
}
