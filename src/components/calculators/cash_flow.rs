//! Monthly cash flow calculator.
//!
//! Income minus fixed expenses, variable expenses, and planned savings.
//! Calculating appends a snapshot to the profile history and syncs the
//! planned-savings total into the shared values.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::calculators::errors::ValidationErrors;
use crate::components::calculators::fields::{bind, FieldSection, FormField};
use crate::components::calculators::results::{HealthBanner, Stat, StatGrid};
use crate::core::input::{self, FieldKind};
use crate::core::{cashflow, sync_shared};
use crate::models::CashFlowForm;
use crate::utils::dom;
use crate::utils::format::format_currency;

stylance::import_crate_style!(css, "src/components/calculators/calculator.module.css");

#[component]
pub fn CashFlow() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let errors = RwSignal::new(Vec::new());

    let currency = |get: fn(&crate::models::Calculators) -> &str,
                    set: fn(&mut crate::models::Calculators, String)| {
        bind(ctx, FieldKind::Currency, get, set)
    };

    let (income, set_income) = currency(
        |c| &c.cash_flow.income.monthly_income,
        |c, v| c.cash_flow.income.monthly_income = v,
    );

    let (rent, set_rent) = currency(
        |c| &c.cash_flow.fixed_expenses.rent_mortgage,
        |c, v| c.cash_flow.fixed_expenses.rent_mortgage = v,
    );
    let (utilities, set_utilities) = currency(
        |c| &c.cash_flow.fixed_expenses.utilities,
        |c, v| c.cash_flow.fixed_expenses.utilities = v,
    );
    let (internet, set_internet) = currency(
        |c| &c.cash_flow.fixed_expenses.internet,
        |c, v| c.cash_flow.fixed_expenses.internet = v,
    );
    let (phone, set_phone) = currency(
        |c| &c.cash_flow.fixed_expenses.phone,
        |c, v| c.cash_flow.fixed_expenses.phone = v,
    );
    let (insurance, set_insurance) = currency(
        |c| &c.cash_flow.fixed_expenses.insurance,
        |c, v| c.cash_flow.fixed_expenses.insurance = v,
    );
    let (transit, set_transit) = currency(
        |c| &c.cash_flow.fixed_expenses.transit_car,
        |c, v| c.cash_flow.fixed_expenses.transit_car = v,
    );
    let (subscriptions, set_subscriptions) = currency(
        |c| &c.cash_flow.fixed_expenses.subscriptions,
        |c, v| c.cash_flow.fixed_expenses.subscriptions = v,
    );
    let (debt_minimums, set_debt_minimums) = currency(
        |c| &c.cash_flow.fixed_expenses.minimum_debt_payments,
        |c, v| c.cash_flow.fixed_expenses.minimum_debt_payments = v,
    );

    let (groceries, set_groceries) = currency(
        |c| &c.cash_flow.variable_expenses.groceries,
        |c, v| c.cash_flow.variable_expenses.groceries = v,
    );
    let (dining, set_dining) = currency(
        |c| &c.cash_flow.variable_expenses.dining,
        |c, v| c.cash_flow.variable_expenses.dining = v,
    );
    let (gas, set_gas) = currency(
        |c| &c.cash_flow.variable_expenses.gas,
        |c, v| c.cash_flow.variable_expenses.gas = v,
    );
    let (shopping, set_shopping) = currency(
        |c| &c.cash_flow.variable_expenses.shopping,
        |c, v| c.cash_flow.variable_expenses.shopping = v,
    );
    let (personal, set_personal) = currency(
        |c| &c.cash_flow.variable_expenses.personal,
        |c, v| c.cash_flow.variable_expenses.personal = v,
    );
    let (travel, set_travel) = currency(
        |c| &c.cash_flow.variable_expenses.travel,
        |c, v| c.cash_flow.variable_expenses.travel = v,
    );
    let (misc, set_misc) = currency(
        |c| &c.cash_flow.variable_expenses.miscellaneous,
        |c, v| c.cash_flow.variable_expenses.miscellaneous = v,
    );

    let (emergency, set_emergency) = currency(
        |c| &c.cash_flow.savings.emergency_fund,
        |c, v| c.cash_flow.savings.emergency_fund = v,
    );
    let (home_fund, set_home_fund) = currency(
        |c| &c.cash_flow.savings.home_fund,
        |c, v| c.cash_flow.savings.home_fund = v,
    );
    let (rrsp_fhsa, set_rrsp_fhsa) = currency(
        |c| &c.cash_flow.savings.rrsp_fhsa,
        |c, v| c.cash_flow.savings.rrsp_fhsa = v,
    );

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
        let form = ctx.calculators.with_untracked(|c| c.cash_flow.clone());
        let problems = cashflow::validate(&form);
        if !problems.is_empty() {
            errors.set(problems);
            return;
        }
        errors.set(Vec::new());

        let results = cashflow::compute(&form);
        let timestamp = dom::now_iso();
        ctx.update_profile(|profile| {
            profile.record_cash_flow(
                input::parse_amount(&form.income.monthly_income),
                results.total_fixed_expenses,
                results.total_variable_expenses,
                results.total_savings,
                results.cash_surplus,
                &timestamp,
            );
        });
        ctx.update_calculators(|c| {
            c.cash_flow.results = Some(results);
            sync_shared(c);
        });
    };

    let on_reset = move |_| {
        errors.set(Vec::new());
        ctx.update_calculators(|c| c.cash_flow = CashFlowForm::default());
    };

    let results = Signal::derive(move || ctx.calculators.with(|c| c.cash_flow.results.clone()));

    view! {
        <div class=css::page>
            <ValidationErrors errors=errors />

            <div class=css::form>
                <FieldSection title="Income">
                    <FormField label="Monthly take-home income" kind=FieldKind::Currency
                        value=income on_input=set_income placeholder="5,000" />
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

                <FieldSection title="Fixed expenses">
                    <FormField label="Rent / mortgage" kind=FieldKind::Currency
                        value=rent on_input=set_rent />
                    <FormField label="Utilities" kind=FieldKind::Currency
                        value=utilities on_input=set_utilities />
                    <FormField label="Internet" kind=FieldKind::Currency
                        value=internet on_input=set_internet />
                    <FormField label="Phone" kind=FieldKind::Currency
                        value=phone on_input=set_phone />
                    <FormField label="Insurance" kind=FieldKind::Currency
                        value=insurance on_input=set_insurance />
                    <FormField label="Transit / car" kind=FieldKind::Currency
                        value=transit on_input=set_transit />
                    <FormField label="Subscriptions" kind=FieldKind::Currency
                        value=subscriptions on_input=set_subscriptions />
                    <FormField label="Minimum debt payments" kind=FieldKind::Currency
                        value=debt_minimums on_input=set_debt_minimums />
                </FieldSection>

                <FieldSection title="Variable expenses">
                    <FormField label="Groceries" kind=FieldKind::Currency
                        value=groceries on_input=set_groceries />
                    <FormField label="Dining out" kind=FieldKind::Currency
                        value=dining on_input=set_dining />
                    <FormField label="Gas" kind=FieldKind::Currency
                        value=gas on_input=set_gas />
                    <FormField label="Shopping" kind=FieldKind::Currency
                        value=shopping on_input=set_shopping />
                    <FormField label="Personal care" kind=FieldKind::Currency
                        value=personal on_input=set_personal />
                    <FormField label="Travel" kind=FieldKind::Currency
                        value=travel on_input=set_travel />
                    <FormField label="Miscellaneous" kind=FieldKind::Currency
                        value=misc on_input=set_misc />
                </FieldSection>

                <FieldSection title="Planned savings">
                    <FormField label="Emergency fund" kind=FieldKind::Currency
                        value=emergency on_input=set_emergency />
                    <FormField label="Home fund" kind=FieldKind::Currency
                        value=home_fund on_input=set_home_fund
                        hint="Synced from the down payment calculator" />
                    <FormField label="RRSP / FHSA" kind=FieldKind::Currency
                        value=rrsp_fhsa on_input=set_rrsp_fhsa />
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
                            <h2 class=css::resultsTitle>"Monthly cash flow"</h2>
                            <HealthBanner
                                tier=r.health
                                message=cashflow::health_message(r.health)
                            />
                            <StatGrid>
                                <Stat
                                    label="Income"
                                    value=format_currency(r.total_income)
                                />
                                <Stat
                                    label="Fixed expenses"
                                    value=format_currency(r.total_fixed_expenses)
                                />
                                <Stat
                                    label="Variable expenses"
                                    value=format_currency(r.total_variable_expenses)
                                />
                                <Stat
                                    label="Planned savings"
                                    value=format_currency(r.total_savings)
                                />
                                <Stat
                                    label="Cash surplus"
                                    value=format_currency(r.cash_surplus)
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
