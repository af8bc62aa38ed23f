//! Mortgage affordability calculator.
//!
//! Applies the standard Canadian debt-service tests: gross debt service
//! (housing costs / gross income, limit 32%) and total debt service
//! (housing + debt payments / gross income, limit 40%).

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::calculators::errors::ValidationErrors;
use crate::components::calculators::fields::{bind, FieldSection, FormField};
use crate::components::calculators::results::{HealthBanner, Stat, StatGrid};
use crate::config::debt_service;
use crate::core::input::FieldKind;
use crate::core::mortgage;
use crate::models::{HealthTier, MortgageForm};
use crate::utils::format::{format_currency, format_percentage};

stylance::import_crate_style!(css, "src/components/calculators/calculator.module.css");

#[component]
pub fn Mortgage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let errors = RwSignal::new(Vec::new());

    let currency = |get: fn(&crate::models::Calculators) -> &str,
                    set: fn(&mut crate::models::Calculators, String)| {
        bind(ctx, FieldKind::Currency, get, set)
    };

    let (annual_income, set_annual_income) = currency(
        |c| &c.mortgage.annual_income,
        |c, v| c.mortgage.annual_income = v,
    );
    let (down_payment, set_down_payment) = currency(
        |c| &c.mortgage.down_payment,
        |c, v| c.mortgage.down_payment = v,
    );
    let (credit_cards, set_credit_cards) = currency(
        |c| &c.mortgage.credit_card_payments,
        |c, v| c.mortgage.credit_card_payments = v,
    );
    let (car_payments, set_car_payments) = currency(
        |c| &c.mortgage.car_payments,
        |c, v| c.mortgage.car_payments = v,
    );
    let (other_debts, set_other_debts) = currency(
        |c| &c.mortgage.other_debts,
        |c, v| c.mortgage.other_debts = v,
    );
    let (property_taxes, set_property_taxes) = currency(
        |c| &c.mortgage.property_taxes,
        |c, v| c.mortgage.property_taxes = v,
    );
    let (heating, set_heating) = currency(
        |c| &c.mortgage.heating_costs,
        |c, v| c.mortgage.heating_costs = v,
    );
    let (condo_fees, set_condo_fees) = currency(
        |c| &c.mortgage.condo_fees,
        |c, v| c.mortgage.condo_fees = v,
    );
    let (other_housing, set_other_housing) = currency(
        |c| &c.mortgage.other_housing_costs,
        |c, v| c.mortgage.other_housing_costs = v,
    );

    let on_calculate = move |_| {
        let form = ctx.calculators.with_untracked(|c| c.mortgage.clone());
        let problems = mortgage::validate(&form);
        if !problems.is_empty() {
            errors.set(problems);
            return;
        }
        errors.set(Vec::new());

        let results = mortgage::compute(&form);
        ctx.update_calculators(|c| c.mortgage.results = Some(results));
    };

    let on_reset = move |_| {
        errors.set(Vec::new());
        ctx.update_calculators(|c| c.mortgage = MortgageForm::default());
    };

    let results = Signal::derive(move || ctx.calculators.with(|c| c.mortgage.results.clone()));

    view! {
        <div class=css::page>
            <ValidationErrors errors=errors />

            <div class=css::form>
                <FieldSection title="Income & down payment">
                    <FormField label="Gross annual income" kind=FieldKind::Currency
                        value=annual_income on_input=set_annual_income placeholder="96,000" />
                    <FormField label="Down payment saved" kind=FieldKind::Currency
                        value=down_payment on_input=set_down_payment />
                </FieldSection>

                <FieldSection title="Monthly debt payments">
                    <FormField label="Credit cards" kind=FieldKind::Currency
                        value=credit_cards on_input=set_credit_cards />
                    <FormField label="Car payments" kind=FieldKind::Currency
                        value=car_payments on_input=set_car_payments />
                    <FormField label="Other debts" kind=FieldKind::Currency
                        value=other_debts on_input=set_other_debts />
                </FieldSection>

                <FieldSection title="Housing costs">
                    <FormField label="Property taxes (annual)" kind=FieldKind::Currency
                        value=property_taxes on_input=set_property_taxes />
                    <FormField label="Heating (monthly)" kind=FieldKind::Currency
                        value=heating on_input=set_heating />
                    <FormField label="Condo fees (monthly)" kind=FieldKind::Currency
                        value=condo_fees on_input=set_condo_fees
                        hint="Lenders count half of condo fees" />
                    <FormField label="Other housing costs (monthly)" kind=FieldKind::Currency
                        value=other_housing on_input=set_other_housing />
                </FieldSection>

                <div class=css::actions>
                    <button class=css::primaryButton on:click=on_calculate>"Calculate"</button>
                    <button class=css::secondaryButton on:click=on_reset>"Reset"</button>
                </div>
            </div>

            {move || {
                results.get().map(|r| {
                    let (tier, message) = if r.within_limits {
                        (
                            HealthTier::Excellent,
                            "Within lending guidelines - your debt service ratios pass both tests.",
                        )
                    } else {
                        (
                            HealthTier::Attention,
                            "Over the guideline limits - lenders may not approve at this level.",
                        )
                    };
                    view! {
                        <div class=css::resultsPanel>
                            <h2 class=css::resultsTitle>"Debt service check"</h2>
                            <HealthBanner tier=tier message=message />
                            <StatGrid>
                                <Stat
                                    label="Gross monthly income"
                                    value=format_currency(r.monthly_income)
                                />
                                <Stat
                                    label="Monthly housing costs"
                                    value=format_currency(r.monthly_housing_costs)
                                />
                                <Stat
                                    label="Monthly debt payments"
                                    value=format_currency(r.monthly_debt_payments)
                                />
                                <Stat
                                    label="GDS ratio"
                                    value=format!(
                                        "{} / {}",
                                        format_percentage(r.gds_pct),
                                        format_percentage(debt_service::GDS_LIMIT_PCT),
                                    )
                                />
                                <Stat
                                    label="TDS ratio"
                                    value=format!(
                                        "{} / {}",
                                        format_percentage(r.tds_pct),
                                        format_percentage(debt_service::TDS_LIMIT_PCT),
                                    )
                                />
                                <Stat
                                    label="Room for housing"
                                    value=format_currency(r.housing_room)
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
