//! Shared form widgets for the calculator views.
//!
//! Every calculator field is a raw-text input bound straight into the
//! persisted calculator record. Sanitization runs on each keystroke;
//! error/valid styling appears only after the field has been touched.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::core::input::{self, FieldKind};
use crate::models::Calculators;
use crate::utils::format;

stylance::import_crate_style!(css, "src/components/calculators/fields.module.css");

/// Bind a form field to the persisted calculator record.
///
/// Returns the reactive value plus a write callback that sanitizes and
/// persists in one step. Plain fn pointers keep call sites terse.
pub fn bind(
    ctx: AppContext,
    kind: FieldKind,
    get: fn(&Calculators) -> &str,
    set: fn(&mut Calculators, String),
) -> (Signal<String>, Callback<String>) {
    let value = Signal::derive(move || ctx.calculators.with(|c| get(c).to_string()));
    let write = Callback::new(move |raw: String| {
        let sanitized = match kind {
            FieldKind::Currency => input::sanitize_currency(&raw),
            FieldKind::Percentage => input::sanitize_percentage(&raw),
            FieldKind::Integer => input::sanitize_integer(&raw),
        };
        ctx.update_calculators(|c| set(c, sanitized));
    });
    (value, write)
}

/// A single labeled input with kind-appropriate affix and validity styling.
#[component]
pub fn FormField(
    label: &'static str,
    kind: FieldKind,
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(into, optional)] hint: Option<&'static str>,
) -> impl IntoView {
    let touched = RwSignal::new(false);

    // Presentational only: the stored string stays raw so edits and
    // round-trips are lossless. The override is dropped on focus.
    let display_override = RwSignal::new(None::<String>);
    let on_blur = move |_| {
        touched.set(true);
        let raw = value.get_untracked();
        if input::is_blank(&raw) {
            return;
        }
        let formatted = match kind {
            FieldKind::Currency => format::format_number(input::parse_amount(&raw)),
            FieldKind::Percentage => format!("{:.1}", input::parse_amount(&raw)),
            FieldKind::Integer => return,
        };
        display_override.set(Some(formatted));
    };

    let field_class = move || {
        if !touched.get() || value.with(|v| input::is_blank(v)) {
            return css::input.to_string();
        }
        if value.with(|v| input::field_is_valid(kind, v)) {
            format!("{} {}", css::input, css::inputValid)
        } else {
            format!("{} {}", css::input, css::inputError)
        }
    };

    let affix = match kind {
        FieldKind::Currency => Some(("$", css::prefix)),
        FieldKind::Percentage => Some(("%", css::suffix)),
        FieldKind::Integer => None,
    };

    view! {
        <label class=css::field>
            <span class=css::label>{label}</span>
            <span class=css::control>
                {affix
                    .filter(|(_, class)| *class == css::prefix)
                    .map(|(text, class)| view! { <span class=class>{text}</span> })}
                <input
                    type="text"
                    inputmode="decimal"
                    class=field_class
                    placeholder=placeholder
                    prop:value=move || display_override.get().unwrap_or_else(|| value.get())
                    on:input=move |ev| {
                        display_override.set(None);
                        on_input.run(event_target_value(&ev));
                    }
                    on:focus=move |_| display_override.set(None)
                    on:blur=on_blur
                />
                {affix
                    .filter(|(_, class)| *class == css::suffix)
                    .map(|(text, class)| view! { <span class=class>{text}</span> })}
            </span>
            {hint.map(|text| view! { <span class=css::hint>{text}</span> })}
        </label>
    }
}

/// Section wrapper used to group related fields with a heading.
#[component]
pub fn FieldSection(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class=css::section>
            <h3 class=css::sectionTitle>{title}</h3>
            <div class=css::sectionGrid>{children()}</div>
        </section>
    }
}
