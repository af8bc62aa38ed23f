//! Validation error list shown above calculator results.

use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/calculators/errors.module.css");

/// Renders blocking validation messages, or nothing when the form is valid.
#[component]
pub fn ValidationErrors(errors: RwSignal<Vec<String>>) -> impl IntoView {
    view! {
        <Show when=move || errors.with(|e| !e.is_empty())>
            <div class=css::panel role="alert">
                <ul class=css::list>
                    {move || {
                        errors
                            .get()
                            .into_iter()
                            .map(|message| view! { <li>{message}</li> })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </div>
        </Show>
    }
}
