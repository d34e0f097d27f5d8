//! Labelled form inputs bound to console signals

use leptos::prelude::*;

#[component]
pub fn TextField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="form-label">{label}</label>
            <input class="input" type="text" placeholder=placeholder bind:value=value/>
        </div>
    }
}

/// Whole-number input. Kept as text so large i128 amounts survive editing.
#[component]
pub fn NumberField(label: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="form-label">{label}</label>
            <input class="input" type="text" inputmode="numeric" bind:value=value/>
        </div>
    }
}
