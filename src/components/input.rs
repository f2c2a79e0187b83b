//! Text input primitive.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use leptos::prelude::*;

/// The `type` attribute actually rendered: an explicit override, or
/// `text` when none is given.
pub fn effective_type(input_type: Option<&'static str>) -> &'static str {
    input_type.unwrap_or("text")
}

/// A single-line text input. Presentational only: the shell attaches no
/// input or change handlers.
#[component]
pub fn Input(
    placeholder: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
) -> impl IntoView {
    view! {
        <input
            class="input"
            type=effective_type(input_type)
            placeholder=placeholder
        />
    }
}
