//! Button primitive with a closed set of visual variants.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::prelude::*;

/// Visual styles a [`Button`] can take. The set is closed: pages pick a
/// variant, never a raw class string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled primary action.
    #[default]
    Default,
    /// Bordered secondary action.
    Outline,
    /// Borderless inline action (feed action rows).
    Ghost,
}

impl ButtonVariant {
    /// CSS classes for this variant.
    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Default => "btn btn--primary",
            ButtonVariant::Outline => "btn btn--outline",
            ButtonVariant::Ghost => "btn btn--ghost",
        }
    }
}

/// A styled button. Purely presentational: no click handler is attached
/// by the primitive itself.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    children: Children,
) -> impl IntoView {
    view! {
        <button class=variant.class() type="button">
            {children()}
        </button>
    }
}
