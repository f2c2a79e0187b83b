//! Card surface primitives.

use leptos::prelude::*;

/// A bordered, elevated surface wrapping arbitrary content.
#[component]
pub fn Card(children: Children) -> impl IntoView {
    view! { <div class="card">{children()}</div> }
}

/// Padded inner region of a [`Card`].
#[component]
pub fn CardContent(children: Children) -> impl IntoView {
    view! { <div class="card__content">{children()}</div> }
}
