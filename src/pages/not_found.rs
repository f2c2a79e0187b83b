//! Fallback view for unregistered paths.

use leptos::prelude::*;

use crate::routes::{View, path_of};

/// Not-found page — rendered by the router fallback for any path outside
/// the dispatch table, with a way back to the landing page.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1 class="not-found-page__title">"Page not found."</h1>
            <p class="not-found-page__hint">
                "The address you followed does not match any Pho Bo view."
            </p>
            <a class="btn btn--primary" href=path_of(View::Welcome)>
                "Back to Pho Bo"
            </a>
        </div>
    }
}
