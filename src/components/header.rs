//! Top bar for the home view.

use leptos::prelude::*;

use crate::routes::{View, path_of};

/// Fixed header: brand wordmark on the left, navigation links on the
/// right. Links resolve through the dispatch table.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <a class="header__brand" href=path_of(View::Home)>
                "Pho Bo"
            </a>
            <nav class="header__nav">
                <a class="header__link" href=path_of(View::Home)>
                    "Home"
                </a>
                <a class="header__link" href=path_of(View::Welcome)>
                    "Log Out"
                </a>
            </nav>
        </header>
    }
}
