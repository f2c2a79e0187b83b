//! Standalone login page.

use leptos::prelude::*;

use crate::components::login_panel::LoginPanel;
use crate::pages::welcome::TAGLINE;

/// Login page — the shared login panel centered under the brand mark.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <h1 class="login-page__brand">"Pho Bo"</h1>
            <p class="login-page__tagline">{TAGLINE}</p>
            <div class="login-page__panel">
                <LoginPanel/>
            </div>
        </div>
    }
}
