//! Shared login form panel.
//!
//! Rendered in two places: the aside of the welcome page and the body of
//! the standalone login page. Presentational only — no validation and no
//! submit effect exist in the shell.

use leptos::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::card::{Card, CardContent};
use crate::components::input::Input;

/// Login card: email/phone and password inputs, the primary submit
/// button, a secondary create-account action, and a forgot-password link.
#[component]
pub fn LoginPanel() -> impl IntoView {
    view! {
        <Card>
            <CardContent>
                <div class="login-panel">
                    <h2 class="login-panel__title">"Log In"</h2>
                    <Input placeholder="Email address or phone"/>
                    <Input placeholder="Password" input_type="password"/>
                    <Button variant=ButtonVariant::Default>"Log In"</Button>
                    <div class="login-panel__secondary">
                        <Button variant=ButtonVariant::Outline>"Create Account"</Button>
                    </div>
                    <div class="login-panel__forgot">
                        <a href="#">"Forgot password?"</a>
                    </div>
                </div>
            </CardContent>
        </Card>
    }
}
