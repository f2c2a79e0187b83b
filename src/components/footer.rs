//! Site footer with fixed contact text.

use leptos::prelude::*;

/// Footer: contact block and rights line. All text is fixed.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__contact">
                <h3 class="footer__heading">"Contact Us"</h3>
                <ul class="footer__list">
                    <li>"Email: support@phobo.social"</li>
                    <li>"Phone: (555) 123-4567"</li>
                    <li>"Hours: Mon-Fri 9:00 AM - 5:00 PM"</li>
                </ul>
            </div>
            <div class="footer__rights">
                <p>"\u{a9} 2026 Pho Bo System. All rights reserved."</p>
            </div>
        </footer>
    }
}
