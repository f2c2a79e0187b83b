//! Vertically scrollable container primitive.

use leptos::prelude::*;

/// A fixed-height region whose content scrolls vertically.
///
/// Structure is a root clip element around a scrolling viewport, so the
/// scrollbar styling stays on the region rather than the page.
#[component]
pub fn ScrollRegion(children: Children) -> impl IntoView {
    view! {
        <div class="scroll-region">
            <div class="scroll-region__viewport">{children()}</div>
        </div>
    }
}
