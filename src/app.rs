//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    home::HomePage, login::LoginPage, not_found::NotFoundPage, welcome::WelcomePage,
};
use crate::routes::{View, segment_of};

/// Root application component.
///
/// Declares one route per entry of the dispatch table in
/// [`crate::routes`] — the segments come from the table itself, so the
/// router cannot drift from it. Pages render independently and share no
/// state; unregistered paths fall through to [`NotFoundPage`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Pho Bo"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment(segment_of(View::Welcome)) view=WelcomePage/>
                <Route path=StaticSegment(segment_of(View::Login)) view=LoginPage/>
                <Route path=StaticSegment(segment_of(View::Home)) view=HomePage/>
            </Routes>
        </Router>
    }
}
