//! Path → view dispatch table.
//!
//! DESIGN
//! ======
//! Routing is data, not code: the table below is the single source of
//! truth for which paths exist, and `app.rs` declares the router from the
//! same constants. Matching is testable here without mounting any view.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Identifies one of the application's top-level views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Welcome,
    Login,
    Home,
}

/// The full dispatch table. Paths are unique; no catch-all entry exists —
/// unmatched paths fall through to the router's not-found view.
pub const ROUTES: [(&str, View); 3] = [
    ("/", View::Welcome),
    ("/login", View::Login),
    ("/home", View::Home),
];

/// Look up the view registered for `path`.
///
/// Matching is exact apart from a single trailing slash, which browsers
/// and link hrefs use interchangeably (`/home` vs `/home/`).
pub fn resolve(path: &str) -> Option<View> {
    let normalized = match path.strip_suffix('/') {
        Some(rest) if !rest.is_empty() => rest,
        _ => path,
    };

    ROUTES
        .iter()
        .find(|(route_path, _)| *route_path == normalized)
        .map(|&(_, view)| view)
}

/// The registered path for `view` — the inverse of [`resolve`].
///
/// Links across the app go through this accessor so the table stays the
/// only place a path literal is spelled.
pub fn path_of(view: View) -> &'static str {
    match view {
        View::Welcome => ROUTES[0].0,
        View::Login => ROUTES[1].0,
        View::Home => ROUTES[2].0,
    }
}

/// The router segment for `view`: its registered path without the leading
/// slash (the root view's segment is empty). `app.rs` builds its route
/// declarations from this, so the table and the router cannot drift.
pub fn segment_of(view: View) -> &'static str {
    path_of(view).trim_start_matches('/')
}
