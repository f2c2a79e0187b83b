use super::*;

// =============================================================
// Dispatch table invariants
// =============================================================

#[test]
fn route_paths_are_unique() {
    for (i, (a, _)) in ROUTES.iter().enumerate() {
        for (b, _) in &ROUTES[i + 1..] {
            assert_ne!(a, b, "duplicate path in dispatch table");
        }
    }
}

#[test]
fn every_view_is_registered_exactly_once() {
    for view in [View::Welcome, View::Login, View::Home] {
        let count = ROUTES.iter().filter(|(_, v)| *v == view).count();
        assert_eq!(count, 1, "{view:?} registered {count} times");
    }
}

#[test]
fn path_of_round_trips_through_resolve() {
    for (_, view) in ROUTES {
        assert_eq!(resolve(path_of(view)), Some(view));
    }
}

#[test]
fn segment_of_strips_the_leading_slash() {
    assert_eq!(segment_of(View::Welcome), "");
    assert_eq!(segment_of(View::Login), "login");
    assert_eq!(segment_of(View::Home), "home");
}

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_maps_root_to_welcome() {
    assert_eq!(resolve("/"), Some(View::Welcome));
}

#[test]
fn resolve_maps_login_path_to_login() {
    assert_eq!(resolve("/login"), Some(View::Login));
}

#[test]
fn resolve_maps_home_path_to_home() {
    assert_eq!(resolve("/home"), Some(View::Home));
}

#[test]
fn resolve_is_deterministic() {
    for (path, _) in ROUTES {
        assert_eq!(resolve(path), resolve(path));
    }
}

#[test]
fn resolve_accepts_a_trailing_slash() {
    assert_eq!(resolve("/home/"), Some(View::Home));
    assert_eq!(resolve("/login/"), Some(View::Login));
}

#[test]
fn resolve_rejects_unregistered_paths() {
    assert_eq!(resolve("/unknown"), None);
    assert_eq!(resolve("/homepage"), None);
    assert_eq!(resolve(""), None);
}

#[test]
fn resolve_does_not_match_prefixes() {
    assert_eq!(resolve("/home/feed"), None);
    assert_eq!(resolve("/log"), None);
}
