//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is a pure composition of `components` primitives. Fixed page
//! data (feature cards, nav items, suggestions) lives beside the page
//! that renders it, with sibling tests over the data alone.

pub mod home;
pub mod login;
pub mod not_found;
pub mod welcome;
