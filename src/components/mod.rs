//! Reusable presentational component modules.
//!
//! DESIGN
//! ======
//! Every component here is a stateless rendering function: it takes typed
//! props and children and returns a view, with no context reads, no
//! signals, and no side effects. Pages own all composition.

pub mod avatar;
pub mod button;
pub mod card;
pub mod footer;
pub mod header;
pub mod input;
pub mod login_panel;
pub mod scroll_region;
