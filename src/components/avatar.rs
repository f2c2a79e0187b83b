//! Circular avatar primitive.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

use leptos::prelude::*;

/// Visual styles an [`Avatar`] can take, one per place the shell shows
/// one. The set is closed, like [`crate::components::button::ButtonVariant`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AvatarStyle {
    /// The viewer's own avatar (post composer).
    #[default]
    Viewer,
    /// The brand mark on the welcome page.
    Brand,
    /// A feed post author.
    Poster,
}

impl AvatarStyle {
    /// CSS classes for this style.
    pub fn class(self) -> &'static str {
        match self {
            AvatarStyle::Viewer => "avatar avatar--viewer",
            AvatarStyle::Brand => "avatar avatar--brand",
            AvatarStyle::Poster => "avatar avatar--poster",
        }
    }
}

/// A circular avatar showing its children as a label (initials or a
/// short tag).
#[component]
pub fn Avatar(
    #[prop(optional)] style: AvatarStyle,
    children: Children,
) -> impl IntoView {
    view! { <span class=style.class()>{children()}</span> }
}
