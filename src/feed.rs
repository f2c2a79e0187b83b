//! Sample-feed generation for the home view.
//!
//! DESIGN
//! ======
//! The feed is the one generative piece of the UI: a fixed index sequence
//! mapped 1:1 into display values. Keeping the transform here, away from
//! the view composition, lets length/order/labels be tested without
//! rendering anything.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

/// The fixed post indices shown in the home feed, in display order.
pub const SAMPLE_POST_INDICES: [u32; 5] = [1, 2, 3, 4, 5];

/// One mock post in the home feed, identified by its index.
///
/// The index doubles as the list-rendering key; every display field is
/// derived from it deterministically.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SamplePost {
    pub index: u32,
}

impl SamplePost {
    /// Avatar label, e.g. `P3` for post 3.
    pub fn avatar_label(&self) -> String {
        format!("P{}", self.index)
    }

    /// Author display name, e.g. `User Name 3`.
    pub fn display_name(&self) -> String {
        format!("User Name {}", self.index)
    }

    /// Relative-time label. Static — the mock feed has no clock.
    pub fn posted_ago(&self) -> &'static str {
        "2 hrs ago"
    }

    /// Post body text, parameterized by the post index.
    pub fn body(&self) -> String {
        format!(
            "This is a sample post content. The fixed layout now fills the screen beautifully! Post #{}.",
            self.index
        )
    }
}

/// Generate the sample feed: one post per entry of
/// [`SAMPLE_POST_INDICES`], ordering preserved.
pub fn sample_posts() -> Vec<SamplePost> {
    SAMPLE_POST_INDICES
        .into_iter()
        .map(|index| SamplePost { index })
        .collect()
}
