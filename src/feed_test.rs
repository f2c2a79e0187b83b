use super::*;

#[test]
fn sample_feed_has_exactly_five_posts() {
    assert_eq!(sample_posts().len(), 5);
}

#[test]
fn sample_feed_indices_ascend_from_one() {
    let indices: Vec<u32> = sample_posts().iter().map(|p| p.index).collect();
    assert_eq!(indices, vec![1, 2, 3, 4, 5]);
}

#[test]
fn sample_feed_keys_are_unique() {
    let posts = sample_posts();
    for (i, a) in posts.iter().enumerate() {
        for b in &posts[i + 1..] {
            assert_ne!(a.index, b.index, "duplicate list key");
        }
    }
}

#[test]
fn sample_feed_is_idempotent_across_calls() {
    assert_eq!(sample_posts(), sample_posts());
}

#[test]
fn avatar_label_follows_index() {
    for post in sample_posts() {
        assert_eq!(post.avatar_label(), format!("P{}", post.index));
    }
}

#[test]
fn display_name_follows_index() {
    for post in sample_posts() {
        assert_eq!(post.display_name(), format!("User Name {}", post.index));
    }
}

#[test]
fn body_mentions_post_number() {
    let post = SamplePost { index: 4 };
    assert!(post.body().ends_with("Post #4."));
}

#[test]
fn posted_ago_is_static() {
    let labels: Vec<&str> = sample_posts().iter().map(SamplePost::posted_ago).collect();
    assert!(labels.iter().all(|l| *l == "2 hrs ago"));
}
