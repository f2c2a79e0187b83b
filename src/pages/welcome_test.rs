use super::*;

#[test]
fn exactly_three_feature_cards() {
    assert_eq!(FEATURES.len(), 3);
}

#[test]
fn feature_titles_in_fixed_order() {
    let titles: Vec<&str> = FEATURES.iter().map(|f| f.title).collect();
    assert_eq!(titles, vec!["Global Reach", "Communities", "Instant Chat"]);
}

#[test]
fn feature_icons_are_distinct() {
    for (i, a) in FEATURES.iter().enumerate() {
        for b in &FEATURES[i + 1..] {
            assert_ne!(a.icon, b.icon);
        }
    }
}

#[test]
fn every_feature_has_a_description() {
    for feature in FEATURES {
        assert!(!feature.description.is_empty());
    }
}

#[test]
fn tagline_is_the_brand_line() {
    assert_eq!(TAGLINE, "Explore. Connect. Innovate.");
}
