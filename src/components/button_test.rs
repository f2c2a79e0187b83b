use super::*;

#[test]
fn default_variant_is_primary() {
    assert_eq!(ButtonVariant::default(), ButtonVariant::Default);
}

#[test]
fn variant_classes_are_distinct() {
    let variants = [
        ButtonVariant::Default,
        ButtonVariant::Outline,
        ButtonVariant::Ghost,
    ];
    for (i, a) in variants.iter().enumerate() {
        for b in &variants[i + 1..] {
            assert_ne!(a.class(), b.class());
        }
    }
}

#[test]
fn every_variant_carries_the_base_class() {
    for variant in [
        ButtonVariant::Default,
        ButtonVariant::Outline,
        ButtonVariant::Ghost,
    ] {
        assert!(variant.class().starts_with("btn "));
    }
}
