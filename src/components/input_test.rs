use super::*;

#[test]
fn input_type_defaults_to_text() {
    assert_eq!(effective_type(None), "text");
}

#[test]
fn input_type_override_wins() {
    assert_eq!(effective_type(Some("password")), "password");
}
