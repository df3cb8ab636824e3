use super::*;

#[test]
fn label_is_used_when_idle() {
    assert_eq!(button_label("Submit", Some("Submitting"), false), "Submit");
}

#[test]
fn loading_label_replaces_label_while_loading() {
    assert_eq!(button_label("Submit", Some("Submitting"), true), "Submitting");
}

#[test]
fn label_is_kept_while_loading_without_loading_label() {
    assert_eq!(button_label("View all", None, true), "View all");
}
