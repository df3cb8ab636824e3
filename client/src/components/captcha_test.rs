use super::*;

#[test]
fn reset_when_token_is_cleared() {
    assert!(needs_reset(Some(true), false));
}

#[test]
fn no_reset_on_first_run() {
    assert!(!needs_reset(None, false));
    assert!(!needs_reset(None, true));
}

#[test]
fn no_reset_while_token_is_present_or_still_empty() {
    assert!(!needs_reset(Some(true), true));
    assert!(!needs_reset(Some(false), false));
    assert!(!needs_reset(Some(false), true));
}

#[test]
fn callback_names_are_distinct() {
    assert_ne!(TOKEN_CALLBACK, EXPIRED_CALLBACK);
}

#[test]
fn script_loads_in_explicit_mode_with_load_callback() {
    assert!(SCRIPT_SRC.contains("render=explicit"));
    assert!(SCRIPT_SRC.contains(&format!("onload={LOAD_CALLBACK}")));
}

#[test]
fn load_callback_is_distinct_from_widget_callbacks() {
    assert_ne!(LOAD_CALLBACK, TOKEN_CALLBACK);
    assert_ne!(LOAD_CALLBACK, EXPIRED_CALLBACK);
}

#[test]
fn render_once_container_and_api_are_ready() {
    assert!(needs_render(false, true, true));
}

#[test]
fn render_waits_for_api_and_container() {
    assert!(!needs_render(false, true, false));
    assert!(!needs_render(false, false, true));
}

#[test]
fn rendered_widget_is_not_rendered_again() {
    assert!(!needs_render(true, true, true));
}
