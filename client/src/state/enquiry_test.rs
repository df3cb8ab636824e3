use super::*;

const PAGE: &str = "https://movers.example/";

// =============================================================
// Helpers
// =============================================================

fn filled_state() -> EnquiryState {
    let mut state = EnquiryState::new(PAGE);
    state.set_field(EnquiryField::FullName, "Ada Lovelace".to_owned());
    state.set_field(EnquiryField::PhoneNumber, "0501234567".to_owned());
    state.set_field(EnquiryField::Email, "ada@example.com".to_owned());
    state.set_field(EnquiryField::ServiceType, "localMove".to_owned());
    state.set_field(EnquiryField::Message, "Two bedroom flat".to_owned());
    state.set_captcha_token("tok-1".to_owned());
    state
}

// =============================================================
// EnquiryField
// =============================================================

#[test]
fn field_names_round_trip_through_from_str() {
    for field in EnquiryField::ALL {
        assert_eq!(field.name().parse::<EnquiryField>(), Ok(field));
    }
}

#[test]
fn unknown_field_name_is_rejected() {
    assert_eq!(
        "trackingNumber".parse::<EnquiryField>(),
        Err(UnknownField("trackingNumber".to_owned()))
    );
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn new_state_captures_location_in_both_url_fields() {
    let state = EnquiryState::new(PAGE);
    assert_eq!(state.form.referer_url, PAGE);
    assert_eq!(state.form.submitted_url, PAGE);
    assert!(state.form.full_name.is_empty());
    assert_eq!(state.phase, SubmissionPhase::Editing);
    assert!(state.errors.is_empty());
}

// =============================================================
// Editing
// =============================================================

#[test]
fn set_field_clears_only_that_fields_error() {
    let mut state = EnquiryState::new(PAGE);
    assert!(state.begin_submit().is_none());
    assert!(!state.errors.full_name.is_empty());
    assert!(!state.errors.email.is_empty());

    state.set_field(EnquiryField::FullName, "A".to_owned());

    assert_eq!(state.form.full_name, "A");
    assert!(state.errors.full_name.is_empty());
    assert_eq!(state.errors.email, "Please enter your email address.");
}

#[test]
fn captcha_token_clears_captcha_error() {
    let mut state = EnquiryState::new(PAGE);
    assert!(state.begin_submit().is_none());
    assert!(!state.errors.recaptcha.is_empty());

    state.set_captcha_token("tok".to_owned());
    assert!(state.errors.recaptcha.is_empty());
}

// =============================================================
// Validation
// =============================================================

#[test]
fn empty_submit_reports_every_missing_field_at_once() {
    let mut state = EnquiryState::new(PAGE);
    assert!(state.begin_submit().is_none());

    assert_eq!(state.errors.full_name, "Please enter your full name.");
    assert_eq!(state.errors.phone_number, "Please enter your phone number.");
    assert_eq!(state.errors.email, "Please enter your email address.");
    assert_eq!(state.errors.service_type, "Please select a service type.");
    assert_eq!(state.errors.message, "Please enter a message.");
    assert_eq!(state.errors.recaptcha, "Please complete the reCAPTCHA verification.");
    assert_eq!(state.phase, SubmissionPhase::Editing);
}

#[test]
fn missing_full_name_only_flags_full_name() {
    let mut state = filled_state();
    state.set_field(EnquiryField::FullName, String::new());

    assert!(state.begin_submit().is_none());

    assert_eq!(state.errors.full_name, "Please enter your full name.");
    for field in [EnquiryField::PhoneNumber, EnquiryField::Email, EnquiryField::ServiceType, EnquiryField::Message] {
        assert!(state.errors.get(field).is_empty(), "{field:?} should have no error");
    }
    assert!(state.errors.recaptcha.is_empty());
    assert!(!state.is_submitting());
}

#[test]
fn each_single_missing_field_blocks_the_request() {
    for missing in EnquiryField::ALL {
        let mut state = filled_state();
        state.set_field(missing, String::new());
        assert!(state.begin_submit().is_none(), "{missing:?} empty must not submit");
        assert!(!state.errors.get(missing).is_empty());
    }
}

#[test]
fn missing_captcha_blocks_the_request() {
    let mut state = filled_state();
    state.set_captcha_token(String::new());

    assert!(state.begin_submit().is_none());
    assert_eq!(
        state.captcha_slot_message(),
        Some("Please complete the reCAPTCHA verification.")
    );
}

#[test]
fn validate_lists_issues_in_field_order_with_captcha_last() {
    let form = EnquiryForm::new(PAGE);
    let issues = validate(&form, "").unwrap_err();
    assert_eq!(issues.len(), 6);
    assert_eq!(issues[0], ValidationIssue::MissingRequiredField(EnquiryField::FullName));
    assert_eq!(issues[5], ValidationIssue::MissingCaptcha);
}

// =============================================================
// Submitting
// =============================================================

#[test]
fn complete_form_produces_exactly_one_request() {
    let mut state = filled_state();

    let request = state.begin_submit().expect("request");
    assert!(state.is_submitting());
    assert_eq!(request.full_name, "Ada Lovelace");
    assert_eq!(request.recaptcha_token, "tok-1");
    assert_eq!(request.referer_url, PAGE);

    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(body.as_object().map(serde_json::Map::len), Some(8));

    // Re-entrant submit while in flight does not issue a second request.
    assert!(state.begin_submit().is_none());
    assert!(state.is_submitting());
}

// =============================================================
// Succeeded
// =============================================================

#[test]
fn success_resets_form_and_opens_confirmation() {
    let mut state = filled_state();
    state.begin_submit().expect("request");

    state.complete_success("https://movers.example/contact");

    assert_eq!(state.form, EnquiryForm::new("https://movers.example/contact"));
    assert!(state.captcha_token.is_empty());
    assert!(state.errors.is_empty());
    assert!(state.confirmation_open());
    assert!(!state.is_submitting());
}

#[test]
fn dismissing_confirmation_returns_to_editing() {
    let mut state = filled_state();
    state.begin_submit().expect("request");
    state.complete_success(PAGE);

    state.dismiss_confirmation();

    assert_eq!(state.phase, SubmissionPhase::Editing);
    assert!(!state.confirmation_open());
}

#[test]
fn completion_without_request_in_flight_is_ignored() {
    let mut state = filled_state();
    let before = state.clone();

    state.complete_success(PAGE);
    state.complete_failure("late");

    assert_eq!(state, before);
}

// =============================================================
// Failed
// =============================================================

#[test]
fn failure_shows_server_message_and_keeps_values() {
    let mut state = filled_state();
    state.begin_submit().expect("request");
    let form_before = state.form.clone();

    state.complete_failure("Duplicate entry");

    assert_eq!(state.captcha_slot_message(), Some("Duplicate entry"));
    assert_eq!(state.form, form_before);
    assert_eq!(state.captcha_token, "tok-1");
    assert!(!state.is_submitting());
}

#[test]
fn retry_after_failure_is_a_new_request() {
    let mut state = filled_state();
    state.begin_submit().expect("first request");
    state.complete_failure("Duplicate entry");

    let retry = state.begin_submit();

    assert!(retry.is_some());
    assert!(state.is_submitting());
    assert_eq!(state.captcha_slot_message(), None);
}

#[test]
fn failed_validation_after_failure_replaces_the_server_message() {
    let mut state = filled_state();
    state.begin_submit().expect("request");
    state.complete_failure("Duplicate entry");
    state.set_captcha_token(String::new());

    assert!(state.begin_submit().is_none());

    assert_eq!(
        state.captcha_slot_message(),
        Some("Please complete the reCAPTCHA verification.")
    );
}
