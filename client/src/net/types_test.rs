use super::*;

fn sample_request() -> EnquiryRequest {
    EnquiryRequest {
        full_name: "Ada Lovelace".to_owned(),
        phone_number: "0501234567".to_owned(),
        email: "ada@example.com".to_owned(),
        service_type: "localMove".to_owned(),
        message: "Two bedroom flat".to_owned(),
        referer_url: "https://movers.example/".to_owned(),
        submitted_url: "https://movers.example/".to_owned(),
        recaptcha_token: "tok-1".to_owned(),
    }
}

// =============================================================
// EnquiryRequest
// =============================================================

#[test]
fn enquiry_request_serializes_camel_case_keys() {
    let value = serde_json::to_value(sample_request()).unwrap();
    let object = value.as_object().unwrap();
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        [
            "email",
            "fullName",
            "message",
            "phoneNumber",
            "recaptchaToken",
            "refererUrl",
            "serviceType",
            "submittedUrl",
        ]
    );
    assert_eq!(object["fullName"], "Ada Lovelace");
    assert_eq!(object["recaptchaToken"], "tok-1");
}

// =============================================================
// EnquiryErrorBody
// =============================================================

#[test]
fn error_body_reads_string_error() {
    let body: EnquiryErrorBody = serde_json::from_str(r#"{"error":"Duplicate entry"}"#).unwrap();
    assert_eq!(body.error.as_deref(), Some("Duplicate entry"));
}

#[test]
fn error_body_ignores_missing_error() {
    let body: EnquiryErrorBody = serde_json::from_str(r#"{"detail":"nope"}"#).unwrap();
    assert_eq!(body.error, None);
}

#[test]
fn error_body_ignores_object_error() {
    let body: EnquiryErrorBody = serde_json::from_str(r#"{"error":{"code":400}}"#).unwrap();
    assert_eq!(body.error, None);
}

#[test]
fn error_body_stringifies_truthy_scalars() {
    let number: EnquiryErrorBody = serde_json::from_str(r#"{"error":123}"#).unwrap();
    assert_eq!(number.error.as_deref(), Some("123"));
    let flag: EnquiryErrorBody = serde_json::from_str(r#"{"error":true}"#).unwrap();
    assert_eq!(flag.error.as_deref(), Some("true"));
}

#[test]
fn error_body_ignores_falsy_scalars() {
    for raw in [r#"{"error":""}"#, r#"{"error":0}"#, r#"{"error":false}"#, r#"{"error":null}"#] {
        let body: EnquiryErrorBody = serde_json::from_str(raw).unwrap();
        assert_eq!(body.error, None, "{raw}");
    }
}

#[test]
fn error_body_keeps_whitespace_error() {
    let body: EnquiryErrorBody = serde_json::from_str(r#"{"error":"  "}"#).unwrap();
    assert_eq!(body.error.as_deref(), Some("  "));
}
