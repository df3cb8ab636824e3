use super::*;

#[test]
fn join_endpoint_handles_trailing_slash_on_base() {
    assert_eq!(join_endpoint("/api/", "contacts/enquiries/"), "/api/contacts/enquiries/");
}

#[test]
fn join_endpoint_handles_missing_trailing_slash() {
    assert_eq!(
        join_endpoint("https://backend.example.com/v1", "contacts/enquiries/"),
        "https://backend.example.com/v1/contacts/enquiries/"
    );
}

#[test]
fn join_endpoint_collapses_leading_slash_on_path() {
    assert_eq!(join_endpoint("/api/", "/contacts/enquiries/"), "/api/contacts/enquiries/");
}

#[test]
fn api_base_url_is_never_empty() {
    assert!(!api_base_url().is_empty());
}
