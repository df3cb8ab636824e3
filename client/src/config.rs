//! Compile-time client configuration.
//!
//! Values are baked into the WASM bundle at build time:
//! - `ENQUIRY_API_BASE_URL`: base of the enquiry backend, default `/api/`
//! - `RECAPTCHA_SITE_KEY`: reCAPTCHA v2 site key; the widget is replaced by a
//!   notice when unset

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "/api/";

/// Base URL for backend API calls.
pub fn api_base_url() -> &'static str {
    option_env!("ENQUIRY_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL)
}

/// Site key for the reCAPTCHA widget, if one was configured.
pub fn recaptcha_site_key() -> Option<&'static str> {
    option_env!("RECAPTCHA_SITE_KEY").filter(|key| !key.trim().is_empty())
}

/// Join an API base and a relative endpoint path with exactly one `/`.
pub fn join_endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
