//! REST helpers for the enquiry backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since submissions only happen
//! in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is folded into [`EnquiryError`] so the form can show a
//! message inline instead of letting a network error escape the section.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{EnquiryErrorBody, EnquiryRequest};

/// Enquiry endpoint, relative to the configured API base.
pub const ENQUIRY_PATH: &str = "contacts/enquiries/";

/// Message shown when the backend gives no usable reason for a failure.
pub const SUBMISSION_FAILED_MESSAGE: &str = "Form submission failed. Please try again.";

/// Errors produced while submitting an enquiry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnquiryError {
    /// The backend answered with a non-success status.
    #[error("enquiry rejected: {0}")]
    Rejected(String),

    /// The request never produced a response.
    #[error("enquiry request failed: {0}")]
    Transport(String),
}

impl EnquiryError {
    /// Text to display to the visitor.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Rejected(message) => message,
            Self::Transport(_) => SUBMISSION_FAILED_MESSAGE,
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn enquiry_endpoint(base: &str) -> String {
    crate::config::join_endpoint(base, ENQUIRY_PATH)
}

/// Extract the visitor-facing reason from a rejected response body.
pub fn rejection_message(body: &str) -> String {
    serde_json::from_str::<EnquiryErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .unwrap_or_else(|| SUBMISSION_FAILED_MESSAGE.to_owned())
}

/// Submit an enquiry via `POST {api_base}contacts/enquiries/`.
///
/// Returns the raw response body on success; callers only log it.
///
/// # Errors
///
/// Returns [`EnquiryError::Transport`] if the request cannot be sent and
/// [`EnquiryError::Rejected`] if the backend responds with a non-OK status.
pub async fn submit_enquiry(request: &EnquiryRequest) -> Result<String, EnquiryError> {
    #[cfg(feature = "hydrate")]
    {
        let url = enquiry_endpoint(crate::config::api_base_url());
        let resp = gloo_net::http::Request::post(&url)
            .json(request)
            .map_err(|e| EnquiryError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| EnquiryError::Transport(e.to_string()))?;
        let body = resp.text().await.unwrap_or_default();
        if !resp.ok() {
            return Err(EnquiryError::Rejected(rejection_message(&body)));
        }
        Ok(body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(EnquiryError::Transport("not available on server".to_owned()))
    }
}
