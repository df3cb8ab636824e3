//! Wire DTOs for the enquiry backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON so the request body can be
//! serialized directly without a hand-written mapping layer.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST contacts/enquiries/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryRequest {
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub service_type: String,
    pub message: String,
    pub referer_url: String,
    pub submitted_url: String,
    pub recaptcha_token: String,
}

/// Error payload returned by the backend on a rejected enquiry.
///
/// Any truthy scalar `error` is surfaced as text. Empty strings, `0`,
/// `false`, `null`, arrays and objects fall back to the generic message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct EnquiryErrorBody {
    #[serde(default, deserialize_with = "deserialize_error_message")]
    pub error: Option<String>,
}

fn deserialize_error_message<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s),
        serde_json::Value::Number(n) if n.as_f64().is_some_and(|f| f.abs() > 0.0) => Some(n.to_string()),
        serde_json::Value::Bool(true) => Some("true".to_owned()),
        _ => None,
    })
}
