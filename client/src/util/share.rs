//! Native page sharing with an alert fallback.
//!
//! The Web Share API is looked up on `navigator` at call time instead of
//! through typed bindings, since browser support varies and an absent
//! `share` function is the normal "unsupported" case.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

/// Alert text shown when the browser has no share capability.
pub const SHARE_UNSUPPORTED_MESSAGE: &str = "Sharing is not supported on this browser.";

/// Errors produced when sharing the current page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShareError {
    #[error("native sharing is not available")]
    Unsupported,

    /// The share sheet was dismissed or the call rejected.
    #[error("share failed: {0}")]
    Failed(String),
}

/// Share `title` + `url` through `navigator.share`.
///
/// # Errors
///
/// Returns [`ShareError::Unsupported`] when `navigator.share` is missing and
/// [`ShareError::Failed`] when the share promise rejects.
pub async fn share(title: &str, url: &str) -> Result<(), ShareError> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::{JsCast as _, JsValue};

        let window = web_sys::window().ok_or(ShareError::Unsupported)?;
        let navigator = window.navigator();
        let share_fn = js_sys::Reflect::get(&navigator, &JsValue::from_str("share"))
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
            .ok_or(ShareError::Unsupported)?;

        let data = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&data, &JsValue::from_str("title"), &JsValue::from_str(title));
        let _ = js_sys::Reflect::set(&data, &JsValue::from_str("url"), &JsValue::from_str(url));

        let promise = share_fn
            .call1(&navigator, &data)
            .map_err(|e| ShareError::Failed(format!("{e:?}")))?
            .dyn_into::<js_sys::Promise>()
            .map_err(|e| ShareError::Failed(format!("{e:?}")))?;
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| ShareError::Failed(format!("{e:?}")))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (title, url);
        Err(ShareError::Unsupported)
    }
}

/// Share the current page, alerting when sharing is unsupported.
///
/// Fire-and-forget: the outcome is only logged.
pub fn share_current_page() {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let title = super::location::document_title();
        let url = super::location::current_href();
        match share(&title, &url).await {
            Ok(()) => log::info!("share successful"),
            Err(ShareError::Unsupported) => {
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(SHARE_UNSUPPORTED_MESSAGE);
                }
            }
            Err(e) => log::error!("{e}"),
        }
    });
}
