//! Current page location and title.
//!
//! Both are browser-only; SSR returns empty strings so server rendering stays
//! deterministic and the hydrated client fills in real values.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

/// Full URL of the current page (`window.location.href`).
pub fn current_href() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Title of the current document.
pub fn document_title() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .map(|d| d.title())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
