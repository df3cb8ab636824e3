//! # client
//!
//! Leptos + WASM frontend for the removals company marketing site.
//!
//! This crate contains pages, components, enquiry form state, the enquiry
//! API client, and the bundled blog content. The `server` crate renders it
//! with `leptos_axum`; the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
