//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the Leptos app for every client route, serves the compiled
//! bundle under `/pkg` and static images under `/assets`. The enquiry API
//! lives on a separate service; this router never handles it.


use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, SiteConfig};

/// Full site router: health check, SSR pages and static files.
///
/// # Errors
///
/// Returns [`ConfigError::Leptos`] if the Leptos configuration cannot be
/// loaded (missing or malformed `[[workspace.metadata.leptos]]` section).
pub fn site_app(config: &SiteConfig) -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let pkg_dir = pkg_dir(&leptos_options);
    tracing::debug!(pkg = %pkg_dir.display(), "serving compiled bundle");

    Ok(static_routes(pkg_dir, config.assets_dir.clone())
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// Health check plus static file mounts, independent of Leptos options.
fn static_routes(pkg_dir: PathBuf, assets_dir: PathBuf) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .nest_service("/assets", ServeDir::new(assets_dir))
}

fn pkg_dir(options: &LeptosOptions) -> PathBuf {
    PathBuf::from(options.site_root.as_ref()).join(options.site_pkg_dir.as_ref())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
