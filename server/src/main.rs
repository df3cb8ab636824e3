#![recursion_limit = "256"]

mod config;
mod routes;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // A missing `.env` is normal outside development.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = match config::SiteConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid site configuration");
            std::process::exit(1);
        }
    };

    let app = match routes::site_app(&config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to assemble router");
            std::process::exit(1);
        }
    };

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .expect("failed to bind");

    tracing::info!(addr = %config.addr, assets = %config.assets_dir.display(), "removals site listening");
    axum::serve(listener, app).await.expect("server failed");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}
