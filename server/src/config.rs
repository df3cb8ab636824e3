//! Site configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_SITE_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_ASSETS_DIR: &str = "assets";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid SITE_ADDR {value:?}: {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub addr: SocketAddr,
    pub assets_dir: PathBuf,
}

impl SiteConfig {
    /// Build typed site config from environment variables.
    ///
    /// Optional:
    /// - `SITE_ADDR`: listen address, default `0.0.0.0:3000`
    /// - `ASSETS_DIR`: static files served at `/assets`, default `assets`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAddr`] if `SITE_ADDR` does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SiteConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAddr`] if `SITE_ADDR` does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = non_blank(lookup("SITE_ADDR")).unwrap_or_else(|| DEFAULT_SITE_ADDR.to_owned());
        let addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidAddr { value: raw_addr.clone(), source })?;
        let assets_dir = PathBuf::from(non_blank(lookup("ASSETS_DIR")).unwrap_or_else(|| DEFAULT_ASSETS_DIR.to_owned()));

        Ok(Self { addr, assets_dir })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}
