//! Server configuration, read from the environment

use anyhow::{Context, Result};
use libris_core::lookup::DEFAULT_BASE_URL;
use libris_core::DEFAULT_CATALOG_FILE;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Default listen address
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Backing JSON file of the catalog (`LIBRIS_CATALOG`)
    pub catalog_path: PathBuf,

    /// Address to listen on (`LIBRIS_BIND_ADDR`)
    pub bind_addr: SocketAddr,

    /// Base URL of the bibliographic service (`LIBRIS_API_URL`)
    pub api_url: String,

    /// Comma-separated allowed origins, or "*" (`LIBRIS_CORS_ORIGINS`)
    pub cors_origins: Option<String>,
}

impl ServerConfig {
    /// Build the configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind_addr = var("LIBRIS_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid LIBRIS_BIND_ADDR: {}", bind_addr))?;

        Ok(Self {
            catalog_path: var("LIBRIS_CATALOG")
                .unwrap_or_else(|| DEFAULT_CATALOG_FILE.to_string())
                .into(),
            bind_addr,
            api_url: var("LIBRIS_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            cors_origins: var("LIBRIS_CORS_ORIGINS"),
        })
    }
}
