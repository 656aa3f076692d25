//! Application state

use crate::config::ServerConfig;
use anyhow::{Context, Result};
use libris_core::{Catalog, LookupClient};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state
///
/// The catalog is constructed once at startup and injected here; handlers
/// never reach for a global instance.
#[derive(Clone)]
pub struct AppState {
    /// The book catalog; mutating handlers hold the write lock for the whole operation
    pub catalog: Arc<RwLock<Catalog>>,

    /// ISBN lookup client
    pub lookup: LookupClient,
}

impl AppState {
    /// Create state from an already opened catalog and lookup client
    pub fn new(catalog: Catalog, lookup: LookupClient) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
            lookup,
        }
    }

    /// Open the configured catalog and build the Open Library lookup client
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        let catalog = Catalog::open(&config.catalog_path);
        tracing::info!(
            "Loaded {} books from {}",
            catalog.len(),
            config.catalog_path.display()
        );

        let lookup = LookupClient::open_library(&config.api_url)
            .context("Failed to create bibliographic service client")?;

        Ok(Self::new(catalog, lookup))
    }
}
