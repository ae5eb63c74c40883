//! Product-fetch collaborators.
//!
//! A [`ProductSource`] delivers the raw catalog once per session. The
//! storefront tries its primary source (the backend export) and falls back to
//! a bundled dataset; if both fail the session runs with an empty catalog and
//! a notice for the shopper.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

use storefront_catalog::{Catalog, QueryConfig, RawProduct};

/// Shopper-facing notice shown when the primary source fails.
pub const LOAD_FAILURE_NOTICE: &str =
    "Failed to load products. Please check the backend connection.";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read catalog from {path}: {message}")]
    Io { path: String, message: String },

    #[error("failed to decode catalog from {origin}: {message}")]
    Decode { origin: String, message: String },
}

#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Human-readable name for logs.
    fn name(&self) -> &str;

    async fn fetch(&self) -> Result<Vec<RawProduct>, SourceError>;
}

/// Decode a catalog document: a JSON array of product records.
pub fn decode_catalog(json: &str, origin: &str) -> Result<Vec<RawProduct>, SourceError> {
    serde_json::from_str(json).map_err(|e| SourceError::Decode {
        origin: origin.to_string(),
        message: e.to_string(),
    })
}

/// Catalog exported to a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    name: String,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ProductSource for JsonFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<Vec<RawProduct>, SourceError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| SourceError::Io {
                path: self.name.clone(),
                message: e.to_string(),
            })?;
        decode_catalog(&content, &self.name)
    }
}

/// Dataset held in memory (e.g. bundled with the binary).
#[derive(Debug, Clone)]
pub struct StaticSource {
    name: String,
    products: Vec<RawProduct>,
}

impl StaticSource {
    pub fn new(name: impl Into<String>, products: Vec<RawProduct>) -> Self {
        Self {
            name: name.into(),
            products,
        }
    }

    pub fn from_json(name: impl Into<String>, json: &str) -> Result<Self, SourceError> {
        let name = name.into();
        let products = decode_catalog(json, &name)?;
        Ok(Self { name, products })
    }
}

#[async_trait]
impl ProductSource for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<Vec<RawProduct>, SourceError> {
        Ok(self.products.clone())
    }
}

/// Which source the session's catalog came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOrigin {
    Primary,
    Fallback,
    /// Every source failed; the catalog is empty.
    Unavailable,
}

#[derive(Debug)]
pub struct CatalogLoad {
    pub catalog: Catalog,
    pub origin: CatalogOrigin,
    /// Notice to surface to the shopper, if any.
    pub notice: Option<String>,
}

/// Fetch the session catalog. Never fails: source errors are logged and
/// degrade to the fallback, then to an empty catalog.
pub async fn load_catalog(
    primary: &dyn ProductSource,
    fallback: Option<&dyn ProductSource>,
    config: QueryConfig,
) -> CatalogLoad {
    let primary_err = match primary.fetch().await {
        Ok(raw) => {
            tracing::info!(source = primary.name(), records = raw.len(), "catalog fetched");
            return CatalogLoad {
                catalog: Catalog::from_raw(raw, config),
                origin: CatalogOrigin::Primary,
                notice: None,
            };
        }
        Err(err) => err,
    };

    tracing::warn!(source = primary.name(), error = %primary_err, "primary catalog source failed");
    let notice = Some(LOAD_FAILURE_NOTICE.to_string());

    let Some(fallback) = fallback else {
        return CatalogLoad {
            catalog: Catalog::empty(config),
            origin: CatalogOrigin::Unavailable,
            notice,
        };
    };

    match fallback.fetch().await {
        Ok(raw) => {
            tracing::info!(source = fallback.name(), records = raw.len(), "fallback catalog fetched");
            CatalogLoad {
                catalog: Catalog::from_raw(raw, config),
                origin: CatalogOrigin::Fallback,
                notice,
            }
        }
        Err(err) => {
            tracing::error!(source = fallback.name(), error = %err, "fallback catalog source failed");
            CatalogLoad {
                catalog: Catalog::empty(config),
                origin: CatalogOrigin::Unavailable,
                notice,
            }
        }
    }
}
