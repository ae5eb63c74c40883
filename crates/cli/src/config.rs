//! Application configuration.
//!
//! Read from a TOML file, then overridden by environment variables:
//!
//! ```toml
//! catalog_path = "data/products.json"
//! fallback_path = "public/products.json"
//! session_dir = ".storefront"
//!
//! [query]
//! min_search_chars = 2
//! suggestion_limit = 8
//!
//! [log]
//! level = "info"
//! json = false
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use storefront_catalog::QueryConfig;
use storefront_observability::LogConfig;

/// Config file consulted when neither `--config` nor `STOREFRONT_CONFIG` is set.
pub const DEFAULT_CONFIG_FILE: &str = "storefront.toml";

pub const CONFIG_ENV: &str = "STOREFRONT_CONFIG";
pub const CATALOG_ENV: &str = "STOREFRONT_CATALOG";
pub const FALLBACK_CATALOG_ENV: &str = "STOREFRONT_FALLBACK_CATALOG";
pub const SESSION_DIR_ENV: &str = "STOREFRONT_SESSION_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Primary catalog export (JSON array of product records).
    pub catalog_path: PathBuf,
    /// Bundled dataset used when the primary catalog cannot be read.
    pub fallback_path: Option<PathBuf>,
    /// Directory holding the persisted cart and wishlist.
    pub session_dir: PathBuf,
    pub query: QueryConfig,
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("products.json"),
            fallback_path: None,
            session_dir: PathBuf::from(".storefront"),
            query: QueryConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("invalid storefront configuration")
    }

    /// Load from `path`. A missing file is an error only when `required`.
    pub fn load(path: &Path, required: bool) -> anyhow::Result<Self> {
        if !path.exists() {
            if required {
                anyhow::bail!("config file {} does not exist", path.display());
            }
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Resolve the effective configuration for this process.
    pub fn resolve(cli_path: Option<&Path>) -> anyhow::Result<Self> {
        let lookup = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());

        let explicit = cli_path
            .map(Path::to_path_buf)
            .or_else(|| lookup(CONFIG_ENV).map(PathBuf::from));
        let mut config = match explicit {
            Some(path) => Self::load(&path, true)?,
            None => Self::load(Path::new(DEFAULT_CONFIG_FILE), false)?,
        };
        config.apply_env_overrides(lookup);
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup(CATALOG_ENV) {
            self.catalog_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(FALLBACK_CATALOG_ENV) {
            self.fallback_path = Some(PathBuf::from(path));
        }
        if let Some(dir) = lookup(SESSION_DIR_ENV) {
            self.session_dir = PathBuf::from(dir);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            catalog_path = "data/products.json"

            [query]
            suggestion_limit = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog_path, PathBuf::from("data/products.json"));
        assert_eq!(config.query.suggestion_limit, 5);
        assert_eq!(config.query.min_search_chars, 2);
        assert_eq!(config.session_dir, PathBuf::from(".storefront"));
        assert!(config.log.json);
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(AppConfig::from_toml_str("catalog_path = [").is_err());
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.toml");
        assert_eq!(AppConfig::load(&path, false).unwrap(), AppConfig::default());
        assert!(AppConfig::load(&path, true).is_err());
    }

    #[test]
    fn reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.toml");
        std::fs::write(&path, "[log]\njson = false\nlevel = \"debug\"\n").unwrap();

        let config = AppConfig::load(&path, true).unwrap();
        assert!(!config.log.json);
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn env_overrides_win() {
        let env: HashMap<&str, &str> = HashMap::from([
            (CATALOG_ENV, "/srv/catalog.json"),
            (SESSION_DIR_ENV, "/tmp/session"),
        ]);
        let mut config = AppConfig::default();
        config.apply_env_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.catalog_path, PathBuf::from("/srv/catalog.json"));
        assert_eq!(config.session_dir, PathBuf::from("/tmp/session"));
        assert_eq!(config.fallback_path, None);
    }
}
