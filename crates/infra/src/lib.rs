//! Infrastructure adapters for the storefront.
//!
//! - product sources (where the session's catalog comes from), with fallback
//! - a file-backed key-value store for session persistence

pub mod kv_file;
pub mod source;

pub use kv_file::FileKeyValueStore;
pub use source::{
    CatalogLoad, CatalogOrigin, JsonFileSource, LOAD_FAILURE_NOTICE, ProductSource, SourceError,
    StaticSource, load_catalog,
};
