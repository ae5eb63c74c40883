//! Catalog domain module.
//!
//! This crate contains the storefront's in-memory catalog query engine,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage): product ingestion, facet filters, text search, sorting,
//! type-ahead suggestions and route-derived category resolution.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod filters;
pub mod ingest;
pub mod product;
pub mod route;
pub mod search;
pub mod sort;
pub mod suggest;

pub use catalog::{Catalog, CatalogQuery};
pub use config::QueryConfig;
pub use engine::{compute_suggestions, compute_visible_products, related_products};
pub use filters::{ActiveFilter, Availability, FilterState, PriceRange};
pub use ingest::{RawProduct, sanitize_catalog};
pub use product::Product;
pub use route::{CategoryIndex, Route};
pub use search::{SearchField, SearchQuery};
pub use sort::SortOption;
