//! Session-scoped catalog: the fetched products plus everything derived from
//! them once (category index, category list).

use storefront_core::{DomainError, DomainResult, ProductId};

use crate::config::QueryConfig;
use crate::engine::{compute_suggestions, compute_visible_products, related_products};
use crate::filters::{ActiveFilter, FilterState};
use crate::ingest::{RawProduct, sanitize_catalog};
use crate::product::Product;
use crate::route::{CategoryIndex, Route};
use crate::sort::SortOption;

/// Complete listing query as held by the UI layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogQuery {
    pub filters: FilterState,
    pub search: String,
    pub sort: SortOption,
    pub route: Route,
}

impl CatalogQuery {
    /// Active-filter chips: the search text, if any, then the facets that
    /// differ from `initial`.
    pub fn active_filters(&self, initial: &FilterState) -> Vec<ActiveFilter> {
        let mut active = Vec::new();
        let search = self.search.trim();
        if !search.is_empty() {
            active.push(ActiveFilter::Search(search.to_string()));
        }
        active.extend(self.filters.active_filters(initial));
        active
    }

    /// Drop one chip; the search chip empties the search text.
    pub fn remove(&mut self, filter: &ActiveFilter, initial: &FilterState) {
        match filter {
            ActiveFilter::Search(_) => self.search.clear(),
            other => self.filters.remove(other, initial),
        }
    }

    /// "Clear all": facets back to `initial` and no search text. Sort order
    /// and route are kept.
    pub fn clear(&mut self, initial: &FilterState) {
        self.filters.clear(initial);
        self.search.clear();
    }
}

/// Read-only product collection for one session.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<String>,
    index: CategoryIndex,
    config: QueryConfig,
}

impl Catalog {
    pub fn new(products: Vec<Product>, config: QueryConfig) -> Self {
        let mut categories: Vec<String> = Vec::new();
        for p in &products {
            if !p.category.is_empty() && !categories.contains(&p.category) {
                categories.push(p.category.clone());
            }
        }
        let index = CategoryIndex::from_categories(&categories);

        tracing::info!(
            products = products.len(),
            categories = categories.len(),
            "catalog loaded"
        );

        Self {
            products,
            categories,
            index,
            config,
        }
    }

    pub fn from_raw(raw: impl IntoIterator<Item = RawProduct>, config: QueryConfig) -> Self {
        Self::new(sanitize_catalog(raw), config)
    }

    pub fn empty(config: QueryConfig) -> Self {
        Self::new(Vec::new(), config)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Distinct categories in first-appearance order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn category_index(&self) -> &CategoryIndex {
        &self.index
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn require(&self, id: ProductId) -> DomainResult<&Product> {
        self.get(id)
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))
    }

    /// Parse a hash path against this catalog's category table.
    pub fn parse_route(&self, path: &str) -> Route {
        Route::parse_with(path, &self.index)
    }

    pub fn visible(&self, query: &CatalogQuery) -> Vec<&Product> {
        compute_visible_products(
            &self.products,
            &query.filters,
            &query.search,
            query.sort,
            &query.route,
            &self.config,
        )
    }

    pub fn suggestions(&self, query: &str) -> Vec<&Product> {
        compute_suggestions(&self.products, query, &self.config)
    }

    /// Related products for a detail page; unknown ids have none.
    pub fn related(&self, id: ProductId) -> Vec<&Product> {
        match self.get(id) {
            Some(product) => related_products(&self.products, product, self.config.related_limit),
            None => Vec::new(),
        }
    }
}
