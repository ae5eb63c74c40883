//! The catalog query pipeline.
//!
//! Every function here is a pure pass over a borrowed product slice: nothing
//! is cached between calls and nothing is mutated, so recomputing after any
//! input change always yields the same ordered output for the same inputs.

use crate::config::QueryConfig;
use crate::filters::FilterState;
use crate::product::Product;
use crate::route::Route;
use crate::search::SearchQuery;
use crate::sort::SortOption;
use crate::suggest::rank_suggestions;

/// Products visible on a listing, in display order.
///
/// Stages run in a fixed order: text search, route category, selected
/// categories, price, sizes, certifications, availability, then one stable
/// sort. An empty result is a normal outcome.
pub fn compute_visible_products<'a>(
    products: &'a [Product],
    filters: &FilterState,
    query: &str,
    sort: SortOption,
    route: &Route,
    config: &QueryConfig,
) -> Vec<&'a Product> {
    let search = SearchQuery::new(query);
    let route_category = route.category();

    let mut visible: Vec<&Product> = products
        .iter()
        .filter(|p| search.admits(p, config.min_search_chars))
        .filter(|p| route_category.is_none_or(|category| p.category == category))
        .filter(|p| filters.matches(p))
        .collect();

    sort.sort(&mut visible);

    tracing::debug!(
        total = products.len(),
        visible = visible.len(),
        query = search.as_str(),
        route_category,
        sort = sort.as_str(),
        "computed visible products"
    );

    visible
}

/// Type-ahead suggestions for the search box (at most
/// `config.suggestion_limit`).
pub fn compute_suggestions<'a>(
    products: &'a [Product],
    query: &str,
    config: &QueryConfig,
) -> Vec<&'a Product> {
    rank_suggestions(products, query, config)
}

/// Other products in the same category, in catalog order.
pub fn related_products<'a>(
    products: &'a [Product],
    product: &Product,
    limit: usize,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| p.category == product.category && p.id != product.id)
        .take(limit)
        .collect()
}
