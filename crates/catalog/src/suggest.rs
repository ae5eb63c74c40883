//! Type-ahead suggestion ranking.

use crate::config::QueryConfig;
use crate::product::Product;
use crate::search::{SUGGESTION_FIELDS, SearchQuery};

/// Rank products for the search box drop-down.
///
/// Candidates match the query in name, SKU or category. Names starting with
/// the query come first; otherwise input order is kept (a stable partition,
/// not a scored sort). Short queries yield nothing.
pub fn rank_suggestions<'a>(
    products: &'a [Product],
    query: &str,
    config: &QueryConfig,
) -> Vec<&'a Product> {
    let query = SearchQuery::new(query);
    if !query.is_active(config.min_suggestion_chars) {
        return Vec::new();
    }

    let (prefixed, rest): (Vec<&Product>, Vec<&Product>) = products
        .iter()
        .filter(|p| query.matches_any(p, SUGGESTION_FIELDS))
        .partition(|p| query.is_name_prefix_of(p));

    prefixed
        .into_iter()
        .chain(rest)
        .take(config.suggestion_limit)
        .collect()
}
