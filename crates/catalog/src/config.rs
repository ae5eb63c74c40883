//! Tunable thresholds of the query engine.

use serde::{Deserialize, Serialize};

/// Query engine configuration.
///
/// The defaults reproduce the storefront's long-standing behavior: one-letter
/// queries never filter, the type-ahead list shows at most eight entries and a
/// detail page lists three related products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Queries with fewer characters than this do not filter the listing.
    pub min_search_chars: usize,
    /// Queries with fewer characters than this produce no suggestions.
    pub min_suggestion_chars: usize,
    /// Maximum number of type-ahead suggestions.
    pub suggestion_limit: usize,
    /// Maximum number of related products on a detail page.
    pub related_limit: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            min_search_chars: 2,
            min_suggestion_chars: 2,
            suggestion_limit: 8,
            related_limit: 3,
        }
    }
}
