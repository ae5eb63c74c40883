//! Free-text matching over product text fields.

use crate::product::Product;

/// A product text field that free-text queries can match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    Sku,
    Category,
    Description,
}

impl SearchField {
    pub fn value<'a>(&self, product: &'a Product) -> &'a str {
        match self {
            SearchField::Name => &product.name,
            SearchField::Sku => &product.sku,
            SearchField::Category => &product.category,
            SearchField::Description => &product.description,
        }
    }
}

/// Fields searched by the listing query.
pub const FULL_TEXT_FIELDS: &[SearchField] = &[
    SearchField::Name,
    SearchField::Sku,
    SearchField::Category,
    SearchField::Description,
];

/// Fields searched by type-ahead suggestions (descriptions are excluded).
pub const SUGGESTION_FIELDS: &[SearchField] =
    &[SearchField::Name, SearchField::Sku, SearchField::Category];

/// A case-folded, trimmed free-text query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    folded: String,
}

impl SearchQuery {
    pub fn new(query: &str) -> Self {
        Self {
            folded: query.trim().to_lowercase(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.folded
    }

    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }

    /// Length in characters (not bytes).
    pub fn len(&self) -> usize {
        self.folded.chars().count()
    }

    /// Whether the query is long enough to constrain results.
    pub fn is_active(&self, min_chars: usize) -> bool {
        !self.is_empty() && self.len() >= min_chars
    }

    /// Case-insensitive substring match against any of `fields`.
    pub fn matches_any(&self, product: &Product, fields: &[SearchField]) -> bool {
        fields
            .iter()
            .any(|field| field.value(product).to_lowercase().contains(&self.folded))
    }

    /// Listing predicate: inactive queries keep every product.
    pub fn admits(&self, product: &Product, min_chars: usize) -> bool {
        !self.is_active(min_chars) || self.matches_any(product, FULL_TEXT_FIELDS)
    }

    /// Whether the product name starts with the query.
    pub fn is_name_prefix_of(&self, product: &Product) -> bool {
        product.name.to_lowercase().starts_with(&self.folded)
    }
}
