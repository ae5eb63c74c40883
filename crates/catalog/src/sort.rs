//! Listing sort orders.

use core::cmp::Ordering;

use crate::product::Product;

/// Sort order selected in the listing toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    /// Ascending id.
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
    /// Highest rated first.
    Rating,
}

impl SortOption {
    /// Parse a toolbar value. Unrecognized values fall back to `Featured`.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "price-asc" => SortOption::PriceAsc,
            "price-desc" => SortOption::PriceDesc,
            "rating" => SortOption::Rating,
            _ => SortOption::Featured,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::Rating => "rating",
        }
    }

    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::Featured => a.id.cmp(&b.id),
            SortOption::PriceAsc => a.effective_price().total_cmp(&b.effective_price()),
            SortOption::PriceDesc => b.effective_price().total_cmp(&a.effective_price()),
            SortOption::Rating => b.effective_rating().total_cmp(&a.effective_rating()),
        }
    }

    /// Stable in-place sort; equal keys keep their input order.
    pub fn sort(&self, products: &mut [&Product]) {
        products.sort_by(|a, b| self.compare(a, b));
    }
}
