use serde::{Deserialize, Serialize};

use storefront_core::ProductId;

/// Discount (in whole percent) above which listings show a discount badge.
pub const DISCOUNT_BADGE_THRESHOLD: u32 = 5;

/// Catalog product.
///
/// Ingestion (see [`crate::ingest`]) only produces finite, non-negative
/// prices. Products built by hand may carry anything; the engine reads
/// non-finite prices and ratings as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub description: String,
    pub price: f64,
    pub original_price: f64,
    pub rating: f64,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    pub in_stock: bool,
    pub bulk_available: bool,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moq: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Product {
    /// Minimal product with the given identity; every other field is empty.
    pub fn new(id: ProductId, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            sku: String::new(),
            category: category.into(),
            description: String::new(),
            price: 0.0,
            original_price: 0.0,
            rating: 0.0,
            sizes: Vec::new(),
            certifications: Vec::new(),
            in_stock: false,
            bulk_available: false,
            image_urls: Vec::new(),
            slug: None,
            moq: None,
            material: None,
            features: Vec::new(),
        }
    }

    /// Savings relative to `original_price`, rounded to whole percent.
    ///
    /// Zero when there is no usable original price. A price above the
    /// original yields zero rather than a negative discount.
    pub fn discount_percent(&self) -> u32 {
        if self.original_price <= 0.0 {
            return 0;
        }
        let pct = ((self.original_price - self.price) / self.original_price * 100.0).round();
        if pct <= 0.0 { 0 } else { pct as u32 }
    }

    pub fn shows_discount_badge(&self) -> bool {
        self.discount_percent() > DISCOUNT_BADGE_THRESHOLD
    }

    pub fn primary_image(&self) -> Option<&str> {
        self.image_urls.first().map(String::as_str)
    }

    /// Price as seen by range checks and sorting.
    pub fn effective_price(&self) -> f64 {
        finite_or_zero(self.price)
    }

    /// Rating as seen by sorting.
    pub fn effective_rating(&self) -> f64 {
        finite_or_zero(self.rating)
    }

    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    pub fn has_certification(&self, certification: &str) -> bool {
        self.certifications.iter().any(|c| c == certification)
    }
}

/// Non-finite values and negative zero become 0.
pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() && value != 0.0 { value } else { 0.0 }
}
