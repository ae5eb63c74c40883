//! Ingestion boundary: loosely typed backend records → validated [`Product`]s.
//!
//! Backend documents are hand-edited and imported from spreadsheets, so any
//! field may be missing or carry the wrong JSON type. Sanitization happens
//! exactly once, here, so the query engine can treat every numeric field as a
//! finite number and every list as present.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use storefront_core::{DomainError, DomainResult, ProductId};

use crate::product::Product;

/// Product record exactly as delivered by a product source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    #[serde(default)]
    pub id: JsonValue,
    #[serde(default)]
    pub name: JsonValue,
    #[serde(default)]
    pub sku: JsonValue,
    #[serde(default)]
    pub category: JsonValue,
    #[serde(default)]
    pub description: JsonValue,
    #[serde(default)]
    pub price: JsonValue,
    #[serde(default)]
    pub original_price: JsonValue,
    #[serde(default)]
    pub rating: JsonValue,
    #[serde(default)]
    pub sizes: JsonValue,
    #[serde(default)]
    pub certifications: JsonValue,
    #[serde(default)]
    pub in_stock: JsonValue,
    #[serde(default)]
    pub bulk_available: JsonValue,
    #[serde(default)]
    pub image_urls: JsonValue,
    #[serde(default)]
    pub slug: JsonValue,
    #[serde(default)]
    pub moq: JsonValue,
    #[serde(default)]
    pub material: JsonValue,
    #[serde(default)]
    pub features: JsonValue,
}

impl TryFrom<RawProduct> for Product {
    type Error = DomainError;

    fn try_from(raw: RawProduct) -> DomainResult<Self> {
        let id = coerce_id(&raw.id)?;
        Ok(Product {
            id,
            name: coerce_text(&raw.name),
            sku: coerce_text(&raw.sku),
            category: coerce_text(&raw.category),
            description: coerce_text(&raw.description),
            price: coerce_amount(&raw.price),
            original_price: coerce_amount(&raw.original_price),
            rating: coerce_number(&raw.rating),
            sizes: coerce_labels(&raw.sizes),
            certifications: coerce_labels(&raw.certifications),
            in_stock: coerce_flag(&raw.in_stock),
            bulk_available: coerce_flag(&raw.bulk_available),
            image_urls: coerce_labels(&raw.image_urls),
            slug: coerce_optional_text(&raw.slug),
            moq: coerce_quantity(&raw.moq),
            material: coerce_optional_text(&raw.material),
            features: coerce_labels(&raw.features),
        })
    }
}

/// Sanitize a whole fetched collection, preserving source order.
///
/// Records with an unusable id are skipped, as are repeated ids (the first
/// occurrence wins). Both cases are logged; neither aborts the load.
pub fn sanitize_catalog(raw: impl IntoIterator<Item = RawProduct>) -> Vec<Product> {
    let mut seen = HashSet::new();
    let mut products = Vec::new();

    for (index, record) in raw.into_iter().enumerate() {
        match Product::try_from(record) {
            Ok(product) => {
                if !seen.insert(product.id) {
                    tracing::warn!(index, product_id = %product.id, "skipping duplicate product id");
                    continue;
                }
                products.push(product);
            }
            Err(err) => {
                tracing::warn!(index, error = %err, "skipping malformed product record");
            }
        }
    }

    products
}

fn coerce_id(value: &JsonValue) -> DomainResult<ProductId> {
    match value {
        JsonValue::Number(n) => n
            .as_u64()
            .map(ProductId::new)
            .ok_or_else(|| DomainError::invalid_id(format!("`{n}` is not a product id"))),
        JsonValue::String(s) => s.parse(),
        JsonValue::Null => Err(DomainError::invalid_id("missing product id")),
        other => Err(DomainError::invalid_id(format!("`{other}` is not a product id"))),
    }
}

fn coerce_text(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

fn coerce_optional_text(value: &JsonValue) -> Option<String> {
    let text = coerce_text(value);
    if text.trim().is_empty() { None } else { Some(text) }
}

/// Finite number from a JSON number or numeric string, else 0.
fn coerce_number(value: &JsonValue) -> f64 {
    let n = match value {
        JsonValue::Number(n) => n.as_f64().unwrap_or(0.0),
        JsonValue::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if n.is_finite() { n } else { 0.0 }
}

/// Like [`coerce_number`], but negative amounts also collapse to 0.
fn coerce_amount(value: &JsonValue) -> f64 {
    let n = coerce_number(value);
    if n > 0.0 { n } else { 0.0 }
}

fn coerce_quantity(value: &JsonValue) -> Option<u32> {
    match value {
        JsonValue::Number(n) => n.as_u64().and_then(|q| u32::try_from(q).ok()),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_flag(value: &JsonValue) -> bool {
    match value {
        JsonValue::Bool(b) => *b,
        JsonValue::String(s) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    }
}

fn coerce_labels(value: &JsonValue) -> Vec<String> {
    match value {
        JsonValue::Array(items) => items
            .iter()
            .map(coerce_text)
            .filter(|label| !label.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}
