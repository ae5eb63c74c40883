use serde::{Deserialize, Serialize};

use storefront_catalog::Product;
use storefront_core::ProductId;

/// Outcome of a wishlist toggle, used for the shopper notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishlistChange {
    Added,
    Removed,
}

impl WishlistChange {
    pub fn message(&self) -> &'static str {
        match self {
            WishlistChange::Added => "Added to wishlist!",
            WishlistChange::Removed => "Removed from wishlist.",
        }
    }
}

/// Wishlisted product ids in the order they were added.
///
/// Persisted as a bare JSON array of ids.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wishlist {
    ids: Vec<ProductId>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: ProductId) -> WishlistChange {
        if let Some(pos) = self.ids.iter().position(|i| *i == id) {
            self.ids.remove(pos);
            WishlistChange::Removed
        } else {
            self.ids.push(id);
            WishlistChange::Added
        }
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Wishlisted products present in `catalog`, in wishlist order. Ids that
    /// no longer exist in the catalog are skipped.
    pub fn resolve<'a>(&self, catalog: &'a [Product]) -> Vec<&'a Product> {
        self.ids
            .iter()
            .filter_map(|id| catalog.iter().find(|p| p.id == *id))
            .collect()
    }
}
