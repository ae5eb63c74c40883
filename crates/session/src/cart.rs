use serde::{Deserialize, Serialize};

use storefront_catalog::Product;
use storefront_core::{DomainError, DomainResult, ProductId};

/// One cart line: a snapshot of the product at the time it was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

/// Shopping cart, persisted as a JSON array of `{product, quantity}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units; an existing line for the same product grows.
    pub fn add(&mut self, product: &Product, quantity: u32) -> DomainResult<()> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be at least 1"));
        }

        match self.items.iter_mut().find(|item| item.product.id == product.id) {
            Some(item) => item.quantity = item.quantity.saturating_add(quantity),
            None => self.items.push(CartItem {
                product: product.clone(),
                quantity,
            }),
        }
        Ok(())
    }

    /// Set a line's quantity. Zero or negative removes the line; unknown ids
    /// are ignored. Returns whether the cart changed.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(id);
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.items.iter_mut().find(|item| item.product.id == id) {
            Some(item) if item.quantity != quantity => {
                item.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.product.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.items
            .iter()
            .find(|item| item.product.id == id)
            .map_or(0, |item| item.quantity)
    }

    /// Total units across all lines (the header badge count).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64) -> Product {
        Product::new(ProductId::new(id), format!("item {id}"), "Knee Support")
    }

    #[test]
    fn add_merges_lines_for_the_same_product() {
        let mut cart = Cart::new();
        cart.add(&product(1), 2).unwrap();
        cart.add(&product(2), 1).unwrap();
        cart.add(&product(1), 3).unwrap();

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.quantity_of(ProductId::new(1)), 5);
        assert_eq!(cart.item_count(), 6);
    }

    #[test]
    fn add_rejects_zero_quantity() {
        let mut cart = Cart::new();
        let err = cart.add(&product(1), 0).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(cart.is_empty());
    }

    #[test]
    fn non_positive_update_removes_line() {
        let mut cart = Cart::new();
        cart.add(&product(1), 2).unwrap();
        assert!(cart.update_quantity(ProductId::new(1), 0));
        assert!(cart.is_empty());

        cart.add(&product(1), 2).unwrap();
        assert!(cart.update_quantity(ProductId::new(1), -4));
        assert!(cart.is_empty());
    }

    #[test]
    fn update_sets_quantity_and_ignores_unknown_ids() {
        let mut cart = Cart::new();
        cart.add(&product(1), 2).unwrap();
        assert!(cart.update_quantity(ProductId::new(1), 7));
        assert_eq!(cart.quantity_of(ProductId::new(1)), 7);
        assert!(!cart.update_quantity(ProductId::new(1), 7));
        assert!(!cart.update_quantity(ProductId::new(9), 3));
        assert!(!cart.remove(ProductId::new(9)));
    }

    #[test]
    fn persists_as_product_quantity_pairs() {
        let mut cart = Cart::new();
        cart.add(&product(1), 2).unwrap();
        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(json[0]["quantity"], 2);
        assert_eq!(json[0]["product"]["id"], 1);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: the badge count is the sum of every added quantity.
            #[test]
            fn item_count_is_sum_of_additions(
                adds in prop::collection::vec((1u64..6, 1u32..20), 0..40)
            ) {
                let mut cart = Cart::new();
                let mut expected = 0u64;
                for (id, qty) in adds {
                    cart.add(&product(id), qty).unwrap();
                    expected += u64::from(qty);
                }
                prop_assert_eq!(cart.item_count(), expected);
                prop_assert!(cart.items().len() <= 5);
            }
        }
    }
}
