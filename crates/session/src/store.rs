//! Session state and its persistence at session boundaries.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::cart::Cart;
use crate::kv::{KeyValueStore, StoreError};
use crate::wishlist::Wishlist;

/// Storage key of the wishlist (JSON array of product ids).
pub const WISHLIST_KEY: &str = "wishlist";
/// Storage key of the cart (JSON array of `{product, quantity}`).
pub const CART_KEY: &str = "cart";

/// Explicitly owned shopper state; callers pass it by reference to whatever
/// renders or mutates it and call [`SessionStore::save`] when done.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionStore {
    pub cart: Cart,
    pub wishlist: Wishlist,
}

impl SessionStore {
    /// Load both collections. Missing keys load empty; unreadable payloads
    /// are logged and load empty too, so a corrupt entry never blocks the
    /// session. Backend failures are returned.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Self, StoreError> {
        Ok(Self {
            cart: load_key(store, CART_KEY)?,
            wishlist: load_key(store, WISHLIST_KEY)?,
        })
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &S) -> Result<(), StoreError> {
        save_key(store, CART_KEY, &self.cart)?;
        save_key(store, WISHLIST_KEY, &self.wishlist)?;
        tracing::debug!(
            cart_lines = self.cart.items().len(),
            wishlist = self.wishlist.len(),
            "session saved"
        );
        Ok(())
    }
}

fn load_key<S, T>(store: &S, key: &str) -> Result<T, StoreError>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned + Default,
{
    let Some(raw) = store.get(key)? else {
        return Ok(T::default());
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(err) => {
            tracing::warn!(key, error = %err, "discarding unreadable session entry");
            Ok(T::default())
        }
    }
}

fn save_key<S, T>(store: &S, key: &str, value: &T) -> Result<(), StoreError>
where
    S: KeyValueStore + ?Sized,
    T: Serialize,
{
    let json = serde_json::to_string(value).map_err(|e| StoreError::Serialize {
        key: key.to_string(),
        message: e.to_string(),
    })?;
    store.set(key, json)
}
