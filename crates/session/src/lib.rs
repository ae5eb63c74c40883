//! Shopper session state (cart and wishlist).
//!
//! State is held in an explicitly owned [`SessionStore`] and persisted through
//! a [`KeyValueStore`] at session boundaries; nothing here is global.

pub mod cart;
pub mod kv;
pub mod store;
pub mod wishlist;

pub use cart::{Cart, CartItem};
pub use kv::{InMemoryKeyValueStore, KeyValueStore, StoreError};
pub use store::{CART_KEY, SessionStore, WISHLIST_KEY};
pub use wishlist::{Wishlist, WishlistChange};
