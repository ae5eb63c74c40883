use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage io failure for key `{key}`: {message}")]
    Io { key: String, message: String },

    #[error("failed to serialize `{key}`: {message}")]
    Serialize { key: String, message: String },

    #[error("invalid storage key `{0}`")]
    InvalidKey(String),

    #[error("store lock poisoned")]
    Poisoned,
}

/// Flat string key/value persistence (the browser's local storage, a
/// directory of files, ...).
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<S> KeyValueStore for Arc<S>
where
    S: KeyValueStore + ?Sized,
{
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// In-memory store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    inner: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let map = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        map.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        map.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let store = InMemoryKeyValueStore::new();
        assert_eq!(store.get("cart").unwrap(), None);
        store.set("cart", "[]".to_string()).unwrap();
        assert_eq!(store.get("cart").unwrap().as_deref(), Some("[]"));
        store.remove("cart").unwrap();
        assert_eq!(store.get("cart").unwrap(), None);
    }

    #[test]
    fn shared_handles_see_the_same_data() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let other = Arc::clone(&store);
        store.set("wishlist", "[1]".to_string()).unwrap();
        assert_eq!(other.get("wishlist").unwrap().as_deref(), Some("[1]"));
    }
}
