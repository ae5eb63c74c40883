//! Directory-backed key-value store: one `<key>.json` file per key.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use storefront_session::{KeyValueStore, StoreError};

#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// The directory is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

fn io_error(key: &str, err: std::io::Error) -> StoreError {
    StoreError::Io {
        key: key.to_string(),
        message: err.to_string(),
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_error(key, err)),
        }
    }

    /// Writes go to a temporary sibling first and are renamed into place, so
    /// readers never observe a half-written value.
    fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).map_err(|e| io_error(key, e))?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|e| io_error(key, e))?;
        fs::rename(&tmp, &path).map_err(|e| io_error(key, e))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(io_error(key, err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::Product;
    use storefront_core::ProductId;
    use storefront_session::SessionStore;

    #[test]
    fn missing_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path().join("session"));
        assert_eq!(store.get("cart").unwrap(), None);
        store.remove("cart").unwrap();
    }

    #[test]
    fn round_trips_values_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path().join("session"));
        store.set("wishlist", "[1,2]".to_string()).unwrap();

        assert!(dir.path().join("session").join("wishlist.json").exists());
        assert_eq!(store.get("wishlist").unwrap().as_deref(), Some("[1,2]"));

        store.remove("wishlist").unwrap();
        assert_eq!(store.get("wishlist").unwrap(), None);
    }

    #[test]
    fn rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path());
        for key in ["", "../cart", "a/b", "cart.json"] {
            assert!(matches!(store.get(key), Err(StoreError::InvalidKey(_))));
        }
    }

    #[test]
    fn session_survives_a_restart() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = SessionStore::default();
        session
            .cart
            .add(&Product::new(ProductId::new(3), "LS Belt", "Back & Posture"), 1)
            .unwrap();
        session.wishlist.toggle(ProductId::new(3));
        session.save(&FileKeyValueStore::new(dir.path())).unwrap();

        let restored = SessionStore::load(&FileKeyValueStore::new(dir.path())).unwrap();
        assert_eq!(restored, session);
    }
}
