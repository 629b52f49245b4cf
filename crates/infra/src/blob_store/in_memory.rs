use std::collections::HashMap;
use std::sync::RwLock;

use super::r#trait::{BlobStore, BlobStoreError};

/// In-memory blob store.
///
/// Intended for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryBlobStore {
    blobs: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a key with raw bytes (e.g. a hand-written or damaged payload).
    pub fn with_blob(self, key: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        if let Ok(mut blobs) = self.blobs.write() {
            blobs.insert(key.into(), bytes.into());
        }
        self
    }
}

impl BlobStore for InMemoryBlobStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, BlobStoreError> {
        let blobs = self
            .blobs
            .read()
            .map_err(|_| BlobStoreError::LockPoisoned("in-memory blobs".to_string()))?;
        Ok(blobs.get(key).cloned())
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), BlobStoreError> {
        let mut blobs = self
            .blobs
            .write()
            .map_err(|_| BlobStoreError::LockPoisoned("in-memory blobs".to_string()))?;
        blobs.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_loads_as_none() {
        let store = InMemoryBlobStore::new();
        assert!(store.load("bills").unwrap().is_none());
    }

    #[test]
    fn save_overwrites_previous_payload() {
        let store = InMemoryBlobStore::new();
        store.save("bills", b"[1]").unwrap();
        store.save("bills", b"[]").unwrap();
        assert_eq!(store.load("bills").unwrap().as_deref(), Some(&b"[]"[..]));
        assert!(store.load("other").unwrap().is_none());
    }

    #[test]
    fn seeded_blob_is_visible() {
        let store = InMemoryBlobStore::new().with_blob("bills", "not json");
        assert_eq!(store.load("bills").unwrap(), Some(b"not json".to_vec()));
    }
}
