use std::sync::Arc;

use thiserror::Error;

/// Blob store operation error.
///
/// These are **infrastructure errors** (filesystem, locking) as opposed to
/// domain errors (validation, unknown records).
#[derive(Debug, Error)]
pub enum BlobStoreError {
    #[error("i/o error on '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    #[error("lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Key → payload store with whole-value load and overwrite.
///
/// Implementations must:
/// - return `Ok(None)` for a key that was never saved
/// - replace the payload atomically on `save` (readers see the old or the new
///   payload, never a mix)
pub trait BlobStore: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, BlobStoreError>;

    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), BlobStoreError>;
}

impl<S> BlobStore for Arc<S>
where
    S: BlobStore + ?Sized,
{
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, BlobStoreError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), BlobStoreError> {
        (**self).save(key, bytes)
    }
}
