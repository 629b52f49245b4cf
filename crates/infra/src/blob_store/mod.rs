//! Whole-collection blob persistence.
//!
//! A blob store maps a key to one opaque byte payload. Loading returns the
//! full payload (or nothing); saving overwrites it in one step. The bill store
//! keeps its entire collection under a single key.

pub mod file;
pub mod in_memory;
pub mod r#trait;

pub use file::FileBlobStore;
pub use in_memory::InMemoryBlobStore;
pub use r#trait::{BlobStore, BlobStoreError};
