//! Infrastructure layer: blob persistence, the bill store, the command
//! surface and configuration.

pub mod bill_store;
pub mod blob_store;
pub mod commands;
pub mod config;
pub mod id_gen;

pub use bill_store::{BillStore, DEFAULT_STORAGE_KEY, StoreError};
pub use blob_store::{BlobStore, BlobStoreError, FileBlobStore, InMemoryBlobStore};
pub use commands::{BillCommands, CommandError};
pub use config::{IdStrategy, StoreConfig, open_file_store};
pub use id_gen::{IdGenerator, SequentialIds, UuidIds};
