//! Store configuration loading.

use std::path::PathBuf;

use crate::bill_store::{BillStore, DEFAULT_STORAGE_KEY};
use crate::blob_store::FileBlobStore;
use crate::id_gen::{IdGenerator, SequentialIds, UuidIds};

pub const ENV_DATA_DIR: &str = "BILLSPLIT_DATA_DIR";
pub const ENV_STORAGE_KEY: &str = "BILLSPLIT_STORAGE_KEY";
pub const ENV_ID_STRATEGY: &str = "BILLSPLIT_ID_STRATEGY";

const DEFAULT_DATA_DIR: &str = "./data";

/// How new bill ids are minted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdStrategy {
    #[default]
    Sequential,
    Uuid,
}

impl IdStrategy {
    pub fn parse(s: &str) -> Option<IdStrategy> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Some(IdStrategy::Sequential),
            "uuid" => Some(IdStrategy::Uuid),
            _ => None,
        }
    }

    pub fn generator(self) -> Box<dyn IdGenerator> {
        match self {
            IdStrategy::Sequential => Box::new(SequentialIds::new()),
            IdStrategy::Uuid => Box::new(UuidIds),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    pub storage_key: String,
    pub id_strategy: IdStrategy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            id_strategy: IdStrategy::default(),
        }
    }
}

impl StoreConfig {
    /// Read `BILLSPLIT_*` environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let id_strategy = match get(ENV_ID_STRATEGY) {
            None => defaults.id_strategy,
            Some(raw) => IdStrategy::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(
                    value = %raw,
                    "BILLSPLIT_ID_STRATEGY not recognised; using sequential ids"
                );
                IdStrategy::Sequential
            }),
        };

        Self {
            data_dir: get(ENV_DATA_DIR).map(PathBuf::from).unwrap_or(defaults.data_dir),
            storage_key: get(ENV_STORAGE_KEY).unwrap_or(defaults.storage_key),
            id_strategy,
        }
    }
}

/// File-backed store described by `config`.
pub fn open_file_store(config: &StoreConfig) -> BillStore<FileBlobStore, Box<dyn IdGenerator>> {
    tracing::info!(
        data_dir = %config.data_dir.display(),
        key = %config.storage_key,
        ids = ?config.id_strategy,
        "opening bill store"
    );
    BillStore::new(
        FileBlobStore::new(&config.data_dir),
        config.id_strategy.generator(),
    )
    .with_key(config.storage_key.clone())
}
