//! Durable bill collection.
//!
//! `BillStore` owns the persisted list of bills. The whole collection lives as
//! one JSON array under a single storage key of an injected [`BlobStore`];
//! every mutation loads it, changes it and writes it back in one overwrite.
//!
//! ## Read vs write failures
//!
//! The collection is a best-effort local cache, so read paths degrade: a
//! missing blob is an empty collection, and an unreadable or malformed blob is
//! logged and also treated as empty. Writes never degrade: persistence
//! failures are returned to the caller, and a mutation over a corrupt blob is
//! refused with [`StoreError::Persistence`] instead of overwriting it.
//!
//! ## Trust boundary
//!
//! The store does not validate. Input is validated at the command surface
//! ([`crate::commands::BillCommands`]); the typed `NewBill`/`BillPatch` values
//! it receives already satisfy the bill invariants.
//!
//! ## Concurrency
//!
//! Methods take `&self`. Mutations are serialized by an internal mutex, so two
//! writes to the same bill resolve last-write-wins; reads take no store lock
//! and see the collection either before or after a completed write.

use std::sync::Mutex;

use chrono::NaiveDate;
use thiserror::Error;

use billsplit_bills::{Bill, BillPatch, CategoryId, NewBill};
use billsplit_core::{Amount, BillId, Entity};

use crate::blob_store::{BlobStore, BlobStoreError};
use crate::id_gen::{IdGenerator, SequentialIds};

/// Storage key used unless the store is configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "bills";

#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be read or written. Retryable.
    #[error("persistence failed: {0}")]
    Persistence(String),

    /// The stored collection could not be decoded (malformed JSON, unknown
    /// payer or category, ...). Reported by reads only.
    #[error("stored bills are corrupt: {0}")]
    CorruptData(String),
}

impl From<BlobStoreError> for StoreError {
    fn from(value: BlobStoreError) -> Self {
        StoreError::Persistence(value.to_string())
    }
}

/// Bill collection over an injected blob store and id generator.
#[derive(Debug)]
pub struct BillStore<B, G = SequentialIds> {
    blobs: B,
    ids: G,
    key: String,
    write_lock: Mutex<()>,
}

impl<B> BillStore<B, SequentialIds>
where
    B: BlobStore,
{
    /// Store with sequential ids under [`DEFAULT_STORAGE_KEY`].
    pub fn in_blob_store(blobs: B) -> Self {
        Self::new(blobs, SequentialIds::new())
    }
}

impl<B, G> BillStore<B, G>
where
    B: BlobStore,
    G: IdGenerator,
{
    pub fn new(blobs: B, ids: G) -> Self {
        Self {
            blobs,
            ids,
            key: DEFAULT_STORAGE_KEY.to_string(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn blob_store(&self) -> &B {
        &self.blobs
    }

    // ---- queries -------------------------------------------------------

    /// Every stored bill, in storage order. Degrades to empty on read failure.
    pub fn list_all(&self) -> Vec<Bill> {
        match self.load() {
            Ok(bills) => bills,
            Err(err) => {
                tracing::warn!(
                    key = %self.key,
                    error = %err,
                    "bill collection unreadable; treating as empty"
                );
                Vec::new()
            }
        }
    }

    /// Like [`list_all`](Self::list_all) but surfaces read failures.
    pub fn try_list_all(&self) -> Result<Vec<Bill>, StoreError> {
        self.load()
    }

    pub fn get(&self, id: &BillId) -> Option<Bill> {
        self.list_all().into_iter().find(|b| b.id() == id)
    }

    /// Bills in one category. `key` may be a category id or display name;
    /// empty or unknown keys match nothing.
    pub fn list_by_category(&self, key: &str) -> Vec<Bill> {
        let Some(category) = CategoryId::resolve(key) else {
            return Vec::new();
        };
        self.list_all()
            .into_iter()
            .filter(|b| b.category() == category)
            .collect()
    }

    pub fn category_total(&self, key: &str) -> Amount {
        self.list_by_category(key).iter().map(Bill::amount).sum()
    }

    pub fn total_expense(&self) -> Amount {
        self.list_all().iter().map(Bill::amount).sum()
    }

    /// Bills whose calendar day lies in `[start, end]`; empty when `start > end`.
    pub fn by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<Bill> {
        if start > end {
            return Vec::new();
        }
        self.list_all()
            .into_iter()
            .filter(|b| (start..=end).contains(&b.date().day()))
            .collect()
    }

    // ---- commands ------------------------------------------------------

    /// Assign an id, append and persist. Does not validate.
    pub fn add(&self, bill: NewBill) -> Result<Bill, StoreError> {
        self.mutate(|bills| {
            let id = self.ids.next_id(bills);
            let stored = Bill::new(id, bill);
            bills.push(stored.clone());
            tracing::debug!(id = %stored.id(), count = bills.len(), "bill added");
            (stored, true)
        })
    }

    /// Remove the bill with `id`. Absent ids are a no-op.
    pub fn delete(&self, id: &BillId) -> Result<(), StoreError> {
        self.mutate(|bills| {
            let before = bills.len();
            bills.retain(|b| b.id() != id);
            let removed = bills.len() != before;
            if removed {
                tracing::debug!(%id, count = bills.len(), "bill deleted");
            } else {
                tracing::debug!(%id, "delete of unknown bill ignored");
            }
            ((), removed)
        })
    }

    /// Merge `patch` into the bill with `id`. `Ok(None)` when no such bill.
    pub fn update(&self, id: &BillId, patch: BillPatch) -> Result<Option<Bill>, StoreError> {
        self.mutate(|bills| {
            let Some(slot) = bills.iter_mut().find(|b| b.id() == id) else {
                tracing::debug!(%id, "update of unknown bill");
                return (None, false);
            };
            let updated = slot.clone().with_patch(patch);
            *slot = updated.clone();
            tracing::debug!(%id, "bill updated");
            (Some(updated), true)
        })
    }

    /// Replace the collection with an empty one.
    pub fn clear(&self) -> Result<(), StoreError> {
        let _guard = self.lock()?;
        self.save(&[])?;
        tracing::debug!(key = %self.key, "bill collection cleared");
        Ok(())
    }

    // ---- internals -----------------------------------------------------

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, ()>, StoreError> {
        self.write_lock
            .lock()
            .map_err(|_| StoreError::Persistence("write lock poisoned".to_string()))
    }

    /// Load → modify → save under the write lock. `f` returns its result and
    /// whether the collection changed (unchanged collections are not rewritten).
    fn mutate<T>(&self, f: impl FnOnce(&mut Vec<Bill>) -> (T, bool)) -> Result<T, StoreError> {
        let _guard = self.lock()?;
        let mut bills = self.load().map_err(|err| match err {
            StoreError::CorruptData(reason) => {
                tracing::error!(
                    key = %self.key,
                    %reason,
                    "refusing to overwrite corrupt bills"
                );
                StoreError::Persistence(format!("stored bills are corrupt: {reason}"))
            }
            other => other,
        })?;
        let (out, changed) = f(&mut bills);
        if changed {
            self.save(&bills)?;
        }
        Ok(out)
    }

    fn load(&self) -> Result<Vec<Bill>, StoreError> {
        let Some(bytes) = self.blobs.load(&self.key)? else {
            return Ok(Vec::new());
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        serde_json::from_slice(&bytes).map_err(|e| StoreError::CorruptData(e.to_string()))
    }

    fn save(&self, bills: &[Bill]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(bills)
            .map_err(|e| StoreError::Persistence(format!("failed to encode bills: {e}")))?;
        self.blobs.save(&self.key, &bytes).map_err(|err| {
            tracing::error!(key = %self.key, error = %err, "failed to persist bills");
            StoreError::from(err)
        })
    }
}
