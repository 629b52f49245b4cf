//! Command surface used by the presentation layer.
//!
//! `BillCommands` is the validation boundary: raw drafts are checked here and
//! rejected with a field-specific [`DomainError`] before the store is touched.
//! The wrapped [`BillStore`] trusts what it receives and is also the query
//! surface (`commands.store().list_all()`, ...).

use thiserror::Error;

use billsplit_bills::{Bill, BillDraft, BillPatchDraft};
use billsplit_core::{BillId, DomainError};

use crate::bill_store::{BillStore, StoreError};
use crate::blob_store::BlobStore;
use crate::id_gen::IdGenerator;

#[derive(Debug, Error)]
pub enum CommandError {
    /// Input rejected before any state change.
    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CommandError {
    /// Whether repeating the same command may succeed (storage hiccups).
    pub fn is_retryable(&self) -> bool {
        matches!(self, CommandError::Store(StoreError::Persistence(_)))
    }

    /// Offending field for validation failures.
    pub fn field(&self) -> Option<&str> {
        match self {
            CommandError::Validation(err) => err.field(),
            CommandError::Store(_) => None,
        }
    }
}

#[derive(Debug)]
pub struct BillCommands<B, G> {
    store: BillStore<B, G>,
}

impl<B, G> BillCommands<B, G>
where
    B: BlobStore,
    G: IdGenerator,
{
    pub fn new(store: BillStore<B, G>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &BillStore<B, G> {
        &self.store
    }

    pub fn into_store(self) -> BillStore<B, G> {
        self.store
    }

    pub fn add_bill(&self, draft: &BillDraft) -> Result<Bill, CommandError> {
        let bill = draft.validate().inspect_err(|err| {
            tracing::debug!(error = %err, "add_bill rejected");
        })?;
        Ok(self.store.add(bill)?)
    }

    /// `Ok(None)` when no bill has `id`.
    pub fn update_bill(
        &self,
        id: &BillId,
        draft: &BillPatchDraft,
    ) -> Result<Option<Bill>, CommandError> {
        let patch = draft.validate().inspect_err(|err| {
            tracing::debug!(%id, error = %err, "update_bill rejected");
        })?;
        Ok(self.store.update(id, patch)?)
    }

    pub fn delete_bill(&self, id: &BillId) -> Result<(), CommandError> {
        Ok(self.store.delete(id)?)
    }
}
