//! Bill id assignment strategies.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use billsplit_bills::Bill;
use billsplit_core::{BillId, Entity};

/// Source of fresh bill ids.
///
/// `existing` is the collection the new bill is about to join; a generator
/// must never return an id already present in it.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self, existing: &[Bill]) -> BillId;
}

impl<G> IdGenerator for Arc<G>
where
    G: IdGenerator + ?Sized,
{
    fn next_id(&self, existing: &[Bill]) -> BillId {
        (**self).next_id(existing)
    }
}

impl<G> IdGenerator for Box<G>
where
    G: IdGenerator + ?Sized,
{
    fn next_id(&self, existing: &[Bill]) -> BillId {
        (**self).next_id(existing)
    }
}

/// Monotonic integer ids.
///
/// Each id is greater than every id this generator handed out before and
/// greater than every numeric id in the collection, so restarts over an
/// existing collection (including old timestamp ids) stay collision-free.
#[derive(Debug, Default)]
pub struct SequentialIds {
    last: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start after `last` (the next id will be `last + 1` at minimum).
    pub fn starting_after(last: u64) -> Self {
        Self {
            last: AtomicU64::new(last),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self, existing: &[Bill]) -> BillId {
        let floor = existing
            .iter()
            .filter_map(|b| b.id().as_sequence())
            .max()
            .unwrap_or(0);

        let bump = |last: u64| last.max(floor).saturating_add(1);
        // The closure always returns Some, so fetch_update cannot fail.
        let previous = match self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(bump(last)))
        {
            Ok(prev) | Err(prev) => prev,
        };
        BillId::from_sequence(bump(previous))
    }
}

/// Time-ordered UUIDv7 ids.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self, _existing: &[Bill]) -> BillId {
        BillId::from_uuid(Uuid::now_v7())
    }
}
