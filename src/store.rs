//! In-memory, lock-guarded collection for one entity kind.
//!
//! Reads take the shared lock, mutations and id assignment take the exclusive
//! lock. Payloads are decoded by the caller before any lock is taken, and no
//! guard outlives the call that acquired it.

use crate::resource::{DeletePolicy, Resource};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

struct Inner<R> {
    records: Vec<R>,
    next_id: i64,
}

pub struct ResourceStore<R: Resource> {
    inner: RwLock<Inner<R>>,
}

impl<R: Resource> Default for ResourceStore<R> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<R: Resource> ResourceStore<R> {
    /// Store holding the kind's seed records.
    pub fn seeded() -> Self {
        let (records, next_id) = R::seed();
        Self::with_records(records, next_id)
    }

    pub fn empty() -> Self {
        Self::with_records(Vec::new(), 1)
    }

    /// `next_id` must be greater than every id in `records`.
    pub fn with_records(records: Vec<R>, next_id: i64) -> Self {
        ResourceStore {
            inner: RwLock::new(Inner { records, next_id }),
        }
    }

    // Every mutation is a single push/remove/assignment, so a panic in
    // another holder cannot leave the collection half-written.
    fn read(&self) -> RwLockReadGuard<'_, Inner<R>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner<R>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn create(&self, draft: R::Draft) -> R {
        let mut inner = self.write();
        let id = inner.next_id;
        inner.next_id += 1;
        let record = R::build(id, draft);
        inner.records.push(record.clone());
        tracing::debug!(kind = R::KIND, id, "created");
        record
    }

    /// Snapshot of the records matching `filter`, in storage order.
    pub fn list(&self, filter: &R::Filter) -> Vec<R> {
        self.read()
            .records
            .iter()
            .filter(|r| r.matches(filter))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: i64) -> Option<R> {
        self.read().records.iter().find(|r| r.id() == id).cloned()
    }

    pub fn update(&self, id: i64, patch: R::Patch) -> Option<R> {
        let mut inner = self.write();
        let record = inner.records.iter_mut().find(|r| r.id() == id)?;
        record.apply(patch);
        tracing::debug!(kind = R::KIND, id, "updated");
        Some(record.clone())
    }

    /// Removes or retires the record depending on the kind's [`DeletePolicy`].
    pub fn delete(&self, id: i64) -> Option<R> {
        let mut inner = self.write();
        let pos = inner.records.iter().position(|r| r.id() == id)?;
        let record = match R::DELETE_POLICY {
            DeletePolicy::Remove => inner.records.remove(pos),
            DeletePolicy::Retire => {
                let record = &mut inner.records[pos];
                record.retire();
                record.clone()
            }
        };
        tracing::debug!(kind = R::KIND, id, policy = ?R::DELETE_POLICY, "deleted");
        Some(record)
    }

    pub fn len(&self) -> usize {
        self.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
