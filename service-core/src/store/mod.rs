//! Append-only in-memory record store.
//!
//! Each service owns one [`RecordStore`] for its domain type and hands clones
//! of it to the router state. Clones share the same underlying sequence.
//!
//! Records are immutable once appended: the store only ever grows, and reads
//! return a snapshot of the sequence in insertion order.

use chrono::{DateTime, Utc};
use std::sync::{Arc, RwLock};
use thiserror::Error;

use crate::error::AppError;

/// A domain record that can be materialised from caller-supplied fields.
pub trait Record: Clone + Send + Sync + 'static {
    /// Caller-supplied fields, everything except the identifier and the
    /// time-derived fields.
    type Draft;

    /// Build the stored record from its draft, the identifier assigned by
    /// the store and the append time.
    fn from_draft(id: u64, draft: Self::Draft, appended_at: DateTime<Utc>) -> Self;
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record store lock poisoned")]
    Poisoned,
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

struct Inner<R> {
    records: Vec<R>,
    next_id: u64,
}

pub struct RecordStore<R> {
    inner: Arc<RwLock<Inner<R>>>,
}

impl<R> Clone for RecordStore<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> RecordStore<R> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                records: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// Append a record stamped with the current wall-clock time.
    pub fn append(&self, draft: R::Draft) -> Result<R, StoreError> {
        self.append_at(draft, Utc::now())
    }

    /// Append a record stamped with `appended_at`.
    ///
    /// Identifiers come from a counter that only moves forward, so they stay
    /// unique even if the sequence length ever stops tracking them.
    pub fn append_at(&self, draft: R::Draft, appended_at: DateTime<Utc>) -> Result<R, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let id = inner.next_id;
        let record = R::from_draft(id, draft, appended_at);
        inner.records.push(record.clone());
        inner.next_id += 1;
        Ok(record)
    }

    /// Append unless `admit` rejects the draft given the records already
    /// stored. The check and the append happen under the same write lock.
    pub fn try_append<E, F>(&self, draft: R::Draft, admit: F) -> Result<R, E>
    where
        E: From<StoreError>,
        F: FnOnce(&[R], &R::Draft) -> Result<(), E>,
    {
        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        admit(&inner.records, &draft)?;
        let id = inner.next_id;
        let record = R::from_draft(id, draft, Utc::now());
        inner.records.push(record.clone());
        inner.next_id += 1;
        Ok(record)
    }

    /// Snapshot of every record in insertion order.
    pub fn list(&self) -> Result<Vec<R>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(inner.records.clone())
    }

    #[cfg(test)]
    fn len(&self) -> Result<usize, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(inner.records.len())
    }

    #[cfg(test)]
    fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    /// False once a writer has panicked while holding the lock.
    pub fn is_healthy(&self) -> bool {
        !self.inner.is_poisoned()
    }
}
