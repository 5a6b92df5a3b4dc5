//! Client-side collection view with optimistic mutations.
//!
//! Removing rows from a displayed list before the store confirms the delete
//! keeps the UI responsive; if the remote call fails, the list is restored
//! to the exact snapshot taken before the mutation, so the row reappears at
//! its original position.

use std::future::Future;

use crate::types::DbId;

/// Items addressable by their store-assigned id.
pub trait Keyed {
    fn key(&self) -> DbId;
}

/// An in-memory list of store-backed items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionView<T> {
    items: Vec<T>,
}

impl<T: Keyed + Clone> CollectionView<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Insert a freshly created item at the head (newest first).
    pub fn prepend(&mut self, item: T) {
        self.items.insert(0, item);
    }

    /// Remove `key` locally, then run the remote delete.
    ///
    /// Returns `Ok(false)` without calling `remote` when the key is not in
    /// the view. On remote failure the pre-mutation snapshot is restored and
    /// the error is returned.
    pub async fn remove_optimistically<F, Fut, E>(
        &mut self,
        key: DbId,
        remote: F,
    ) -> Result<bool, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), E>>,
    {
        if !self.items.iter().any(|item| item.key() == key) {
            return Ok(false);
        }

        let snapshot = self.items.clone();
        self.items.retain(|item| item.key() != key);

        match remote().await {
            Ok(()) => Ok(true),
            Err(e) => {
                self.items = snapshot;
                Err(e)
            }
        }
    }

    /// Empty the view locally, then run the remote bulk delete. Restores the
    /// snapshot on failure.
    pub async fn clear_optimistically<F, Fut, E>(&mut self, remote: F) -> Result<(), E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), E>>,
    {
        let snapshot = std::mem::take(&mut self.items);

        remote().await.inspect_err(|_| {
            self.items = snapshot;
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
