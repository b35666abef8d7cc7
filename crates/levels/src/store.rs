//! Document store
//!
//! Holds the level data of every live document created by one component
//! instance, keyed by document ID.

use crate::error::LevelError;
use crate::level::LevelData;
use crate::Result;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use pgefile_core::{DocumentId, IdGenerator};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Store of live level documents
pub struct DocumentStore {
    /// Live documents indexed by ID
    documents: DashMap<DocumentId, LevelData>,

    /// Document ID source
    ids: IdGenerator<DocumentId>,

    /// Documents created over the store's lifetime
    created: AtomicUsize,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self {
            documents: DashMap::new(),
            ids: IdGenerator::new(),
            created: AtomicUsize::new(0),
        }
    }

    /// Insert a fresh empty document and return its ID
    pub fn create(&self) -> DocumentId {
        loop {
            let id = self.ids.get_available_id();
            // A wrapped ID may still name a live document
            if let Entry::Vacant(slot) = self.documents.entry(id) {
                slot.insert(LevelData::new());
                self.created.fetch_add(1, Ordering::Relaxed);
                return id;
            }
        }
    }

    /// Run `f` against a live document
    pub fn with<R>(&self, id: DocumentId, f: impl FnOnce(&LevelData) -> R) -> Result<R> {
        let entry = self
            .documents
            .get(&id)
            .ok_or(LevelError::DocumentDestroyed(id))?;
        Ok(f(entry.value()))
    }

    /// Run `f` against a live document with write access
    pub fn with_mut<R>(&self, id: DocumentId, f: impl FnOnce(&mut LevelData) -> R) -> Result<R> {
        let mut entry = self
            .documents
            .get_mut(&id)
            .ok_or(LevelError::DocumentDestroyed(id))?;
        Ok(f(entry.value_mut()))
    }

    /// Remove a document. Returns its data if it was still live.
    pub fn remove(&self, id: DocumentId) -> Option<LevelData> {
        self.documents.remove(&id).map(|(_, data)| data)
    }

    /// Drop every document
    pub fn clear(&self) {
        self.documents.clear();
    }

    /// Get store statistics
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            live_documents: self.documents.len(),
            total_blocks: self.documents.iter().map(|d| d.block_count()).sum(),
            created_documents: self.created.load(Ordering::Relaxed),
        }
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Store statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreStats {
    /// Documents currently live
    pub live_documents: usize,

    /// Blocks across all live documents
    pub total_blocks: usize,

    /// Documents created since the store was built
    pub created_documents: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_distinct_documents() {
        let store = DocumentStore::new();
        let a = store.create();
        let b = store.create();

        assert_ne!(a, b);
        store.with_mut(a, |level| level.add_block()).unwrap();

        assert_eq!(store.with(a, |level| level.block_count()).unwrap(), 1);
        assert_eq!(store.with(b, |level| level.block_count()).unwrap(), 0);
    }

    #[test]
    fn test_removed_document_is_gone() {
        let store = DocumentStore::new();
        let id = store.create();

        assert!(store.remove(id).is_some());
        assert!(store.remove(id).is_none());

        let err = store.with(id, |level| level.block_count()).unwrap_err();
        assert!(err.is_state());
    }

    #[test]
    fn test_wrapped_ids_skip_live_documents() {
        let mut store = DocumentStore::new();
        let first = store.create();
        store.with_mut(first, |level| level.add_block()).unwrap();

        store.ids = IdGenerator::starting_at(u64::from(u32::MAX));
        let last = store.create();
        let wrapped = store.create();

        assert_eq!(last, DocumentId::new(u32::MAX));
        assert_eq!(first, DocumentId::new(1));
        assert_eq!(wrapped, DocumentId::new(2));
        assert_eq!(store.with(first, |level| level.block_count()).unwrap(), 1);
        assert_eq!(store.stats().created_documents, 3);
    }

    #[test]
    fn test_store_stats() {
        let store = DocumentStore::new();
        let a = store.create();
        let b = store.create();
        store.with_mut(a, |level| level.add_block()).unwrap();
        store.with_mut(a, |level| level.add_block()).unwrap();
        store.remove(b);

        let stats = store.stats();
        assert_eq!(stats.live_documents, 1);
        assert_eq!(stats.total_blocks, 2);
        assert_eq!(stats.created_documents, 2);

        store.clear();
        assert_eq!(store.stats().live_documents, 0);
    }
}
