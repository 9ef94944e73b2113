//! In-Memory Store Module
//!
//! HashMap-backed `AuctionStore` guarded by a single `RwLock`.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{AuctionDocument, AuctionStore, DocumentQuery, ExpiryFilter, StoreError};

// == In-Memory Store ==
/// Process-local document store.
///
/// `update_many` holds the write lock for the whole bulk update, so readers
/// never observe a partially applied sweep.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    /// Documents keyed by `_id`
    documents: RwLock<HashMap<String, AuctionDocument>>,
}

impl InMemoryStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.documents.read().await.len()
    }
}

#[async_trait]
impl AuctionStore for InMemoryStore {
    async fn insert_one(&self, document: AuctionDocument) -> Result<(), StoreError> {
        let mut documents = self.documents.write().await;
        if documents.contains_key(&document.id) {
            return Err(StoreError::DuplicateKey(document.id));
        }
        documents.insert(document.id.clone(), document);
        Ok(())
    }

    async fn find_one(&self, id: &str) -> Result<Option<AuctionDocument>, StoreError> {
        Ok(self.documents.read().await.get(id).cloned())
    }

    async fn find_many(&self, query: &DocumentQuery) -> Result<Vec<AuctionDocument>, StoreError> {
        let documents = self.documents.read().await;
        let mut matched: Vec<AuctionDocument> = documents
            .values()
            .filter(|document| query.matches(document))
            .cloned()
            .collect();

        // Stable order for callers: earliest deadline first
        matched.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then_with(|| a.id.cmp(&b.id)));
        Ok(matched)
    }

    async fn update_many(&self, filter: &ExpiryFilter, status: i32) -> Result<u64, StoreError> {
        let mut documents = self.documents.write().await;
        let mut modified = 0;

        for document in documents.values_mut() {
            if filter.matches(document) && document.status != status {
                document.status = status;
                modified += 1;
            }
        }

        Ok(modified)
    }
}
