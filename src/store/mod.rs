//! Store Module
//!
//! The persistence seam for auction documents. Anything that can insert,
//! look up and bulk-update documents atomically can back the repository.

mod document;
mod memory;

use async_trait::async_trait;
use thiserror::Error;

// Re-export public types
pub use document::{AuctionDocument, DocumentQuery, ExpiryFilter};
pub use memory::InMemoryStore;

// == Store Error ==
/// Failures reported by a store backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A document with the same `_id` already exists
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// The backend could not serve the request (connectivity, serialization)
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

// == Auction Store ==
/// Document store holding persisted auctions.
///
/// `update_many` must apply its update to every matching document in one
/// atomic step: a concurrent reader observes either none or all of it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuctionStore: Send + Sync {
    /// Inserts a new document, failing with `DuplicateKey` if `_id` exists.
    async fn insert_one(&self, document: AuctionDocument) -> Result<(), StoreError>;

    /// Fetches a single document by `_id`.
    async fn find_one(&self, id: &str) -> Result<Option<AuctionDocument>, StoreError>;

    /// Fetches every document matching the query.
    async fn find_many(&self, query: &DocumentQuery) -> Result<Vec<AuctionDocument>, StoreError>;

    /// Sets `status` on every document matching the filter and returns the
    /// number of documents modified.
    async fn update_many(&self, filter: &ExpiryFilter, status: i32) -> Result<u64, StoreError>;
}
