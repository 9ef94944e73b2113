//! Auction Repository Module
//!
//! Create, lookup, listing and bulk expiration of auctions on top of an
//! injected `AuctionStore`.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, error};

use super::document::{status_code, STATUS_ACTIVE, STATUS_COMPLETED};
use crate::entity::{Auction, AuctionStatus};
use crate::error::{AuctionError, Result};
use crate::store::{AuctionDocument, AuctionStore, DocumentQuery, ExpiryFilter, StoreError};

// == Auction Query ==
/// Filters for listing auctions. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuctionQuery {
    pub status: Option<AuctionStatus>,
    pub category: Option<String>,
    /// Case-insensitive substring of the product name
    pub product_name: Option<String>,
}

impl From<&AuctionQuery> for DocumentQuery {
    fn from(query: &AuctionQuery) -> Self {
        Self {
            status: query.status.map(status_code),
            category: query.category.clone(),
            product_name: query.product_name.clone(),
        }
    }
}

// == Auction Repository ==
/// Sole writer of persisted auctions.
///
/// Cloning is cheap; every clone shares the same store handle.
#[derive(Clone)]
pub struct AuctionRepository {
    store: Arc<dyn AuctionStore>,
}

impl AuctionRepository {
    // == Constructor ==
    /// Creates a repository over the given store handle.
    pub fn new(store: Arc<dyn AuctionStore>) -> Self {
        Self { store }
    }

    // == Create ==
    /// Persists a new auction with its current status and deadline.
    ///
    /// Fails with `Conflict` if the id is taken and `InsertFailed` on any
    /// other store failure. No retry is attempted.
    pub async fn create(&self, auction: &Auction) -> Result<()> {
        match self.store.insert_one(AuctionDocument::from(auction)).await {
            Ok(()) => Ok(()),
            Err(StoreError::DuplicateKey(id)) => Err(AuctionError::Conflict(id)),
            Err(StoreError::Unavailable(reason)) => {
                error!(auction_id = %auction.id, %reason, "Error trying to insert auction");
                Err(AuctionError::InsertFailed(reason))
            }
        }
    }

    // == Find By Id ==
    /// Returns the current persisted state of one auction.
    pub async fn find_by_id(&self, id: &str) -> Result<Auction> {
        let document = self
            .store
            .find_one(id)
            .await
            .map_err(|e| AuctionError::QueryFailed(e.to_string()))?
            .ok_or_else(|| AuctionError::NotFound(id.to_string()))?;

        Auction::try_from(document)
    }

    // == Find All ==
    /// Lists auctions matching the query, earliest deadline first.
    pub async fn find_all(&self, query: &AuctionQuery) -> Result<Vec<Auction>> {
        let documents = self
            .store
            .find_many(&DocumentQuery::from(query))
            .await
            .map_err(|e| AuctionError::QueryFailed(e.to_string()))?;

        documents.into_iter().map(Auction::try_from).collect()
    }

    // == Expire Due ==
    /// Completes every active auction whose deadline is strictly before
    /// `now` (Unix seconds) in a single bulk update.
    ///
    /// Returns the number of auctions transitioned. Calling it again with
    /// nothing newly due returns 0.
    pub async fn expire_due(&self, now: i64) -> Result<u64> {
        let filter = ExpiryFilter {
            status: STATUS_ACTIVE,
            timestamp_before: now,
        };

        let modified = self
            .store
            .update_many(&filter, STATUS_COMPLETED)
            .await
            .map_err(|e| AuctionError::UpdateFailed(e.to_string()))?;

        debug!(now, modified, "Bulk expiration applied");
        Ok(modified)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::ProductCondition;
    use crate::store::{InMemoryStore, MockAuctionStore};
    use chrono::{Duration, Utc};
    use tokio_test::{assert_err, assert_ok};

    fn repository() -> AuctionRepository {
        AuctionRepository::new(Arc::new(InMemoryStore::new()))
    }

    fn auction_due_in(offset: Duration) -> Auction {
        Auction::new(
            "guitar",
            "music",
            "six strings",
            ProductCondition::Used,
            Utc::now() + offset,
        )
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = repository();
        let auction = auction_due_in(Duration::hours(1));

        assert_ok!(repo.create(&auction).await);
        let found = repo.find_by_id(&auction.id).await.unwrap();

        assert_eq!(found.id, auction.id);
        assert_eq!(found.status, AuctionStatus::Active);
        assert_eq!(found.deadline.timestamp(), auction.deadline.timestamp());
    }

    #[tokio::test]
    async fn test_create_duplicate_id_conflicts() {
        let repo = repository();
        let auction = auction_due_in(Duration::hours(1));

        repo.create(&auction).await.unwrap();
        let result = repo.create(&auction).await;

        assert_eq!(result, Err(AuctionError::Conflict(auction.id.clone())));
    }

    #[tokio::test]
    async fn test_find_missing_is_not_found() {
        let repo = repository();

        let result = repo.find_by_id("missing").await;
        assert!(matches!(result, Err(AuctionError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_expire_due_completes_past_deadlines_only() {
        let repo = repository();
        let past = auction_due_in(-Duration::hours(1));
        let future = auction_due_in(Duration::hours(1));
        repo.create(&past).await.unwrap();
        repo.create(&future).await.unwrap();

        let modified = repo.expire_due(Utc::now().timestamp()).await.unwrap();

        assert_eq!(modified, 1);
        assert_eq!(
            repo.find_by_id(&past.id).await.unwrap().status,
            AuctionStatus::Completed
        );
        assert_eq!(
            repo.find_by_id(&future.id).await.unwrap().status,
            AuctionStatus::Active
        );
    }

    #[tokio::test]
    async fn test_expire_due_is_idempotent() {
        let repo = repository();
        repo.create(&auction_due_in(-Duration::hours(1))).await.unwrap();
        let now = Utc::now().timestamp();

        assert_eq!(repo.expire_due(now).await.unwrap(), 1);
        assert_eq!(repo.expire_due(now).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_expire_due_deadline_boundary() {
        let repo = repository();
        let auction = auction_due_in(Duration::zero());
        let t0 = auction.deadline.timestamp();
        repo.create(&auction).await.unwrap();

        assert_eq!(repo.expire_due(t0 - 1).await.unwrap(), 0);
        assert_eq!(repo.expire_due(t0).await.unwrap(), 0);
        assert_eq!(
            repo.find_by_id(&auction.id).await.unwrap().status,
            AuctionStatus::Active
        );

        assert_eq!(repo.expire_due(t0 + 1).await.unwrap(), 1);
        assert_eq!(
            repo.find_by_id(&auction.id).await.unwrap().status,
            AuctionStatus::Completed
        );
    }

    #[tokio::test]
    async fn test_find_all_filters() {
        let repo = repository();
        let mut drum = auction_due_in(-Duration::hours(2));
        drum.product_name = "Snare Drum".to_string();
        let mut laptop = auction_due_in(Duration::hours(2));
        laptop.category = "computers".to_string();
        repo.create(&drum).await.unwrap();
        repo.create(&laptop).await.unwrap();
        repo.expire_due(Utc::now().timestamp()).await.unwrap();

        let all = repo.find_all(&AuctionQuery::default()).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, drum.id);

        let completed = repo
            .find_all(&AuctionQuery {
                status: Some(AuctionStatus::Completed),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, drum.id);

        let computers = repo
            .find_all(&AuctionQuery {
                category: Some("computers".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(computers.len(), 1);
        assert_eq!(computers[0].id, laptop.id);

        let drums = repo
            .find_all(&AuctionQuery {
                product_name: Some("drum".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(drums.len(), 1);
    }

    #[tokio::test]
    async fn test_store_failures_map_to_typed_errors() {
        let mut store = MockAuctionStore::new();
        store
            .expect_insert_one()
            .returning(|_| Err(StoreError::Unavailable("connection refused".into())));
        store
            .expect_find_one()
            .returning(|_| Err(StoreError::Unavailable("connection refused".into())));
        store
            .expect_find_many()
            .returning(|_| Err(StoreError::Unavailable("connection refused".into())));
        store
            .expect_update_many()
            .returning(|_, _| Err(StoreError::Unavailable("connection refused".into())));
        let repo = AuctionRepository::new(Arc::new(store));

        let create = repo.create(&auction_due_in(Duration::hours(1))).await;
        assert!(matches!(create, Err(AuctionError::InsertFailed(_))));

        let find = repo.find_by_id("any").await;
        assert!(matches!(find, Err(AuctionError::QueryFailed(_))));

        let list = repo.find_all(&AuctionQuery::default()).await;
        assert!(matches!(list, Err(AuctionError::QueryFailed(_))));

        let expire = assert_err!(repo.expire_due(0).await);
        assert!(matches!(expire, AuctionError::UpdateFailed(_)));
        assert!(expire.is_store_unavailable());
    }

    #[tokio::test]
    async fn test_expire_due_sends_active_filter() {
        let mut store = MockAuctionStore::new();
        store
            .expect_update_many()
            .withf(|filter, status| {
                filter.status == STATUS_ACTIVE
                    && filter.timestamp_before == 1_000
                    && *status == STATUS_COMPLETED
            })
            .times(1)
            .returning(|_, _| Ok(3));
        let repo = AuctionRepository::new(Arc::new(store));

        assert_eq!(repo.expire_due(1_000).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_corrupt_status_surfaces_as_query_failed() {
        let store = Arc::new(InMemoryStore::new());
        let mut document = AuctionDocument::from(&auction_due_in(Duration::hours(1)));
        document.status = 42;
        let id = document.id.clone();
        store.insert_one(document).await.unwrap();

        let repo = AuctionRepository::new(store);
        let result = repo.find_by_id(&id).await;
        assert!(matches!(result, Err(AuctionError::QueryFailed(_))));
    }
}
