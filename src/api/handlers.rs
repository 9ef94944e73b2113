//! API Handlers
//!
//! HTTP request handlers for each auction endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::error::{AuctionError, Result};
use crate::models::{AuctionResponse, CreateAuctionRequest, HealthResponse, StatsResponse};
use crate::repository::{AuctionQuery, AuctionRepository};
use crate::store::AuctionStore;
use crate::tasks::{SharedSweepStats, SweepStats};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Auction persistence facade
    pub repository: AuctionRepository,
    /// Statistics written by the expiration sweep
    pub stats: SharedSweepStats,
}

impl AppState {
    /// Creates a new AppState from a repository and sweep statistics.
    pub fn new(repository: AuctionRepository, stats: SharedSweepStats) -> Self {
        Self { repository, stats }
    }

    /// Creates a new AppState over a store with fresh statistics.
    pub fn from_store(store: Arc<dyn AuctionStore>) -> Self {
        Self::new(
            AuctionRepository::new(store),
            Arc::new(tokio::sync::RwLock::new(SweepStats::new())),
        )
    }
}

/// Handler for POST /auctions
///
/// Creates a new active auction and returns it.
pub async fn create_auction_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateAuctionRequest>,
) -> Result<(StatusCode, Json<AuctionResponse>)> {
    // Validate request
    if let Some(error_msg) = req.validate() {
        return Err(AuctionError::InvalidRequest(error_msg));
    }

    let auction = req.into_auction();
    state.repository.create(&auction).await?;

    Ok((StatusCode::CREATED, Json(AuctionResponse::from(auction))))
}

/// Handler for GET /auctions/:id
///
/// Returns the current persisted state of one auction.
pub async fn get_auction_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AuctionResponse>> {
    let auction = state.repository.find_by_id(&id).await?;
    Ok(Json(AuctionResponse::from(auction)))
}

/// Handler for GET /auctions
///
/// Lists auctions, optionally filtered by `status`, `category` and
/// `product_name`.
pub async fn list_auctions_handler(
    State(state): State<AppState>,
    Query(query): Query<AuctionQuery>,
) -> Result<Json<Vec<AuctionResponse>>> {
    let auctions = state.repository.find_all(&query).await?;
    Ok(Json(auctions.into_iter().map(AuctionResponse::from).collect()))
}

/// Handler for GET /stats
///
/// Returns expiration sweep statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.stats.read().await;
    Json(StatsResponse::from(&*stats))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{AuctionStatus, ProductCondition};
    use crate::store::InMemoryStore;
    use chrono::{Duration, Utc};

    fn state() -> AppState {
        AppState::from_store(Arc::new(InMemoryStore::new()))
    }

    fn request(product_name: &str) -> CreateAuctionRequest {
        CreateAuctionRequest {
            product_name: product_name.to_string(),
            category: "books".to_string(),
            description: "first edition".to_string(),
            condition: ProductCondition::Used,
            deadline: Utc::now() + Duration::hours(1),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_handler() {
        let state = state();

        let (status, Json(created)) =
            create_auction_handler(State(state.clone()), Json(request("novel")))
                .await
                .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.status, AuctionStatus::Active);

        let Json(found) = get_auction_handler(State(state), Path(created.id.clone()))
            .await
            .unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.product_name, "novel");
    }

    #[tokio::test]
    async fn test_get_nonexistent_auction() {
        let result = get_auction_handler(State(state()), Path("nope".to_string())).await;
        assert!(matches!(result, Err(AuctionError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_invalid_request() {
        let result = create_auction_handler(State(state()), Json(request(""))).await;
        assert!(matches!(result, Err(AuctionError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_list_handler() {
        let state = state();
        create_auction_handler(State(state.clone()), Json(request("a")))
            .await
            .unwrap();
        create_auction_handler(State(state.clone()), Json(request("b")))
            .await
            .unwrap();

        let Json(all) = list_auctions_handler(State(state), Query(AuctionQuery::default()))
            .await
            .unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let response = stats_handler(State(state())).await;
        assert_eq!(response.sweeps, 0);
        assert_eq!(response.failures, 0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
