//! Error types for the auction service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Auction Error Enum ==
/// Unified error type for the auction service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuctionError {
    /// An auction with the same id already exists
    #[error("Auction already exists: {0}")]
    Conflict(String),

    /// Auction not found
    #[error("Auction not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Store failed while inserting an auction
    #[error("Error trying to insert auction: {0}")]
    InsertFailed(String),

    /// Store failed while reading auctions, or returned an undecodable record
    #[error("Error trying to find auction: {0}")]
    QueryFailed(String),

    /// Store failed while expiring auctions
    #[error("Error trying to update expired auctions: {0}")]
    UpdateFailed(String),
}

impl AuctionError {
    /// Returns true for failures caused by the store rather than the caller.
    pub fn is_store_unavailable(&self) -> bool {
        matches!(
            self,
            AuctionError::InsertFailed(_)
                | AuctionError::QueryFailed(_)
                | AuctionError::UpdateFailed(_)
        )
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for AuctionError {
    fn into_response(self) -> Response {
        let status = match &self {
            AuctionError::Conflict(_) => StatusCode::CONFLICT,
            AuctionError::NotFound(_) => StatusCode::NOT_FOUND,
            AuctionError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AuctionError::InsertFailed(_)
            | AuctionError::QueryFailed(_)
            | AuctionError::UpdateFailed(_) => StatusCode::SERVICE_UNAVAILABLE,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the auction service.
pub type Result<T> = std::result::Result<T, AuctionError>;
