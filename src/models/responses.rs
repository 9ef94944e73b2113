//! Response DTOs for the auction API
//!
//! Defines the structure of outgoing HTTP response bodies.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entity::{Auction, AuctionStatus, ProductCondition};
use crate::tasks::SweepStats;

/// Response body for a single auction
#[derive(Debug, Clone, Serialize)]
pub struct AuctionResponse {
    pub id: String,
    pub product_name: String,
    pub category: String,
    pub description: String,
    pub condition: ProductCondition,
    pub status: AuctionStatus,
    pub deadline: DateTime<Utc>,
}

impl From<Auction> for AuctionResponse {
    fn from(auction: Auction) -> Self {
        Self {
            id: auction.id,
            product_name: auction.product_name,
            category: auction.category,
            description: auction.description,
            condition: auction.condition,
            status: auction.status,
            deadline: auction.deadline,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Successful sweeps
    pub sweeps: u64,
    /// Failed sweeps
    pub failures: u64,
    /// Auctions moved to completed so far
    pub auctions_expired: u64,
    /// failures / (sweeps + failures)
    pub failure_rate: f64,
    pub last_sweep_at: Option<DateTime<Utc>>,
}

impl From<&SweepStats> for StatsResponse {
    fn from(stats: &SweepStats) -> Self {
        Self {
            sweeps: stats.sweeps,
            failures: stats.failures,
            auctions_expired: stats.auctions_expired,
            failure_rate: stats.failure_rate(),
            last_sweep_at: stats.last_sweep_at,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
