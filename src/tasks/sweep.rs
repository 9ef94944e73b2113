//! Expiration Sweep
//!
//! One pass of the expiration job: complete every active auction whose
//! deadline has passed, in a single bulk update.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

use crate::error::AuctionError;
use crate::repository::AuctionRepository;
use crate::tasks::stats::{SharedSweepStats, SweepStats};

// == Sweep Outcome ==
/// Result of a single sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepOutcome {
    /// Number of auctions moved to completed
    Expired(u64),
    /// The store rejected the update; the next sweep retries it
    Failed(AuctionError),
}

// == Expiration Sweep ==
/// Runs the expiration filter against the repository.
///
/// A failed sweep is logged and recorded but never returned as an error:
/// the filter is re-evaluated from scratch on the next run, so any auction
/// missed during a store outage is picked up once the store recovers.
#[derive(Clone)]
pub struct ExpirationSweep {
    repository: AuctionRepository,
    stats: SharedSweepStats,
}

impl ExpirationSweep {
    /// Creates a sweep with its own statistics.
    pub fn new(repository: AuctionRepository) -> Self {
        Self::with_stats(repository, Arc::new(RwLock::new(SweepStats::new())))
    }

    /// Creates a sweep that records into existing statistics.
    pub fn with_stats(repository: AuctionRepository, stats: SharedSweepStats) -> Self {
        Self { repository, stats }
    }

    /// Returns a handle to the statistics this sweep records into.
    pub fn stats(&self) -> SharedSweepStats {
        self.stats.clone()
    }

    // == Run ==
    /// Sweeps using the current wall-clock time.
    pub async fn run(&self) -> SweepOutcome {
        self.run_at(Utc::now().timestamp()).await
    }

    /// Sweeps as if the current time were `now` (Unix seconds).
    pub async fn run_at(&self, now: i64) -> SweepOutcome {
        match self.repository.expire_due(now).await {
            Ok(expired) => {
                if expired > 0 {
                    info!("Closed {} expired auctions", expired);
                } else {
                    debug!("Expiration sweep: no expired auctions found");
                }
                self.stats.write().await.record_success(expired);
                SweepOutcome::Expired(expired)
            }
            Err(e) => {
                error!(error = %e, "Error updating expired auctions");
                self.stats.write().await.record_failure();
                SweepOutcome::Failed(e)
            }
        }
    }
}
