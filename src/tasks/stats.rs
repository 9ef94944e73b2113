//! Sweep Statistics Module
//!
//! Tracks expiration sweep outcomes for the stats endpoint.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;

/// Statistics shared between the sweep (writer) and the API (reader).
pub type SharedSweepStats = Arc<RwLock<SweepStats>>;

// == Sweep Stats ==
/// Tracks expiration sweep metrics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SweepStats {
    /// Number of sweeps that completed successfully
    pub sweeps: u64,
    /// Number of sweeps that failed on the store
    pub failures: u64,
    /// Total auctions moved to completed
    pub auctions_expired: u64,
    /// When the last sweep finished, successful or not
    pub last_sweep_at: Option<DateTime<Utc>>,
}

impl SweepStats {
    // == Constructor ==
    /// Creates a new SweepStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Failure Rate ==
    /// Returns failures / (sweeps + failures), or 0.0 before the first sweep.
    pub fn failure_rate(&self) -> f64 {
        let total = self.sweeps + self.failures;
        if total == 0 {
            0.0
        } else {
            self.failures as f64 / total as f64
        }
    }

    // == Record Success ==
    pub fn record_success(&mut self, expired: u64) {
        self.sweeps += 1;
        self.auctions_expired += expired;
        self.last_sweep_at = Some(Utc::now());
    }

    // == Record Failure ==
    pub fn record_failure(&mut self) {
        self.failures += 1;
        self.last_sweep_at = Some(Utc::now());
    }
}
