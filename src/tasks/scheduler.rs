//! Expiration Scheduler
//!
//! Runs the expiration sweep on a fixed interval in a background task until
//! a cancellation token fires.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::config::{Config, DEFAULT_AUCTION_INTERVAL_SECS, MAX_AUCTION_INTERVAL_SECS};
use crate::tasks::sweep::ExpirationSweep;

// == Scheduler State ==
/// Lifecycle of a scheduler: `Idle -> Running -> Stopped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Constructed, no task spawned
    Idle,
    /// Background task alive, waiting for the next tick or cancellation
    Running,
    /// Terminal; the timer is released and no further sweeps run
    Stopped,
}

// == Scheduler ==
/// Owns the sweep cadence.
///
/// Construction is inert. The background task only exists after `start`,
/// and only one sweep is ever in flight: the loop awaits each sweep before
/// waiting for the next tick.
///
/// # Example
/// ```ignore
/// let token = CancellationToken::new();
/// let mut scheduler = Scheduler::from_config(sweep, &config);
/// scheduler.start(token.clone());
/// // Later, during shutdown:
/// token.cancel();
/// scheduler.join().await;
/// ```
pub struct Scheduler {
    sweep: ExpirationSweep,
    interval: Duration,
    /// Present until `start` hands it to the background task
    state_tx: Option<watch::Sender<SchedulerState>>,
    state_rx: watch::Receiver<SchedulerState>,
    handle: Option<JoinHandle<()>>,
}

impl Scheduler {
    // == Constructor ==
    /// Creates an idle scheduler that will sweep every `interval`.
    ///
    /// A zero interval, or one longer than a year, falls back to the
    /// default of one second.
    pub fn new(sweep: ExpirationSweep, interval: Duration) -> Self {
        let interval = if interval.is_zero() {
            warn!("Zero auction interval configured, using default");
            Duration::from_secs(DEFAULT_AUCTION_INTERVAL_SECS)
        } else if interval > Duration::from_secs(MAX_AUCTION_INTERVAL_SECS) {
            warn!(
                interval_secs = interval.as_secs(),
                "Auction interval too long, using default"
            );
            Duration::from_secs(DEFAULT_AUCTION_INTERVAL_SECS)
        } else {
            interval
        };
        let (state_tx, state_rx) = watch::channel(SchedulerState::Idle);

        Self {
            sweep,
            interval,
            state_tx: Some(state_tx),
            state_rx,
            handle: None,
        }
    }

    /// Creates an idle scheduler using the configured auction interval.
    pub fn from_config(sweep: ExpirationSweep, config: &Config) -> Self {
        Self::new(sweep, config.auction_interval())
    }

    /// Returns the fixed sweep interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> SchedulerState {
        *self.state_rx.borrow()
    }

    // == Start ==
    /// Spawns the background sweep loop bound to `token`.
    ///
    /// Does not block. Calling it on a scheduler that already started is a
    /// no-op.
    pub fn start(&mut self, token: CancellationToken) {
        let Some(state_tx) = self.state_tx.take() else {
            warn!("Auction expiration scheduler already started");
            return;
        };

        state_tx.send_replace(SchedulerState::Running);
        let sweep = self.sweep.clone();
        let interval = self.interval;
        self.handle = Some(tokio::spawn(run_loop(sweep, interval, token, state_tx)));
    }

    // == Join ==
    /// Waits for the background task to finish.
    ///
    /// Returns immediately if the scheduler was never started. The task
    /// only finishes once its cancellation token fires.
    pub async fn join(self) {
        let Some(handle) = self.handle else {
            return;
        };
        if let Err(e) = handle.await {
            error!(error = %e, "Auction expiration scheduler task failed");
        }
    }
}

async fn run_loop(
    sweep: ExpirationSweep,
    period: Duration,
    token: CancellationToken,
    state_tx: watch::Sender<SchedulerState>,
) {
    info!(
        "Starting auction expiration scheduler with interval of {} seconds",
        period.as_secs_f64()
    );

    // First tick one full period after start
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => break,
            _ = ticker.tick() => {}
        }

        // Outside the select: cancellation never interrupts a sweep
        sweep.run().await;
    }

    drop(ticker);
    info!("Auction expiration scheduler stopped");
    state_tx.send_replace(SchedulerState::Stopped);
}
