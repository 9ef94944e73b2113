//! Background Tasks Module
//!
//! Contains the recurring auction expiration job.
//!
//! # Tasks
//! - Expiration Sweep: completes every active auction past its deadline
//! - Scheduler: runs the sweep on a fixed interval until cancelled

mod scheduler;
mod stats;
mod sweep;

pub use scheduler::{Scheduler, SchedulerState};
pub use stats::{SharedSweepStats, SweepStats};
pub use sweep::{ExpirationSweep, SweepOutcome};
