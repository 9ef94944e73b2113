//! Auction Expiry - auction service with time-driven closing
//!
//! Stores auctions and runs a background scheduler that completes every
//! active auction once its deadline has passed.

pub mod api;
pub mod config;
pub mod entity;
pub mod error;
pub mod models;
pub mod repository;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::{ExpirationSweep, Scheduler, SchedulerState};
