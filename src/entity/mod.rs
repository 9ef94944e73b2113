//! Entity Module
//!
//! Domain types for auctions and their status state machine.

mod auction;

// Re-export public types
pub use auction::{Auction, AuctionStatus, ProductCondition};
