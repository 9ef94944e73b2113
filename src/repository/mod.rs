//! Repository Module
//!
//! Facade between domain auctions and the document store.

mod auction;
mod document;


// Re-export public types
pub use auction::{AuctionQuery, AuctionRepository};
