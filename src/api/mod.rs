//! API Module
//!
//! HTTP handlers and routing for the auction REST API.
//!
//! # Endpoints
//! - `POST /auctions` - Create an auction
//! - `GET /auctions` - List auctions, filtered by query string
//! - `GET /auctions/:id` - Fetch one auction
//! - `GET /stats` - Expiration sweep statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
