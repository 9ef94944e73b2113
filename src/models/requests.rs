//! Request DTOs for the auction API
//!
//! Defines the structure of incoming HTTP request bodies.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::entity::{Auction, ProductCondition};

/// Maximum accepted length for product names and categories
pub const MAX_NAME_LENGTH: usize = 256;

/// Request body for POST /auctions
///
/// # Fields
/// - `product_name`: Name of the product on sale
/// - `category`: Product category
/// - `description`: Free-form description
/// - `condition`: One of `new`, `used`, `refurbished`
/// - `deadline`: RFC 3339 timestamp after which the auction closes
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAuctionRequest {
    pub product_name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub condition: ProductCondition,
    pub deadline: DateTime<Utc>,
}

impl CreateAuctionRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.product_name.trim().is_empty() {
            return Some("Product name cannot be empty".to_string());
        }
        if self.category.trim().is_empty() {
            return Some("Category cannot be empty".to_string());
        }
        if self.product_name.len() > MAX_NAME_LENGTH || self.category.len() > MAX_NAME_LENGTH {
            return Some(format!(
                "Product name and category must not exceed {} characters",
                MAX_NAME_LENGTH
            ));
        }
        None
    }

    /// Builds the active auction this request describes.
    pub fn into_auction(self) -> Auction {
        Auction::new(
            self.product_name,
            self.category,
            self.description,
            self.condition,
            self.deadline,
        )
    }
}
