//! Persisted auction representation and the predicates run against it.

use serde::{Deserialize, Serialize};

// == Auction Document ==
/// Auction as stored by the backend.
///
/// Enumerations are kept as raw integer codes and the deadline as epoch
/// seconds; the repository owns the translation to domain types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub product_name: String,
    pub category: String,
    pub description: String,
    pub condition: i32,
    pub status: i32,
    /// Deadline in Unix seconds
    pub timestamp: i64,
}

// == Expiry Filter ==
/// Predicate `status == status AND timestamp < timestamp_before`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryFilter {
    pub status: i32,
    pub timestamp_before: i64,
}

impl ExpiryFilter {
    pub fn matches(&self, document: &AuctionDocument) -> bool {
        document.status == self.status && document.timestamp < self.timestamp_before
    }
}

// == Document Query ==
/// Listing query. Every `None` field matches all documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentQuery {
    pub status: Option<i32>,
    pub category: Option<String>,
    /// Case-insensitive substring of `product_name`
    pub product_name: Option<String>,
}

impl DocumentQuery {
    pub fn matches(&self, document: &AuctionDocument) -> bool {
        if self.status.is_some_and(|status| status != document.status) {
            return false;
        }
        if let Some(category) = &self.category {
            if &document.category != category {
                return false;
            }
        }
        if let Some(name) = &self.product_name {
            let name = name.to_lowercase();
            if !document.product_name.to_lowercase().contains(&name) {
                return false;
            }
        }
        true
    }
}
