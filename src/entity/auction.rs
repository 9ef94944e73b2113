//! Auction Entity Module
//!
//! Defines the auction record and the closed sets of values it carries.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// == Auction Status ==
/// Lifecycle status of an auction.
///
/// The only permitted transition is `Active -> Completed`, performed by the
/// expiration sweep once the deadline has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuctionStatus {
    /// Deadline not reached yet
    Active,
    /// Deadline passed, auction closed
    Completed,
}

// == Product Condition ==
/// Condition of the product being auctioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCondition {
    New,
    Used,
    Refurbished,
}

// == Auction ==
/// A single auction record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Auction {
    /// Unique identifier, assigned at creation
    pub id: String,
    pub product_name: String,
    pub category: String,
    pub description: String,
    pub condition: ProductCondition,
    /// Current lifecycle status
    pub status: AuctionStatus,
    /// Point in time after which the auction is eligible for expiration,
    /// in whole seconds
    pub deadline: DateTime<Utc>,
}

impl Auction {
    // == Constructor ==
    /// Creates a new active auction with a freshly generated id.
    ///
    /// Sub-second precision is dropped from the deadline, matching what the
    /// store persists.
    pub fn new(
        product_name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        condition: ProductCondition,
        deadline: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            product_name: product_name.into(),
            category: category.into(),
            description: description.into(),
            condition,
            status: AuctionStatus::Active,
            deadline: deadline.trunc_subsecs(0),
        }
    }
}
