//! Translation between `Auction` and `AuctionDocument`.
//!
//! Raw integer codes never leave this module: an unknown code read back
//! from the store is rejected instead of entering the domain.

use chrono::{TimeZone, Utc};

use crate::entity::{Auction, AuctionStatus, ProductCondition};
use crate::error::AuctionError;
use crate::store::AuctionDocument;

// == Status Codes ==
pub(crate) const STATUS_ACTIVE: i32 = 0;
pub(crate) const STATUS_COMPLETED: i32 = 1;

// == Condition Codes ==
const CONDITION_NEW: i32 = 1;
const CONDITION_USED: i32 = 2;
const CONDITION_REFURBISHED: i32 = 3;

pub(crate) fn status_code(status: AuctionStatus) -> i32 {
    match status {
        AuctionStatus::Active => STATUS_ACTIVE,
        AuctionStatus::Completed => STATUS_COMPLETED,
    }
}

fn status_from_code(code: i32) -> Result<AuctionStatus, AuctionError> {
    match code {
        STATUS_ACTIVE => Ok(AuctionStatus::Active),
        STATUS_COMPLETED => Ok(AuctionStatus::Completed),
        other => Err(AuctionError::QueryFailed(format!(
            "unknown auction status code {}",
            other
        ))),
    }
}

fn condition_code(condition: ProductCondition) -> i32 {
    match condition {
        ProductCondition::New => CONDITION_NEW,
        ProductCondition::Used => CONDITION_USED,
        ProductCondition::Refurbished => CONDITION_REFURBISHED,
    }
}

fn condition_from_code(code: i32) -> Result<ProductCondition, AuctionError> {
    match code {
        CONDITION_NEW => Ok(ProductCondition::New),
        CONDITION_USED => Ok(ProductCondition::Used),
        CONDITION_REFURBISHED => Ok(ProductCondition::Refurbished),
        other => Err(AuctionError::QueryFailed(format!(
            "unknown product condition code {}",
            other
        ))),
    }
}

impl From<&Auction> for AuctionDocument {
    fn from(auction: &Auction) -> Self {
        Self {
            id: auction.id.clone(),
            product_name: auction.product_name.clone(),
            category: auction.category.clone(),
            description: auction.description.clone(),
            condition: condition_code(auction.condition),
            status: status_code(auction.status),
            timestamp: auction.deadline.timestamp(),
        }
    }
}

impl TryFrom<AuctionDocument> for Auction {
    type Error = AuctionError;

    fn try_from(document: AuctionDocument) -> Result<Self, Self::Error> {
        let deadline = Utc
            .timestamp_opt(document.timestamp, 0)
            .single()
            .ok_or_else(|| {
                AuctionError::QueryFailed(format!(
                    "invalid deadline timestamp {}",
                    document.timestamp
                ))
            })?;

        Ok(Self {
            status: status_from_code(document.status)?,
            condition: condition_from_code(document.condition)?,
            id: document.id,
            product_name: document.product_name,
            category: document.category,
            description: document.description,
            deadline,
        })
    }
}
