//! Stock status ladders and the rules that derive them
//!
//! Status is never stored authoritatively. Both ladders are pure functions
//! of stock counts and thresholds, recomputed after every inventory change.

#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::arithmetic_side_effects)]

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::domain::inventory::Inventory;

/// Per-item stock status
///
/// Variant order is severity order: `Good < Low < Critical`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    /// Stock is above the item's threshold
    Good,
    /// Stock is positive but at or below the threshold
    Low,
    /// Stock is exhausted
    Critical,
}

/// Trailer-level readiness status
///
/// Variant order is severity order: `Available < Low < Unavailable`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TrailerStatus {
    /// Every item is above its threshold
    Available,
    /// At least one item is low, none are exhausted
    Low,
    /// At least one item is out of stock
    Unavailable,
}

/// Derive an item's status from its stock count and threshold.
///
/// The zero check runs first: an item with `threshold == 0` and
/// `current_stock == 0` is critical, not good.
#[must_use]
pub const fn derive_item_status(current_stock: u32, threshold: u32) -> ItemStatus {
    if current_stock == 0 {
        ItemStatus::Critical
    } else if current_stock <= threshold {
        ItemStatus::Low
    } else {
        ItemStatus::Good
    }
}

impl From<ItemStatus> for TrailerStatus {
    fn from(status: ItemStatus) -> Self {
        match status {
            ItemStatus::Good => Self::Available,
            ItemStatus::Low => Self::Low,
            ItemStatus::Critical => Self::Unavailable,
        }
    }
}

/// Derive a trailer's status from its full inventory.
///
/// The worst item wins: any critical item makes the trailer unavailable,
/// otherwise any low item makes it low. An empty inventory is available.
#[must_use]
pub fn derive_trailer_status(inventory: &Inventory) -> TrailerStatus {
    inventory
        .tools()
        .iter()
        .map(|item| derive_item_status(item.current_stock(), item.threshold()))
        .chain(
            inventory
                .film_sheets()
                .iter()
                .map(|item| derive_item_status(item.current_stock(), item.threshold())),
        )
        .map(TrailerStatus::from)
        .max()
        .unwrap_or(TrailerStatus::Available)
}
