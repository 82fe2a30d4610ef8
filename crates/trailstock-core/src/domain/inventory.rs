//! Trailer inventory: stocked items keyed by catalog entries
//!
//! # Derived Status Invariant
//!
//! An item's `status` always equals `derive_item_status(current_stock,
//! threshold)`. Fields are private and every constructor and transition
//! recomputes it, so stored data cannot drift from the rule. Deserialization
//! goes through a raw shadow struct and recomputes as well, so a stale
//! `status` in persisted JSON is discarded rather than trusted.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, ToolSpec};
use crate::domain::identifiers::{SheetType, ToolName};
use crate::domain::status::{derive_item_status, ItemStatus};

// ============================================================================
// INVENTORY ITEM
// ============================================================================

/// One stocked item: a catalog key plus stock count, threshold, and the
/// status derived from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawInventoryItem<K>")]
pub struct InventoryItem<K> {
    key: K,
    current_stock: u32,
    threshold: u32,
    status: ItemStatus,
}

/// Shadow struct for deserialization: carries no status field, so the
/// derived value is always recomputed on load.
#[derive(Deserialize)]
struct RawInventoryItem<K> {
    key: K,
    current_stock: u32,
    threshold: u32,
}

impl<K> From<RawInventoryItem<K>> for InventoryItem<K> {
    fn from(raw: RawInventoryItem<K>) -> Self {
        Self::new(raw.key, raw.current_stock, raw.threshold)
    }
}

impl<K> InventoryItem<K> {
    /// Create an item with its status derived from stock and threshold.
    #[must_use]
    pub fn new(key: K, current_stock: u32, threshold: u32) -> Self {
        Self {
            key,
            current_stock,
            threshold,
            status: derive_item_status(current_stock, threshold),
        }
    }

    /// Get the catalog key
    #[must_use]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Get the current stock count
    #[must_use]
    pub const fn current_stock(&self) -> u32 {
        self.current_stock
    }

    /// Get the reorder threshold
    #[must_use]
    pub const fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Get the derived status
    #[must_use]
    pub const fn status(&self) -> ItemStatus {
        self.status
    }

    /// Return a copy with a new stock count and recomputed status.
    #[must_use]
    pub fn with_stock(self, current_stock: u32) -> Self {
        Self {
            status: derive_item_status(current_stock, self.threshold),
            current_stock,
            ..self
        }
    }

    /// Return a copy with a new threshold and recomputed status.
    #[must_use]
    pub fn with_threshold(self, threshold: u32) -> Self {
        Self {
            status: derive_item_status(self.current_stock, threshold),
            threshold,
            ..self
        }
    }

    /// Return a copy restocked to the reorder point.
    ///
    /// Stock lands exactly at the threshold, so the recomputed status is
    /// `Low` for a positive threshold and `Critical` when the threshold is
    /// zero. Restocking never fabricates an `Available` reading.
    #[must_use]
    pub fn restocked(self) -> Self {
        Self {
            current_stock: self.threshold,
            status: derive_item_status(self.threshold, self.threshold),
            ..self
        }
    }

    /// Check if the item is out of stock
    #[must_use]
    pub fn is_critical(&self) -> bool {
        self.status == ItemStatus::Critical
    }

    /// Check if the item is at or below its reorder point
    #[must_use]
    pub fn is_low(&self) -> bool {
        self.status == ItemStatus::Low
    }

    /// Check if the item is above its reorder point
    #[must_use]
    pub fn is_good(&self) -> bool {
        self.status == ItemStatus::Good
    }
}

/// A stocked tool
pub type ToolItem = InventoryItem<ToolName>;

/// A stocked film-sheet type
pub type SheetItem = InventoryItem<SheetType>;

// ============================================================================
// INVENTORY
// ============================================================================

/// A trailer's full inventory: one item per catalog tool and sheet type.
///
/// Inventories are only built from a catalog, so the coverage invariant
/// (every catalog entry present, nothing else) holds by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    tools: Vector<ToolItem>,
    film_sheets: Vector<SheetItem>,
}

impl Inventory {
    /// Build an inventory covering the catalog exactly, with per-entry
    /// stock and threshold chosen by the callbacks.
    pub(crate) fn build(
        catalog: &Catalog,
        mut tool_entry: impl FnMut(&ToolSpec) -> (u32, u32),
        mut sheet_entry: impl FnMut(&SheetType) -> (u32, u32),
    ) -> Self {
        let tools = catalog
            .tools()
            .iter()
            .map(|spec| {
                let (stock, threshold) = tool_entry(spec);
                ToolItem::new(spec.name.clone(), stock, threshold)
            })
            .collect();

        let film_sheets = catalog
            .film_sheets()
            .iter()
            .map(|sheet| {
                let (stock, threshold) = sheet_entry(sheet);
                SheetItem::new(sheet.clone(), stock, threshold)
            })
            .collect();

        Self { tools, film_sheets }
    }

    /// Build a fresh inventory: zero stock everywhere, catalog default
    /// thresholds.
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let sheet_default = catalog.default_sheet_threshold();
        Self::build(
            catalog,
            |spec| (0, spec.default_threshold),
            |_| (0, sheet_default),
        )
    }

    /// Get the stocked tools
    #[must_use]
    pub const fn tools(&self) -> &Vector<ToolItem> {
        &self.tools
    }

    /// Get the stocked film-sheet types
    #[must_use]
    pub const fn film_sheets(&self) -> &Vector<SheetItem> {
        &self.film_sheets
    }

    /// Find a tool by name
    #[must_use]
    pub fn tool(&self, name: &ToolName) -> Option<&ToolItem> {
        self.tools.iter().find(|item| item.key() == name)
    }

    /// Find a sheet type by identifier
    #[must_use]
    pub fn sheet(&self, sheet_type: &SheetType) -> Option<&SheetItem> {
        self.film_sheets.iter().find(|item| item.key() == sheet_type)
    }

    /// Return a copy with every item restocked to its threshold.
    #[must_use]
    pub fn restocked(&self) -> Self {
        Self {
            tools: self.tools.iter().cloned().map(ToolItem::restocked).collect(),
            film_sheets: self
                .film_sheets
                .iter()
                .cloned()
                .map(SheetItem::restocked)
                .collect(),
        }
    }

    /// Total number of stocked items across both sections
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len() + self.film_sheets.len()
    }

    /// Check if the inventory has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty() && self.film_sheets.is_empty()
    }
}
