//! Raw caller input for create and update operations
//!
//! Forms carry unvalidated text and signed threshold overrides exactly as
//! the caller supplied them. Validation happens in [`crate::validate`];
//! nothing here enforces an invariant.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Editable trailer fields as submitted by a caller.
///
/// Threshold maps are keyed by catalog tool name / sheet type and use
/// signed integers so that negative input can be caught by validation
/// instead of being silently coerced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailerForm {
    /// Display name
    pub trailer_name: String,
    /// Plate or registration number
    pub registration_number: String,
    /// Street address where the trailer is parked
    pub parking_address: String,
    /// State or province
    pub state: String,
    /// City
    pub city: String,
    /// Per-tool threshold overrides
    #[serde(default)]
    pub tool_thresholds: BTreeMap<String, i32>,
    /// Per-sheet threshold overrides
    #[serde(default)]
    pub sheet_thresholds: BTreeMap<String, i32>,
}

impl TrailerForm {
    /// Add or replace a tool threshold override.
    #[must_use]
    pub fn with_tool_threshold(mut self, tool: impl Into<String>, threshold: i32) -> Self {
        self.tool_thresholds.insert(tool.into(), threshold);
        self
    }

    /// Add or replace a sheet threshold override.
    #[must_use]
    pub fn with_sheet_threshold(mut self, sheet: impl Into<String>, threshold: i32) -> Self {
        self.sheet_thresholds.insert(sheet.into(), threshold);
        self
    }
}

/// Stock counts supplied alongside an update, keyed by catalog entry.
///
/// Entries for keys outside the catalog are ignored when the inventory is
/// rebuilt; the catalog, not historical data, defines the item set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevels {
    /// Current stock per tool name
    #[serde(default)]
    pub tools: BTreeMap<String, u32>,
    /// Current stock per sheet type
    #[serde(default)]
    pub film_sheets: BTreeMap<String, u32>,
}

impl StockLevels {
    /// Add or replace a tool stock count.
    #[must_use]
    pub fn with_tool(mut self, tool: impl Into<String>, stock: u32) -> Self {
        self.tools.insert(tool.into(), stock);
        self
    }

    /// Add or replace a sheet stock count.
    #[must_use]
    pub fn with_sheet(mut self, sheet: impl Into<String>, stock: u32) -> Self {
        self.film_sheets.insert(sheet.into(), stock);
        self
    }
}
