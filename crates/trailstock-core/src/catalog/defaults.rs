//! Built-in catalog used when no configuration file overrides it

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use im::vector;

use crate::catalog::types::{Catalog, ToolSpec};
use crate::domain::identifiers::SheetType;

/// Threshold applied to film sheets when neither the catalog file nor the
/// trailer form specifies one.
pub const DEFAULT_SHEET_THRESHOLD: u32 = 10;

impl Catalog {
    /// The built-in catalog.
    ///
    /// Entries are crate-controlled literals, so construction is
    /// infallible; a test re-validates them through [`Catalog::new`].
    #[must_use]
    pub fn standard() -> Self {
        Self {
            tools: vector![
                ToolSpec::preset("Ladders", 4),
                ToolSpec::preset("Spray Rigs", 2),
                ToolSpec::preset("Air Compressors", 2),
                ToolSpec::preset("Generators", 2),
                ToolSpec::preset("Heat Guns", 3),
                ToolSpec::preset("Extension Cords", 6),
                ToolSpec::preset("Safety Harnesses", 4),
                ToolSpec::preset("Tack Rags", 12),
            ],
            film_sheets: vector![
                SheetType::from_raw("Clear 4 Mil"),
                SheetType::from_raw("Clear 6 Mil"),
                SheetType::from_raw("Black 4 Mil"),
                SheetType::from_raw("Black 6 Mil"),
                SheetType::from_raw("Fire Retardant 6 Mil"),
                SheetType::from_raw("Shrink Wrap 7 Mil"),
            ],
            default_sheet_threshold: DEFAULT_SHEET_THRESHOLD,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
