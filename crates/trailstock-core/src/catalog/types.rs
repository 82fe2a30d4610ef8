//! Catalog data types
//!
//! The catalog is the closed enumeration of tool names (each with a default
//! threshold) and film-sheet types that every trailer inventory must cover.
//! It is supplied by configuration and validated once at load time.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use std::collections::HashSet;

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::defaults::DEFAULT_SHEET_THRESHOLD;
use crate::domain::identifiers::{IdentifierError, SheetType, ToolName};

// ═══════════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════════

/// Catalog construction and load failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The same tool name appears twice
    #[error("duplicate tool in catalog: {0}")]
    DuplicateTool(String),

    /// The same sheet type appears twice
    #[error("duplicate film sheet in catalog: {0}")]
    DuplicateSheet(String),

    /// A catalog entry failed identifier validation
    #[error("invalid catalog entry: {0}")]
    InvalidEntry(#[from] IdentifierError),
}

// ═══════════════════════════════════════════════════════════════════════════
// Tool specs
// ═══════════════════════════════════════════════════════════════════════════

/// One catalog tool: its name and the reorder threshold new trailers start
/// with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSpec {
    /// Catalog key for the tool
    pub name: ToolName,
    /// Threshold applied when a form does not override it
    pub default_threshold: u32,
}

impl ToolSpec {
    /// Create a tool spec from an already-validated name.
    #[must_use]
    pub const fn new(name: ToolName, default_threshold: u32) -> Self {
        Self {
            name,
            default_threshold,
        }
    }

    /// Internal constructor for built-in presets.
    pub(crate) fn preset(name: &str, default_threshold: u32) -> Self {
        Self {
            name: ToolName::from_raw(name),
            default_threshold,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Catalog
// ═══════════════════════════════════════════════════════════════════════════

/// The validated catalog: unique tools, unique sheet types, and the default
/// threshold applied to sheets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogFile")]
pub struct Catalog {
    pub(crate) tools: Vector<ToolSpec>,
    pub(crate) film_sheets: Vector<SheetType>,
    pub(crate) default_sheet_threshold: u32,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate tool names or sheet types.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` when an entry appears more than once.
    pub fn new(
        tools: impl IntoIterator<Item = ToolSpec>,
        film_sheets: impl IntoIterator<Item = SheetType>,
        default_sheet_threshold: u32,
    ) -> Result<Self, CatalogError> {
        let tools: Vector<ToolSpec> = tools.into_iter().collect();
        let film_sheets: Vector<SheetType> = film_sheets.into_iter().collect();

        let mut seen_tools = HashSet::new();
        for spec in &tools {
            if !seen_tools.insert(spec.name.as_str().to_string()) {
                return Err(CatalogError::DuplicateTool(spec.name.as_str().to_string()));
            }
        }

        let mut seen_sheets = HashSet::new();
        for sheet in &film_sheets {
            if !seen_sheets.insert(sheet.as_str().to_string()) {
                return Err(CatalogError::DuplicateSheet(sheet.as_str().to_string()));
            }
        }

        Ok(Self {
            tools,
            film_sheets,
            default_sheet_threshold,
        })
    }

    /// Get the tool specs
    #[must_use]
    pub const fn tools(&self) -> &Vector<ToolSpec> {
        &self.tools
    }

    /// Get the film-sheet types
    #[must_use]
    pub const fn film_sheets(&self) -> &Vector<SheetType> {
        &self.film_sheets
    }

    /// Get the threshold applied to sheets when a form does not override it
    #[must_use]
    pub const fn default_sheet_threshold(&self) -> u32 {
        self.default_sheet_threshold
    }

    /// Find a tool spec by name
    #[must_use]
    pub fn tool(&self, name: &str) -> Option<&ToolSpec> {
        self.tools.iter().find(|spec| spec.name.as_str() == name)
    }

    /// Check whether a sheet type is part of the catalog
    #[must_use]
    pub fn has_sheet(&self, sheet_type: &str) -> bool {
        self.film_sheets
            .iter()
            .any(|sheet| sheet.as_str() == sheet_type)
    }

    /// Total number of catalog entries across both sections
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len() + self.film_sheets.len()
    }

    /// Check if the catalog has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty() && self.film_sheets.is_empty()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// File representation
// ═══════════════════════════════════════════════════════════════════════════

/// One tool entry as written in a catalog file.
#[derive(Debug, Deserialize)]
pub(crate) struct ToolSpecFile {
    pub(crate) name: String,
    pub(crate) default_threshold: u32,
}

/// The catalog as written on disk. Unknown keys are tolerated; missing
/// sections fall back to empty lists and the built-in sheet threshold.
#[derive(Debug, Deserialize)]
pub(crate) struct CatalogFile {
    #[serde(default)]
    pub(crate) tools: Vec<ToolSpecFile>,
    #[serde(default)]
    pub(crate) film_sheets: Vec<String>,
    #[serde(default = "file_default_sheet_threshold")]
    pub(crate) default_sheet_threshold: u32,
}

const fn file_default_sheet_threshold() -> u32 {
    DEFAULT_SHEET_THRESHOLD
}

impl TryFrom<CatalogFile> for Catalog {
    type Error = CatalogError;

    fn try_from(file: CatalogFile) -> Result<Self, Self::Error> {
        let tools = file
            .tools
            .into_iter()
            .map(|entry| Ok(ToolSpec::new(ToolName::parse(entry.name)?, entry.default_threshold)))
            .collect::<Result<Vec<_>, IdentifierError>>()?;

        let film_sheets = file
            .film_sheets
            .into_iter()
            .map(SheetType::parse)
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(tools, film_sheets, file.default_sheet_threshold)
    }
}
