//! Semantic newtypes for domain identifiers
//!
//! # Parse-at-Boundaries Pattern
//!
//! Each identifier type:
//! - Validates its input on construction (parse-once pattern)
//! - Trims whitespace before validation (boundary sanitization)
//! - Cannot represent invalid states
//! - Provides safe access to the underlying value
//! - Implements serde serialization/deserialization with validation
//!
//! # Unified Error Type
//!
//! All identifier validation uses a single `IdentifierError` enum:
//! - **`Empty`**: Identifier is empty or whitespace-only
//! - **`TooLong`**: Exceeds type-specific maximum length
//! - **`InvalidCharacters`**: Contains characters not allowed for the type
//! - **`NotAscii`**: Identifier must be ASCII-only
//!
//! Catalog keys (`ToolName`, `SheetType`) and the human-facing `TrailerName`
//! accept any printable text; machine ids (`TrailerId`, `LogId`) are ASCII.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// UNIFIED IDENTIFIER ERROR
// ============================================================================

/// Unified error type for all identifier validation.
///
/// All identifier types use this single error type, making error handling
/// consistent across the domain layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// Identifier is empty or contains only whitespace
    #[error("identifier cannot be empty")]
    Empty,

    /// Identifier exceeds maximum length
    #[error("identifier too long: {actual} characters (max {max})")]
    TooLong {
        /// The maximum allowed length
        max: usize,
        /// The actual length provided
        actual: usize,
    },

    /// Identifier contains invalid characters
    #[error("identifier contains invalid characters: {details}")]
    InvalidCharacters {
        /// Human-readable explanation of what's invalid
        details: String,
    },

    /// Identifier must be ASCII
    #[error("identifier must be ASCII only: {value}")]
    NotAscii {
        /// The value that failed ASCII validation
        value: String,
    },
}

impl IdentifierError {
    /// Create an `Empty` error variant
    #[must_use]
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Create a `TooLong` error variant
    #[must_use]
    pub const fn too_long(max: usize, actual: usize) -> Self {
        Self::TooLong { max, actual }
    }

    /// Create an `InvalidCharacters` error variant
    #[must_use]
    pub fn invalid_characters(details: impl Into<String>) -> Self {
        Self::InvalidCharacters {
            details: details.into(),
        }
    }

    /// Check if this is an `Empty` error
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Check if this is a `TooLong` error
    #[must_use]
    pub const fn is_too_long(&self) -> bool {
        matches!(self, Self::TooLong { .. })
    }
}

// ============================================================================
// VALIDATION RULES
// ============================================================================

/// Validate a machine identifier (trailer/log id)
///
/// Rules:
/// - Must be non-empty
/// - Must be ASCII
/// - Must be 1-64 characters
fn validate_machine_id(s: &str) -> Result<(), IdentifierError> {
    if s.is_empty() {
        return Err(IdentifierError::empty());
    }

    if !s.is_ascii() {
        return Err(IdentifierError::NotAscii {
            value: s.to_string(),
        });
    }

    if s.len() > 64 {
        return Err(IdentifierError::too_long(64, s.len()));
    }

    Ok(())
}

/// Validate a human-facing name (trailer name, catalog keys)
///
/// Rules:
/// - Must be non-empty after trimming
/// - Must not exceed `max` characters
/// - Must not contain control characters
fn validate_name(s: &str, max: usize) -> Result<(), IdentifierError> {
    if s.is_empty() {
        return Err(IdentifierError::empty());
    }

    let length = s.chars().count();
    if length > max {
        return Err(IdentifierError::too_long(max, length));
    }

    if s.chars().any(char::is_control) {
        return Err(IdentifierError::invalid_characters(format!(
            "name '{s}' must not contain control characters"
        )));
    }

    Ok(())
}

// ============================================================================
// TRAILER ID
// ============================================================================

/// A validated trailer identifier
///
/// Assigned once at creation by an [`crate::idgen::IdMinter`] and never
/// reassigned afterwards.
///
/// # Guarantees
///
/// - Non-empty
/// - ASCII only
/// - 1-64 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct TrailerId(String);

impl TrailerId {
    /// Maximum allowed length for a trailer id
    pub const MAX_LENGTH: usize = 64;

    /// Parse and validate a trailer id (trims whitespace first)
    ///
    /// # Errors
    ///
    /// Returns `IdentifierError` if the id is invalid.
    pub fn parse(s: impl Into<String>) -> Result<Self, IdentifierError> {
        let s = s.into();
        let trimmed = s.trim();
        validate_machine_id(trimmed)?;
        Ok(Self(trimmed.to_string()))
    }

    /// Internal constructor for minted ids whose format the crate controls.
    pub(crate) fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the trailer id as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into an owned String
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for TrailerId {
    type Error = IdentifierError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for TrailerId {
    type Error = IdentifierError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl std::fmt::Display for TrailerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TrailerId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for TrailerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// TRAILER NAME
// ============================================================================

/// A validated trailer name
///
/// # Construction
///
/// ```rust
/// use trailstock_core::domain::TrailerName;
///
/// let name = TrailerName::parse("North Yard #2")?;
/// # Ok::<(), trailstock_core::domain::IdentifierError>(())
/// ```
///
/// # Guarantees
///
/// - Non-empty after trimming
/// - No control characters
/// - 1-120 characters
///
/// Uniqueness across the active fleet is a validation-time rule, checked
/// against the caller-supplied name set, not a property of this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct TrailerName(String);

impl TrailerName {
    /// Maximum allowed length for a trailer name
    pub const MAX_LENGTH: usize = 120;

    /// Parse and validate a trailer name (trims whitespace first)
    ///
    /// This follows the "parse at boundaries" principle:
    /// - Trims whitespace from input
    /// - Validates once at construction
    /// - Cannot represent invalid states
    ///
    /// # Errors
    ///
    /// Returns `IdentifierError` if the name is invalid.
    pub fn parse(s: impl Into<String>) -> Result<Self, IdentifierError> {
        let s = s.into();
        let trimmed = s.trim();
        validate_name(trimmed, Self::MAX_LENGTH)?;
        Ok(Self(trimmed.to_string()))
    }

    /// Get the trailer name as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into an owned String
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for TrailerName {
    type Error = IdentifierError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for TrailerName {
    type Error = IdentifierError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl std::fmt::Display for TrailerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TrailerName {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for TrailerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<TrailerName> for String {
    #[allow(clippy::use_self)] // Self refers to String, not TrailerName
    fn from(name: TrailerName) -> String {
        name.0
    }
}

// ============================================================================
// TOOL NAME
// ============================================================================

/// A validated tool name drawn from the tool catalog
///
/// # Guarantees
///
/// - Non-empty after trimming
/// - No control characters
/// - 1-64 characters
///
/// Membership in the configured catalog is enforced where inventories are
/// built, not by this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct ToolName(String);

impl ToolName {
    /// Maximum allowed length for a tool name
    pub const MAX_LENGTH: usize = 64;

    /// Parse and validate a tool name (trims whitespace first)
    ///
    /// # Errors
    ///
    /// Returns `IdentifierError` if the name is invalid.
    pub fn parse(s: impl Into<String>) -> Result<Self, IdentifierError> {
        let s = s.into();
        let trimmed = s.trim();
        validate_name(trimmed, Self::MAX_LENGTH)?;
        Ok(Self(trimmed.to_string()))
    }

    /// Internal constructor for catalog presets whose format the crate controls.
    pub(crate) fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the tool name as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into an owned String
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ToolName {
    type Error = IdentifierError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ToolName {
    type Error = IdentifierError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl std::fmt::Display for ToolName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ToolName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// SHEET TYPE
// ============================================================================

/// A validated film-sheet type drawn from the sheet catalog
///
/// # Guarantees
///
/// - Non-empty after trimming
/// - No control characters
/// - 1-64 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct SheetType(String);

impl SheetType {
    /// Maximum allowed length for a sheet type
    pub const MAX_LENGTH: usize = 64;

    /// Parse and validate a sheet type (trims whitespace first)
    ///
    /// # Errors
    ///
    /// Returns `IdentifierError` if the sheet type is invalid.
    pub fn parse(s: impl Into<String>) -> Result<Self, IdentifierError> {
        let s = s.into();
        let trimmed = s.trim();
        validate_name(trimmed, Self::MAX_LENGTH)?;
        Ok(Self(trimmed.to_string()))
    }

    /// Internal constructor for catalog presets whose format the crate controls.
    pub(crate) fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the sheet type as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into an owned String
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for SheetType {
    type Error = IdentifierError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for SheetType {
    type Error = IdentifierError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl std::fmt::Display for SheetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SheetType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// LOG ID
// ============================================================================

/// A validated activity log entry identifier
///
/// # Guarantees
///
/// - Non-empty
/// - ASCII only
/// - 1-64 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct LogId(String);

impl LogId {
    /// Maximum allowed length for a log id
    pub const MAX_LENGTH: usize = 64;

    /// Parse and validate a log id (trims whitespace first)
    ///
    /// # Errors
    ///
    /// Returns `IdentifierError` if the id is invalid.
    pub fn parse(s: impl Into<String>) -> Result<Self, IdentifierError> {
        let s = s.into();
        let trimmed = s.trim();
        validate_machine_id(trimmed)?;
        Ok(Self(trimmed.to_string()))
    }

    /// Internal constructor for minted ids whose format the crate controls.
    pub(crate) fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the log id as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into an owned String
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for LogId {
    type Error = IdentifierError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for LogId {
    type Error = IdentifierError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl std::fmt::Display for LogId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for LogId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
