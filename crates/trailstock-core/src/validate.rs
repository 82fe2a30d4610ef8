//! Form validation with per-field error accumulation
//!
//! Validation walks the whole form in one pass and reports every problem
//! it finds, keyed by field, so callers can render all messages inline
//! instead of re-prompting one error at a time. No state changes on
//! failure: the validator only reads.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use std::collections::HashSet;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::domain::identifiers::{IdentifierError, TrailerName};
use crate::form::TrailerForm;

// ============================================================================
// ERROR TYPES
// ============================================================================

/// One named-field problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field key: `trailer_name`, `registration_number`, `parking_address`,
    /// `state`, `city`, `tool_<name>`, or `sheet_<type>`
    pub field: String,
    /// Human-readable message suitable for inline rendering
    pub message: String,
}

impl FieldError {
    /// Create a field error
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// A non-empty set of field errors, returned when a form is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailure {
    errors: Vector<FieldError>,
}

impl ValidationFailure {
    /// Build a failure carrying a single field error.
    #[must_use]
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: Vector::unit(FieldError::new(field, message)),
        }
    }

    /// Get the field errors, in validation order
    #[must_use]
    pub const fn errors(&self) -> &Vector<FieldError> {
        &self.errors
    }
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation failed")?;
        for (i, err) in self.errors.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{sep}{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailure {}

// ============================================================================
// OUTCOME
// ============================================================================

/// The result of validating a form: either clean or a list of field errors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationOutcome {
    errors: Vector<FieldError>,
}

impl ValidationOutcome {
    /// Check whether the form passed with no errors
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the accumulated field errors, in validation order
    #[must_use]
    pub const fn errors(&self) -> &Vector<FieldError> {
        &self.errors
    }

    /// Convert into a `Result`, packaging errors as a `ValidationFailure`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailure` when any field error was recorded.
    pub fn into_result(self) -> Result<(), ValidationFailure> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailure {
                errors: self.errors,
            })
        }
    }

    fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push_back(FieldError::new(field, message));
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

/// Validate a trailer form against the catalog and the set of names
/// already in use.
///
/// `existing_names` holds trimmed names of active trailers; for an update
/// the caller excludes the trailer being edited, so keeping its own name
/// never collides. Comparison is case-sensitive.
///
/// All checks run in one pass: a form with several problems gets one
/// error per problem, in a deterministic order (name, required fields,
/// tool thresholds, sheet thresholds).
#[must_use]
pub fn validate_trailer_form(
    form: &TrailerForm,
    existing_names: &HashSet<String>,
    catalog: &Catalog,
) -> ValidationOutcome {
    let mut outcome = ValidationOutcome::default();

    match TrailerName::parse(form.trailer_name.clone()) {
        Ok(name) => {
            if existing_names.contains(name.as_str()) {
                outcome.push(
                    "trailer_name",
                    format!("Trailer name '{name}' is already in use"),
                );
            }
        }
        Err(IdentifierError::Empty) => {
            outcome.push("trailer_name", "Trailer name is required");
        }
        Err(IdentifierError::TooLong { max, .. }) => {
            outcome.push(
                "trailer_name",
                format!("Trailer name must be at most {max} characters"),
            );
        }
        Err(e) => outcome.push("trailer_name", e.to_string()),
    }

    for (field, value) in [
        ("registration_number", &form.registration_number),
        ("parking_address", &form.parking_address),
        ("state", &form.state),
        ("city", &form.city),
    ] {
        if value.trim().is_empty() {
            outcome.push(field, "This field is required");
        }
    }

    // Threshold overrides for keys outside the catalog are ignored, not
    // rejected: the catalog defines the item set
    for (tool, threshold) in &form.tool_thresholds {
        if *threshold < 0 && catalog.tool(tool).is_some() {
            outcome.push(format!("tool_{tool}"), "Threshold cannot be negative");
        }
    }

    for (sheet, threshold) in &form.sheet_thresholds {
        if *threshold < 0 && catalog.has_sheet(sheet) {
            outcome.push(format!("sheet_{sheet}"), "Threshold cannot be negative");
        }
    }

    outcome
}
