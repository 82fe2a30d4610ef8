//! The trailer aggregate: profile, inventory, lifecycle, and history
//!
//! A `Trailer` is an immutable value. Transitions return a new `Trailer`
//! and recompute the derived status whenever the inventory changes. The
//! activity log is append-only and survives every transition.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use chrono::{DateTime, Utc};
use im::Vector;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::domain::activity::ActivityLog;
use crate::domain::identifiers::{TrailerId, TrailerName};
use crate::domain::inventory::Inventory;
use crate::domain::status::{derive_trailer_status, TrailerStatus};

// ============================================================================
// PROFILE
// ============================================================================

/// The editable identity fields of a trailer.
///
/// The name is a validated newtype; the remaining fields are free text
/// whose presence is checked by form validation, not by this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailerProfile {
    /// Display name, unique across active trailers
    pub name: TrailerName,
    /// Plate or registration number
    pub registration_number: String,
    /// Street address where the trailer is parked
    pub parking_address: String,
    /// State or province
    pub state: String,
    /// City
    pub city: String,
}

// ============================================================================
// LIFECYCLE
// ============================================================================

/// Whether a trailer is part of the working fleet or retired.
///
/// Orthogonal to [`TrailerStatus`]: an archived trailer keeps its last
/// derived status, and an unavailable trailer may still be active.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Lifecycle {
    /// In the working fleet
    #[default]
    Active,
    /// Retired from the fleet, retained for history
    Archived,
}

impl Lifecycle {
    /// Check if the trailer is in the working fleet
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    /// Check if the trailer has been archived
    #[must_use]
    pub const fn is_archived(self) -> bool {
        matches!(self, Self::Archived)
    }
}

// ============================================================================
// TRAILER
// ============================================================================

/// A trailer and everything tracked about it.
///
/// Fields are private: the derived status can only change through
/// transitions that recompute it, and the activity log can only grow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawTrailer")]
pub struct Trailer {
    id: TrailerId,
    profile: TrailerProfile,
    inventory: Inventory,
    status: TrailerStatus,
    lifecycle: Lifecycle,
    activity: Vector<ActivityLog>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Shadow struct for deserialization: no status field, so the derived
/// value is recomputed from the loaded inventory.
#[derive(Deserialize)]
struct RawTrailer {
    id: TrailerId,
    profile: TrailerProfile,
    inventory: Inventory,
    #[serde(default)]
    lifecycle: Lifecycle,
    #[serde(default)]
    activity: Vector<ActivityLog>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<RawTrailer> for Trailer {
    fn from(raw: RawTrailer) -> Self {
        Self {
            status: derive_trailer_status(&raw.inventory),
            id: raw.id,
            profile: raw.profile,
            inventory: raw.inventory,
            lifecycle: raw.lifecycle,
            activity: raw.activity,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
        }
    }
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl Trailer {
    /// Create a new active trailer with an empty history.
    ///
    /// Status is derived from the supplied inventory; `updated_at` starts
    /// equal to `created_at`.
    #[must_use]
    pub fn new(
        id: TrailerId,
        profile: TrailerProfile,
        inventory: Inventory,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            status: derive_trailer_status(&inventory),
            id,
            profile,
            inventory,
            lifecycle: Lifecycle::Active,
            activity: Vector::new(),
            created_at,
            updated_at: created_at,
        }
    }
}

// ============================================================================
// QUERIES
// ============================================================================

impl Trailer {
    /// Get the trailer id
    #[must_use]
    pub const fn id(&self) -> &TrailerId {
        &self.id
    }

    /// Get the display name
    #[must_use]
    pub const fn name(&self) -> &TrailerName {
        &self.profile.name
    }

    /// Get the registration number
    #[must_use]
    pub fn registration_number(&self) -> &str {
        &self.profile.registration_number
    }

    /// Get the parking address
    #[must_use]
    pub fn parking_address(&self) -> &str {
        &self.profile.parking_address
    }

    /// Get the state
    #[must_use]
    pub fn state(&self) -> &str {
        &self.profile.state
    }

    /// Get the city
    #[must_use]
    pub fn city(&self) -> &str {
        &self.profile.city
    }

    /// Get the full profile
    #[must_use]
    pub const fn profile(&self) -> &TrailerProfile {
        &self.profile
    }

    /// Get the inventory
    #[must_use]
    pub const fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Get the derived status
    #[must_use]
    pub const fn status(&self) -> TrailerStatus {
        self.status
    }

    /// Get the lifecycle state
    #[must_use]
    pub const fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Get the activity history, oldest first
    #[must_use]
    pub const fn activity(&self) -> &Vector<ActivityLog> {
        &self.activity
    }

    /// Get the creation timestamp
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Get the last-modified timestamp
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Check if the trailer is in the working fleet
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.lifecycle.is_active()
    }

    /// Check if the trailer has been archived
    #[must_use]
    pub const fn is_archived(&self) -> bool {
        self.lifecycle.is_archived()
    }
}

// ============================================================================
// TRANSITIONS
// ============================================================================

impl Trailer {
    /// Replace the profile and advance `updated_at`.
    pub(crate) fn with_profile(self, profile: TrailerProfile, at: DateTime<Utc>) -> Self {
        Self {
            profile,
            updated_at: at,
            ..self
        }
    }

    /// Replace the inventory, recompute status, and advance `updated_at`.
    pub(crate) fn with_inventory(self, inventory: Inventory, at: DateTime<Utc>) -> Self {
        Self {
            status: derive_trailer_status(&inventory),
            inventory,
            updated_at: at,
            ..self
        }
    }

    /// Append one activity entry. Does not touch `updated_at`: callers
    /// stamp the mutation once, not per entry.
    pub(crate) fn with_entry(self, entry: ActivityLog) -> Self {
        let mut activity = self.activity.clone();
        activity.push_back(entry);
        Self { activity, ..self }
    }

    /// Retire the trailer from the working fleet.
    pub(crate) fn archived_at(self, at: DateTime<Utc>) -> Self {
        Self {
            lifecycle: Lifecycle::Archived,
            updated_at: at,
            ..self
        }
    }

    /// Advance `updated_at` without changing anything else.
    pub(crate) fn touched(self, at: DateTime<Utc>) -> Self {
        Self {
            updated_at: at,
            ..self
        }
    }
}
