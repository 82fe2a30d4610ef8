//! Append-only activity log entries
//!
//! Every mutation that changes observable trailer state appends entries
//! describing what changed. Entries are never edited or removed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::domain::identifiers::LogId;

/// The category of change an activity log entry records
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// Trailer was created
    Created,
    /// Name or registration number changed
    Updated,
    /// Stock counts or thresholds changed
    InventoryUpdated,
    /// Two or more location fields changed together
    LocationChanged,
    /// Parking address changed
    AddressChanged,
    /// State changed
    StateChanged,
    /// City changed
    CityChanged,
    /// Derived trailer status flipped
    StatusChanged,
    /// Free-text note attached
    NoteAdded,
}

/// An immutable record of one change to a trailer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityLog {
    id: LogId,
    timestamp: DateTime<Utc>,
    kind: ActivityKind,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<String>,
    system_generated: bool,
}

impl ActivityLog {
    /// Create a system-generated entry (no attributed user).
    #[must_use]
    pub fn new(
        id: LogId,
        kind: ActivityKind,
        description: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            timestamp,
            kind,
            description: description.into(),
            user: None,
            system_generated: true,
        }
    }

    /// Attribute this entry to a user, marking it user-initiated.
    #[must_use]
    pub fn with_user(self, actor: impl Into<String>) -> Self {
        Self {
            user: Some(actor.into()),
            system_generated: false,
            ..self
        }
    }

    /// Get the entry id
    #[must_use]
    pub const fn id(&self) -> &LogId {
        &self.id
    }

    /// Get the entry timestamp
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Get the entry kind
    #[must_use]
    pub const fn kind(&self) -> ActivityKind {
        self.kind
    }

    /// Get the human-readable description
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the attributed user, if any
    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Check whether the entry was system-generated
    #[must_use]
    pub const fn is_system_generated(&self) -> bool {
        self.system_generated
    }
}
