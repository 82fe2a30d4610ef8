//! Injectable wall-clock time source
//!
//! Every `timestamp`/`created_at`/`updated_at` in the domain comes through
//! the [`Clock`] trait rather than calling `Utc::now()` at the point of use,
//! so mutation flows are deterministic under test.

use chrono::{DateTime, Utc};

/// A source of wall-clock time.
pub trait Clock {
    /// Current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Deterministic clock that always reports the same instant.
///
/// Tests that need time to move forward construct a second `FixedClock`
/// at a later instant rather than mutating this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Create a clock pinned to the given instant.
    #[must_use]
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// The pinned instant.
    #[must_use]
    pub const fn instant(&self) -> DateTime<Utc> {
        self.instant
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}
