//! Injectable unique-id generation
//!
//! Trailer and log ids are minted through the [`IdMinter`] trait so that
//! mutation flows are deterministic under test. Production code uses
//! [`UuidMinter`]; tests use [`SequenceMinter`].

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::domain::identifiers::{LogId, TrailerId};

/// A source of fresh, unique identifiers.
pub trait IdMinter {
    /// Mint an id for a new trailer.
    fn trailer_id(&self) -> TrailerId;

    /// Mint an id for a new activity log entry.
    fn log_id(&self) -> LogId;
}

/// Production minter backed by random v4 UUIDs.
///
/// Ids look like `tr-5b4c…` / `log-9f02…` (prefix plus 32 hex characters).
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidMinter;

impl IdMinter for UuidMinter {
    fn trailer_id(&self) -> TrailerId {
        TrailerId::from_raw(format!("tr-{}", Uuid::new_v4().simple()))
    }

    fn log_id(&self) -> LogId {
        LogId::from_raw(format!("log-{}", Uuid::new_v4().simple()))
    }
}

/// Deterministic minter that hands out sequential ids.
///
/// Trailer and log ids draw from the same counter, so a single flow
/// produces a readable, strictly increasing id trail.
#[derive(Debug, Default)]
pub struct SequenceMinter {
    counter: AtomicU64,
}

impl SequenceMinter {
    /// Create a minter whose first id ends in `-1`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }

    fn next(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::Relaxed).saturating_add(1)
    }
}

impl IdMinter for SequenceMinter {
    fn trailer_id(&self) -> TrailerId {
        TrailerId::from_raw(format!("tr-{}", self.next()))
    }

    fn log_id(&self) -> LogId {
        LogId::from_raw(format!("log-{}", self.next()))
    }
}
