//! Trailstock-core - Trailer inventory and status domain
//!
//! This crate provides:
//! - Inventory items and the derived status ladder (`good`/`low`/`critical`)
//! - The trailer aggregate with append-only activity history
//! - One-pass form validation with per-field errors
//! - Pure create/update/archive/restock/note mutations
//! - Fleet filtering, sorting, and pagination
//! - A caller-owned immutable `FleetStore`
//!
//! # Laws
//!
//! - Status is always derived from stock and threshold, never trusted
//!   from storage. Stock at or below the threshold is `low`; zero is
//!   `critical`. One out-of-stock item makes the whole trailer
//!   `unavailable`.
//! - Mutations return new values; nothing is edited in place. Readers
//!   holding an old snapshot never see a half-applied change.
//! - Business-rule failures are structured `Error` values, never panics.
//!
//! The clock and id generator are injected (see [`clock`] and [`idgen`])
//! so every operation is deterministic under test.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod clock;
pub mod domain;
pub mod error;
pub mod form;
pub mod idgen;
pub mod mutations;
pub mod query;
pub mod store;
pub mod validate;

pub use catalog::{load_catalog, Catalog, CatalogError, ToolSpec};
pub use clock::{Clock, FixedClock, SystemClock};
pub use domain::{
    derive_item_status, derive_trailer_status, ActivityKind, ActivityLog, IdentifierError,
    Inventory, InventoryItem, ItemStatus, Lifecycle, LogId, SheetItem, SheetType, ToolItem,
    ToolName, Trailer, TrailerId, TrailerName, TrailerProfile, TrailerStatus,
};
pub use error::{Error, Result};
pub use form::{StockLevels, TrailerForm};
pub use idgen::{IdMinter, SequenceMinter, UuidMinter};
pub use mutations::{
    add_note, archive_trailer, create_trailer, restock_trailer, update_trailer, MutationContext,
};
pub use query::{
    apply_query, filter_trailers, paginate, sort_trailers, SortDirection, SortField, TrailerFilter,
    TrailerQuery,
};
pub use store::FleetStore;
pub use validate::{validate_trailer_form, FieldError, ValidationFailure, ValidationOutcome};
