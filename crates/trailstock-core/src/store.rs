//! Caller-owned fleet collection
//!
//! `FleetStore` is the single place trailers live between operations. It
//! is an immutable value: every operation returns a new store and leaves
//! the old one intact, so readers holding an old snapshot never observe a
//! partially applied change. Id resolution happens here and nowhere else;
//! the mutation functions below it take resolved trailers and cannot fail
//! on a missing id.
//!
//! Callers serialize writers themselves by routing every mutation through
//! one owner of the current store value and replacing it with the result.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use std::collections::HashSet;

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::identifiers::TrailerId;
use crate::domain::trailer::Trailer;
use crate::error::{Error, Result};
use crate::form::{StockLevels, TrailerForm};
use crate::mutations::{
    add_note, archive_trailer, create_trailer, restock_trailer, update_trailer, MutationContext,
};

/// The fleet: every trailer ever created, active and archived alike.
///
/// Insertion order is preserved; views and queries never reorder it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetStore {
    trailers: Vector<Trailer>,
}

// ============================================================================
// CONSTRUCTION & READS
// ============================================================================

impl FleetStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing trailers.
    ///
    /// # Errors
    ///
    /// Returns `Error::Conflict` when two trailers share an id.
    pub fn from_trailers(trailers: impl IntoIterator<Item = Trailer>) -> Result<Self> {
        trailers
            .into_iter()
            .try_fold(Self::new(), |store, trailer| store.inserted(trailer))
    }

    /// All trailers, in insertion order.
    #[must_use]
    pub const fn trailers(&self) -> &Vector<Trailer> {
        &self.trailers
    }

    /// Trailers still in the working fleet, in insertion order.
    #[must_use]
    pub fn active(&self) -> Vector<Trailer> {
        self.trailers
            .iter()
            .filter(|trailer| trailer.is_active())
            .cloned()
            .collect()
    }

    /// Look up a trailer by id.
    #[must_use]
    pub fn get(&self, id: &TrailerId) -> Option<&Trailer> {
        self.trailers.iter().find(|trailer| trailer.id() == id)
    }

    /// Check whether an id exists in the store.
    #[must_use]
    pub fn contains(&self, id: &TrailerId) -> bool {
        self.get(id).is_some()
    }

    /// Number of trailers, archived included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trailers.len()
    }

    /// Check if the store holds no trailers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trailers.is_empty()
    }

    /// Names of active trailers, optionally excluding one id.
    ///
    /// This is the uniqueness set validation checks against: archived
    /// trailers free their names, and an edit excludes its own trailer
    /// so an unchanged name passes.
    #[must_use]
    pub fn active_names(&self, excluding: Option<&TrailerId>) -> HashSet<String> {
        self.trailers
            .iter()
            .filter(|trailer| trailer.is_active())
            .filter(|trailer| excluding.is_none_or(|id| trailer.id() != id))
            .map(|trailer| trailer.name().as_str().to_string())
            .collect()
    }
}

// ============================================================================
// WRITES
// ============================================================================

impl FleetStore {
    fn inserted(&self, trailer: Trailer) -> Result<Self> {
        if self.contains(trailer.id()) {
            return Err(Error::conflict(format!(
                "trailer id already present: {}",
                trailer.id()
            )));
        }
        let mut trailers = self.trailers.clone();
        trailers.push_back(trailer);
        Ok(Self { trailers })
    }

    fn replaced(&self, trailer: Trailer) -> Result<Self> {
        let index = self
            .trailers
            .iter()
            .position(|existing| existing.id() == trailer.id())
            .ok_or_else(|| Error::not_found(trailer.id().clone()))?;
        Ok(Self {
            trailers: self.trailers.update(index, trailer),
        })
    }

    fn resolve(&self, id: &TrailerId) -> Result<&Trailer> {
        self.get(id).ok_or_else(|| Error::not_found(id.clone()))
    }

    /// Create a trailer and add it to the store.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` when the form is rejected; the store
    /// is unchanged in that case.
    pub fn create(&self, ctx: &MutationContext<'_>, form: &TrailerForm) -> Result<Self> {
        let trailer = create_trailer(ctx, form, &self.active_names(None))?;
        debug!(id = %trailer.id(), name = %trailer.name(), "trailer created");
        self.inserted(trailer)
    }

    /// Apply a form and stock levels to the trailer with the given id.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` for an unknown id and
    /// `Error::Validation` for a rejected form; the store is unchanged
    /// either way.
    pub fn update(
        &self,
        ctx: &MutationContext<'_>,
        id: &TrailerId,
        form: &TrailerForm,
        stock_levels: &StockLevels,
    ) -> Result<Self> {
        let existing = self.resolve(id)?;
        let names = self.active_names(Some(id));
        let updated = update_trailer(ctx, existing, form, stock_levels, &names)?;
        debug!(id = %id, status = %updated.status(), "trailer updated");
        self.replaced(updated)
    }

    /// Archive the trailer with the given id.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` for an unknown id.
    pub fn archive(&self, ctx: &MutationContext<'_>, id: &TrailerId) -> Result<Self> {
        let existing = self.resolve(id)?;
        let archived = archive_trailer(ctx, existing);
        debug!(id = %id, "trailer archived");
        self.replaced(archived)
    }

    /// Restock the trailer with the given id to its thresholds.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` for an unknown id.
    pub fn restock(&self, ctx: &MutationContext<'_>, id: &TrailerId) -> Result<Self> {
        let existing = self.resolve(id)?;
        let restocked = restock_trailer(ctx, existing);
        debug!(id = %id, status = %restocked.status(), "trailer restocked");
        self.replaced(restocked)
    }

    /// Attach a note to the trailer with the given id.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` for an unknown id and
    /// `Error::Validation` for a blank note.
    pub fn note(&self, ctx: &MutationContext<'_>, id: &TrailerId, text: &str) -> Result<Self> {
        let existing = self.resolve(id)?;
        let noted = add_note(ctx, existing, text)?;
        self.replaced(noted)
    }
}
