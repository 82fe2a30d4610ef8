//! Pure mutation functions over trailers
//!
//! Every operation here takes the current state plus injected
//! collaborators and returns a new [`Trailer`]; nothing is mutated in
//! place and nothing does IO. The clock and id generator arrive through
//! [`MutationContext`] so tests can pin them.
//!
//! # Activity Contract
//!
//! A successful mutation appends one log entry per *category* of change
//! it detects (a single `inventory_updated` entry even when ten items
//! changed), never one per field. Validation failure appends nothing and
//! returns the input untouched. `updated_at` advances on every successful
//! mutation, including updates that turn out to be no-ops.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use itertools::Itertools;

use crate::catalog::Catalog;
use crate::clock::Clock;
use crate::domain::activity::{ActivityKind, ActivityLog};
use crate::domain::identifiers::{IdentifierError, TrailerName};
use crate::domain::inventory::Inventory;
use crate::domain::trailer::{Trailer, TrailerProfile};
use crate::error::Result;
use crate::form::{StockLevels, TrailerForm};
use crate::idgen::IdMinter;
use crate::validate::{validate_trailer_form, ValidationFailure};

// ============================================================================
// MUTATION CONTEXT
// ============================================================================

/// Injected collaborators shared by every mutation.
///
/// The optional actor is attributed on the entries a mutation appends;
/// without one, entries are marked system-generated. Status-change
/// entries are always system-generated, since the status is derived.
#[derive(Clone)]
pub struct MutationContext<'a> {
    catalog: &'a Catalog,
    clock: &'a dyn Clock,
    ids: &'a dyn IdMinter,
    actor: Option<String>,
}

impl<'a> MutationContext<'a> {
    /// Create a context with no attributed actor.
    #[must_use]
    pub fn new(catalog: &'a Catalog, clock: &'a dyn Clock, ids: &'a dyn IdMinter) -> Self {
        Self {
            catalog,
            clock,
            ids,
            actor: None,
        }
    }

    /// Attribute subsequent mutations to a user.
    #[must_use]
    pub fn with_actor(self, actor: impl Into<String>) -> Self {
        Self {
            actor: Some(actor.into()),
            ..self
        }
    }

    /// Get the catalog mutations build inventories from
    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// An entry attributed to the context's actor, if one is set.
    fn entry(&self, kind: ActivityKind, description: impl Into<String>, at: DateTime<Utc>) -> ActivityLog {
        let log = ActivityLog::new(self.ids.log_id(), kind, description, at);
        match &self.actor {
            Some(actor) => log.with_user(actor.clone()),
            None => log,
        }
    }

    /// An entry that stays system-generated regardless of actor.
    fn system_entry(
        &self,
        kind: ActivityKind,
        description: impl Into<String>,
        at: DateTime<Utc>,
    ) -> ActivityLog {
        ActivityLog::new(self.ids.log_id(), kind, description, at)
    }
}

// ============================================================================
// CREATE
// ============================================================================

/// Create a trailer from a validated form.
///
/// The inventory covers the catalog exactly, with zero stock everywhere
/// and thresholds taken from the form where it overrides the catalog
/// defaults. One `created` entry is seeded into the history.
///
/// # Errors
///
/// Returns `Error::Validation` when the form is rejected; no state is
/// produced in that case.
pub fn create_trailer(
    ctx: &MutationContext<'_>,
    form: &TrailerForm,
    existing_names: &HashSet<String>,
) -> Result<Trailer> {
    validate_trailer_form(form, existing_names, ctx.catalog).into_result()?;

    let profile = profile_from_form(form)?;
    let inventory = inventory_for_create(ctx.catalog, form);
    let now = ctx.now();

    let entry = ctx.entry(
        ActivityKind::Created,
        format!("Trailer '{}' created", profile.name),
        now,
    );
    Ok(Trailer::new(ctx.ids.trailer_id(), profile, inventory, now).with_entry(entry))
}

// ============================================================================
// UPDATE
// ============================================================================

/// Apply a form and new stock levels to an existing trailer.
///
/// The inventory is rebuilt from the catalog: stock comes from
/// `stock_levels`, falling back to the trailer's current count, then
/// zero; thresholds come from the form, falling back to the current
/// value, then the catalog default. Entries for catalog items the
/// trailer never stocked start fresh; stale items the catalog no longer
/// lists are dropped.
///
/// One entry is appended per detected category of change. When exactly
/// one of address/state/city changed, the entry uses the field-specific
/// kind; when several changed together they collapse into a single
/// `location_changed` entry. A derived-status flip appends a
/// system-generated `status_changed` entry on top.
///
/// # Errors
///
/// Returns `Error::Validation` when the form is rejected; the existing
/// trailer is untouched in that case.
pub fn update_trailer(
    ctx: &MutationContext<'_>,
    existing: &Trailer,
    form: &TrailerForm,
    stock_levels: &StockLevels,
    existing_names: &HashSet<String>,
) -> Result<Trailer> {
    validate_trailer_form(form, existing_names, ctx.catalog).into_result()?;

    let profile = profile_from_form(form)?;
    let inventory = inventory_for_update(ctx.catalog, existing.inventory(), form, stock_levels);
    let entries = diff_entries(existing, &profile, &inventory);

    let now = ctx.now();
    let old_status = existing.status();
    let next = existing
        .clone()
        .with_profile(profile, now)
        .with_inventory(inventory, now);

    let next = entries
        .into_iter()
        .fold(next, |trailer, (kind, description)| {
            trailer.with_entry(ctx.entry(kind, description, now))
        });

    if next.status() == old_status {
        Ok(next)
    } else {
        let description = format!("Status changed from {old_status} to {}", next.status());
        Ok(next.with_entry(ctx.system_entry(ActivityKind::StatusChanged, description, now)))
    }
}

// ============================================================================
// ARCHIVE / RESTOCK / NOTES
// ============================================================================

/// Retire a trailer from the working fleet.
///
/// Archiving an already-archived trailer is a no-op: nothing is appended
/// and `updated_at` stays put.
#[must_use]
pub fn archive_trailer(ctx: &MutationContext<'_>, existing: &Trailer) -> Trailer {
    if existing.is_archived() {
        return existing.clone();
    }

    let now = ctx.now();
    existing
        .clone()
        .archived_at(now)
        .with_entry(ctx.entry(ActivityKind::Updated, "Trailer archived", now))
}

/// Restock every item to its reorder threshold.
///
/// Appends exactly one `inventory_updated` entry, plus a system
/// `status_changed` entry if the derived status flipped. Stock and
/// status are idempotent under repeated restocks; the history is not.
#[must_use]
pub fn restock_trailer(ctx: &MutationContext<'_>, existing: &Trailer) -> Trailer {
    let now = ctx.now();
    let old_status = existing.status();

    let next = existing
        .clone()
        .with_inventory(existing.inventory().restocked(), now)
        .with_entry(ctx.entry(
            ActivityKind::InventoryUpdated,
            "All inventory restocked to threshold levels",
            now,
        ));

    if next.status() == old_status {
        next
    } else {
        let description = format!("Status changed from {old_status} to {}", next.status());
        next.with_entry(ctx.system_entry(ActivityKind::StatusChanged, description, now))
    }
}

/// Attach a free-text note to a trailer's history.
///
/// # Errors
///
/// Returns `Error::Validation` when the note is empty or whitespace-only.
pub fn add_note(ctx: &MutationContext<'_>, existing: &Trailer, note: &str) -> Result<Trailer> {
    let text = note.trim();
    if text.is_empty() {
        return Err(ValidationFailure::single("note", "Note text is required").into());
    }

    let now = ctx.now();
    Ok(existing
        .clone()
        .touched(now)
        .with_entry(ctx.entry(ActivityKind::NoteAdded, text, now)))
}

// ============================================================================
// HELPERS
// ============================================================================

fn profile_from_form(form: &TrailerForm) -> std::result::Result<TrailerProfile, IdentifierError> {
    Ok(TrailerProfile {
        name: TrailerName::parse(form.trailer_name.clone())?,
        registration_number: form.registration_number.trim().to_string(),
        parking_address: form.parking_address.trim().to_string(),
        state: form.state.trim().to_string(),
        city: form.city.trim().to_string(),
    })
}

/// Negative overrides never reach inventories: validation rejects them
/// for catalog keys, and anything that slips past clamps to zero.
fn clamp_threshold(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}

fn inventory_for_create(catalog: &Catalog, form: &TrailerForm) -> Inventory {
    let sheet_default = catalog.default_sheet_threshold();
    Inventory::build(
        catalog,
        |spec| {
            let threshold = form
                .tool_thresholds
                .get(spec.name.as_str())
                .copied()
                .map_or(spec.default_threshold, clamp_threshold);
            (0, threshold)
        },
        |sheet| {
            let threshold = form
                .sheet_thresholds
                .get(sheet.as_str())
                .copied()
                .map_or(sheet_default, clamp_threshold);
            (0, threshold)
        },
    )
}

fn inventory_for_update(
    catalog: &Catalog,
    old: &Inventory,
    form: &TrailerForm,
    stock_levels: &StockLevels,
) -> Inventory {
    let sheet_default = catalog.default_sheet_threshold();
    Inventory::build(
        catalog,
        |spec| {
            let stock = stock_levels
                .tools
                .get(spec.name.as_str())
                .copied()
                .or_else(|| old.tool(&spec.name).map(|item| item.current_stock()))
                .unwrap_or(0);
            let threshold = form
                .tool_thresholds
                .get(spec.name.as_str())
                .copied()
                .map(clamp_threshold)
                .or_else(|| old.tool(&spec.name).map(|item| item.threshold()))
                .unwrap_or(spec.default_threshold);
            (stock, threshold)
        },
        |sheet| {
            let stock = stock_levels
                .film_sheets
                .get(sheet.as_str())
                .copied()
                .or_else(|| old.sheet(sheet).map(|item| item.current_stock()))
                .unwrap_or(0);
            let threshold = form
                .sheet_thresholds
                .get(sheet.as_str())
                .copied()
                .map(clamp_threshold)
                .or_else(|| old.sheet(sheet).map(|item| item.threshold()))
                .unwrap_or(sheet_default);
            (stock, threshold)
        },
    )
}

/// One `(kind, description)` pair per detected category of change, in a
/// fixed order: name, registration, location, inventory.
fn diff_entries(
    existing: &Trailer,
    profile: &TrailerProfile,
    inventory: &Inventory,
) -> Vec<(ActivityKind, String)> {
    let mut entries = Vec::new();

    if existing.name() != &profile.name {
        entries.push((
            ActivityKind::Updated,
            format!(
                "Name changed from '{}' to '{}'",
                existing.name(),
                profile.name
            ),
        ));
    }

    if existing.registration_number() != profile.registration_number {
        entries.push((
            ActivityKind::Updated,
            format!(
                "Registration number changed from '{}' to '{}'",
                existing.registration_number(),
                profile.registration_number
            ),
        ));
    }

    let address_changed = existing.parking_address() != profile.parking_address;
    let state_changed = existing.state() != profile.state;
    let city_changed = existing.city() != profile.city;
    let location_changes =
        usize::from(address_changed) + usize::from(state_changed) + usize::from(city_changed);

    if location_changes >= 2 {
        entries.push((
            ActivityKind::LocationChanged,
            format!(
                "Location changed to {}, {}, {}",
                profile.parking_address, profile.city, profile.state
            ),
        ));
    } else if address_changed {
        entries.push((
            ActivityKind::AddressChanged,
            format!("Parking address changed to '{}'", profile.parking_address),
        ));
    } else if state_changed {
        entries.push((
            ActivityKind::StateChanged,
            format!("State changed from '{}' to '{}'", existing.state(), profile.state),
        ));
    } else if city_changed {
        entries.push((
            ActivityKind::CityChanged,
            format!("City changed from '{}' to '{}'", existing.city(), profile.city),
        ));
    }

    let changed = changed_item_names(existing.inventory(), inventory);
    if !changed.is_empty() {
        entries.push((ActivityKind::InventoryUpdated, inventory_description(&changed)));
    }

    entries
}

/// Keys whose stock or threshold differ between the two inventories,
/// including old items the catalog no longer lists.
fn changed_item_names(old: &Inventory, new: &Inventory) -> Vec<String> {
    let mut names = Vec::new();

    for item in new.tools() {
        if old.tool(item.key()).is_none_or(|prev| prev != item) {
            names.push(item.key().as_str().to_string());
        }
    }
    for item in old.tools() {
        if new.tool(item.key()).is_none() {
            names.push(item.key().as_str().to_string());
        }
    }

    for item in new.film_sheets() {
        if old.sheet(item.key()).is_none_or(|prev| prev != item) {
            names.push(item.key().as_str().to_string());
        }
    }
    for item in old.film_sheets() {
        if new.sheet(item.key()).is_none() {
            names.push(item.key().as_str().to_string());
        }
    }

    names
}

fn inventory_description(changed: &[String]) -> String {
    let shown = changed.iter().take(3).join(", ");
    if changed.len() > 3 {
        format!("Inventory updated: {shown} and {} more", changed.len() - 3)
    } else {
        format!("Inventory updated: {shown}")
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::domain::status::TrailerStatus;
    use crate::idgen::SequenceMinter;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).map_or_else(|| panic!("timestamp out of range"), |t| t)
    }

    fn valid_form(name: &str) -> TrailerForm {
        TrailerForm {
            trailer_name: name.to_string(),
            registration_number: "REG-100".to_string(),
            parking_address: "12 Depot Rd".to_string(),
            state: "TX".to_string(),
            city: "Austin".to_string(),
            ..TrailerForm::default()
        }
    }

    fn create(at_secs: i64, name: &str) -> Trailer {
        let catalog = Catalog::standard();
        let clock = FixedClock::new(at(at_secs));
        let ids = SequenceMinter::new();
        let ctx = MutationContext::new(&catalog, &clock, &ids);
        match create_trailer(&ctx, &valid_form(name), &HashSet::new()) {
            Ok(trailer) => trailer,
            Err(e) => panic!("create failed: {e}"),
        }
    }

    #[test]
    fn test_create_seeds_created_entry_and_zero_stock() {
        let trailer = create(1_700_000_000, "Alpha");

        assert_eq!(trailer.status(), TrailerStatus::Unavailable);
        assert_eq!(trailer.activity().len(), 1);
        match trailer.activity().front() {
            Some(entry) => {
                assert_eq!(entry.kind(), ActivityKind::Created);
                assert_eq!(entry.description(), "Trailer 'Alpha' created");
            }
            None => panic!("created entry missing"),
        }
    }

    #[test]
    fn test_create_respects_form_threshold_overrides() {
        let catalog = Catalog::standard();
        let clock = FixedClock::new(at(1_700_000_000));
        let ids = SequenceMinter::new();
        let ctx = MutationContext::new(&catalog, &clock, &ids);

        let form = valid_form("Alpha").with_tool_threshold("Ladders", 9);
        let trailer = match create_trailer(&ctx, &form, &HashSet::new()) {
            Ok(trailer) => trailer,
            Err(e) => panic!("create failed: {e}"),
        };

        let ladders = trailer
            .inventory()
            .tool(&crate::domain::identifiers::ToolName::from_raw("Ladders"));
        match ladders {
            Some(item) => assert_eq!(item.threshold(), 9),
            None => panic!("Ladders missing"),
        }
    }

    #[test]
    fn test_create_rejects_duplicate_name_without_side_effects() {
        let catalog = Catalog::standard();
        let clock = FixedClock::new(at(1_700_000_000));
        let ids = SequenceMinter::new();
        let ctx = MutationContext::new(&catalog, &clock, &ids);

        let mut names = HashSet::new();
        names.insert("Alpha".to_string());

        let result = create_trailer(&ctx, &valid_form("Alpha"), &names);
        assert!(result.is_err());
    }

    #[test]
    fn test_city_only_update_appends_exactly_one_city_entry() {
        let existing = create(1_700_000_000, "Alpha");
        let catalog = Catalog::standard();
        let clock = FixedClock::new(at(1_700_000_100));
        let ids = SequenceMinter::new();
        let ctx = MutationContext::new(&catalog, &clock, &ids);

        let form = TrailerForm {
            city: "Dallas".to_string(),
            ..valid_form("Alpha")
        };
        let updated = match update_trailer(&ctx, &existing, &form, &StockLevels::default(), &HashSet::new()) {
            Ok(trailer) => trailer,
            Err(e) => panic!("update failed: {e}"),
        };

        let appended: Vec<_> = updated.activity().iter().skip(1).collect();
        assert_eq!(appended.len(), 1);
        assert_eq!(appended[0].kind(), ActivityKind::CityChanged);
        assert_eq!(appended[0].description(), "City changed from 'Austin' to 'Dallas'");
        assert!(updated.updated_at() > existing.updated_at());
    }

    #[test]
    fn test_multi_location_update_collapses_to_one_entry() {
        let existing = create(1_700_000_000, "Alpha");
        let catalog = Catalog::standard();
        let clock = FixedClock::new(at(1_700_000_100));
        let ids = SequenceMinter::new();
        let ctx = MutationContext::new(&catalog, &clock, &ids);

        let form = TrailerForm {
            parking_address: "400 Yard Ave".to_string(),
            city: "Tulsa".to_string(),
            state: "OK".to_string(),
            ..valid_form("Alpha")
        };
        let updated = match update_trailer(&ctx, &existing, &form, &StockLevels::default(), &HashSet::new()) {
            Ok(trailer) => trailer,
            Err(e) => panic!("update failed: {e}"),
        };

        let appended: Vec<_> = updated.activity().iter().skip(1).collect();
        assert_eq!(appended.len(), 1);
        assert_eq!(appended[0].kind(), ActivityKind::LocationChanged);
        assert_eq!(
            appended[0].description(),
            "Location changed to 400 Yard Ave, Tulsa, OK"
        );
    }

    #[test]
    fn test_zero_diff_update_appends_nothing_but_touches_updated_at() {
        let existing = create(1_700_000_000, "Alpha");
        let catalog = Catalog::standard();
        let clock = FixedClock::new(at(1_700_000_100));
        let ids = SequenceMinter::new();
        let ctx = MutationContext::new(&catalog, &clock, &ids);

        let updated = match update_trailer(
            &ctx,
            &existing,
            &valid_form("Alpha"),
            &StockLevels::default(),
            &HashSet::new(),
        ) {
            Ok(trailer) => trailer,
            Err(e) => panic!("update failed: {e}"),
        };

        assert_eq!(updated.activity().len(), existing.activity().len());
        assert!(updated.updated_at() > existing.updated_at());
        assert_eq!(updated.created_at(), existing.created_at());
    }

    #[test]
    fn test_stock_update_appends_one_inventory_entry_and_status_entry() {
        let existing = create(1_700_000_000, "Alpha");
        let catalog = Catalog::standard();
        let clock = FixedClock::new(at(1_700_000_100));
        let ids = SequenceMinter::new();
        let ctx = MutationContext::new(&catalog, &clock, &ids);

        // Stock every catalog item above its threshold
        let mut stock_levels = StockLevels::default();
        for spec in catalog.tools() {
            stock_levels = stock_levels.with_tool(spec.name.as_str(), 50);
        }
        for sheet in catalog.film_sheets() {
            stock_levels = stock_levels.with_sheet(sheet.as_str(), 50);
        }

        let updated = match update_trailer(&ctx, &existing, &valid_form("Alpha"), &stock_levels, &HashSet::new()) {
            Ok(trailer) => trailer,
            Err(e) => panic!("update failed: {e}"),
        };

        assert_eq!(updated.status(), TrailerStatus::Available);
        let appended: Vec<_> = updated.activity().iter().skip(1).collect();
        assert_eq!(appended.len(), 2);
        assert_eq!(appended[0].kind(), ActivityKind::InventoryUpdated);
        assert!(appended[0].description().starts_with("Inventory updated: "));
        assert!(appended[0].description().ends_with("more"));
        assert_eq!(appended[1].kind(), ActivityKind::StatusChanged);
        assert_eq!(
            appended[1].description(),
            "Status changed from unavailable to available"
        );
        assert!(appended[1].is_system_generated());
    }

    #[test]
    fn test_restock_brings_stock_to_thresholds() {
        let existing = create(1_700_000_000, "Alpha");
        let catalog = Catalog::standard();
        let clock = FixedClock::new(at(1_700_000_100));
        let ids = SequenceMinter::new();
        let ctx = MutationContext::new(&catalog, &clock, &ids);

        let restocked = restock_trailer(&ctx, &existing);

        assert!(restocked
            .inventory()
            .tools()
            .iter()
            .all(|item| item.current_stock() == item.threshold()));
        assert_eq!(restocked.status(), TrailerStatus::Low);

        let appended: Vec<_> = restocked.activity().iter().skip(1).collect();
        assert_eq!(appended.len(), 2);
        assert_eq!(appended[0].kind(), ActivityKind::InventoryUpdated);
        assert_eq!(appended[1].kind(), ActivityKind::StatusChanged);
    }

    #[test]
    fn test_archive_is_idempotent() {
        let existing = create(1_700_000_000, "Alpha");
        let catalog = Catalog::standard();
        let clock = FixedClock::new(at(1_700_000_100));
        let ids = SequenceMinter::new();
        let ctx = MutationContext::new(&catalog, &clock, &ids);

        let archived = archive_trailer(&ctx, &existing);
        assert!(archived.is_archived());
        assert_eq!(archived.activity().len(), 2);

        let again = archive_trailer(&ctx, &archived);
        assert_eq!(again, archived);
    }

    #[test]
    fn test_add_note_attributes_actor() {
        let existing = create(1_700_000_000, "Alpha");
        let catalog = Catalog::standard();
        let clock = FixedClock::new(at(1_700_000_100));
        let ids = SequenceMinter::new();
        let ctx = MutationContext::new(&catalog, &clock, &ids).with_actor("dispatch");

        let noted = match add_note(&ctx, &existing, "  Checked brakes  ") {
            Ok(trailer) => trailer,
            Err(e) => panic!("add_note failed: {e}"),
        };

        match noted.activity().last() {
            Some(entry) => {
                assert_eq!(entry.kind(), ActivityKind::NoteAdded);
                assert_eq!(entry.description(), "Checked brakes");
                assert_eq!(entry.user(), Some("dispatch"));
            }
            None => panic!("note entry missing"),
        }
    }

    #[test]
    fn test_add_note_rejects_blank_text() {
        let existing = create(1_700_000_000, "Alpha");
        let catalog = Catalog::standard();
        let clock = FixedClock::new(at(1_700_000_100));
        let ids = SequenceMinter::new();
        let ctx = MutationContext::new(&catalog, &clock, &ids);

        assert!(add_note(&ctx, &existing, "   ").is_err());
    }
}
