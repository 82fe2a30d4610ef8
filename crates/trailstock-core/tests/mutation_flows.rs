//! End-to-end mutation flows through the public surface.
//!
//! Covers create/update diffing, validation completeness, archival,
//! restock, and the store-level uniqueness rules, all under a pinned
//! clock and sequential id minter so every assertion is deterministic.

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use trailstock_core::{
    create_trailer, update_trailer, validate_trailer_form, ActivityKind, Catalog, Error,
    FixedClock, FleetStore, MutationContext, SequenceMinter, StockLevels, Trailer, TrailerForm,
    TrailerStatus,
};

fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).map_or_else(|| panic!("timestamp out of range"), |t| t)
}

fn form(name: &str) -> TrailerForm {
    TrailerForm {
        trailer_name: name.to_string(),
        registration_number: "REG-100".to_string(),
        parking_address: "12 Depot Rd".to_string(),
        state: "TX".to_string(),
        city: "Austin".to_string(),
        ..TrailerForm::default()
    }
}

fn created(name: &str) -> Trailer {
    let catalog = Catalog::standard();
    let clock = FixedClock::new(at(1_700_000_000));
    let ids = SequenceMinter::new();
    let ctx = MutationContext::new(&catalog, &clock, &ids);
    match create_trailer(&ctx, &form(name), &HashSet::new()) {
        Ok(trailer) => trailer,
        Err(e) => panic!("create failed: {e}"),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// VALIDATION
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_validation_reports_every_problem_in_one_pass() {
    let catalog = Catalog::standard();
    let bad_form = TrailerForm {
        registration_number: "   ".to_string(),
        ..form("Alpha")
    }
    .with_tool_threshold("Ladders", -3);

    let outcome = validate_trailer_form(&bad_form, &HashSet::new(), &catalog);

    assert!(!outcome.is_valid());
    let fields: Vec<_> = outcome
        .errors()
        .iter()
        .map(|err| err.field.clone())
        .collect();
    assert!(fields.contains(&"registration_number".to_string()));
    assert!(fields.contains(&"tool_Ladders".to_string()));
}

#[test]
fn test_rejected_create_returns_validation_error() {
    let catalog = Catalog::standard();
    let clock = FixedClock::new(at(1_700_000_000));
    let ids = SequenceMinter::new();
    let ctx = MutationContext::new(&catalog, &clock, &ids);

    let bad_form = TrailerForm {
        trailer_name: "  ".to_string(),
        ..form("Alpha")
    };

    match create_trailer(&ctx, &bad_form, &HashSet::new()) {
        Err(Error::Validation(failure)) => {
            assert!(failure
                .errors()
                .iter()
                .any(|err| err.field == "trailer_name"));
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn test_rejected_update_leaves_existing_untouched() {
    let existing = created("Alpha");
    let catalog = Catalog::standard();
    let clock = FixedClock::new(at(1_700_000_100));
    let ids = SequenceMinter::new();
    let ctx = MutationContext::new(&catalog, &clock, &ids);

    let mut names = HashSet::new();
    names.insert("Bravo".to_string());

    let before = existing.clone();
    let result = update_trailer(
        &ctx,
        &existing,
        &form("Bravo"),
        &StockLevels::default(),
        &names,
    );

    assert!(result.is_err());
    assert_eq!(existing, before);
}

// ═══════════════════════════════════════════════════════════════════════════
// DIFF CATEGORIES
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_city_only_update_logs_one_city_entry() {
    let existing = created("Alpha");
    let catalog = Catalog::standard();
    let clock = FixedClock::new(at(1_700_000_100));
    let ids = SequenceMinter::new();
    let ctx = MutationContext::new(&catalog, &clock, &ids);

    let changed = TrailerForm {
        city: "Dallas".to_string(),
        ..form("Alpha")
    };
    let updated = match update_trailer(
        &ctx,
        &existing,
        &changed,
        &StockLevels::default(),
        &HashSet::new(),
    ) {
        Ok(trailer) => trailer,
        Err(e) => panic!("update failed: {e}"),
    };

    let appended: Vec<_> = updated.activity().iter().skip(1).collect();
    assert_eq!(appended.len(), 1);
    assert_eq!(appended[0].kind(), ActivityKind::CityChanged);
    assert!(updated.updated_at() > existing.updated_at());
    assert_eq!(updated.created_at(), existing.created_at());
    assert_eq!(updated.id(), existing.id());
}

#[test]
fn test_many_item_changes_collapse_into_one_inventory_entry() {
    let existing = created("Alpha");
    let catalog = Catalog::standard();
    let clock = FixedClock::new(at(1_700_000_100));
    let ids = SequenceMinter::new();
    let ctx = MutationContext::new(&catalog, &clock, &ids);

    // Raise stock on five tools at once; still one inventory entry
    let mut levels = StockLevels::default();
    for spec in catalog.tools().iter().take(5) {
        levels = levels.with_tool(spec.name.as_str(), 3);
    }

    let updated = match update_trailer(&ctx, &existing, &form("Alpha"), &levels, &HashSet::new())
    {
        Ok(trailer) => trailer,
        Err(e) => panic!("update failed: {e}"),
    };

    let inventory_entries: Vec<_> = updated
        .activity()
        .iter()
        .filter(|entry| entry.kind() == ActivityKind::InventoryUpdated)
        .collect();
    assert_eq!(inventory_entries.len(), 1);
    assert!(inventory_entries[0]
        .description()
        .starts_with("Inventory updated: "));
}

#[test]
fn test_name_and_registration_changes_log_separate_entries() {
    let existing = created("Alpha");
    let catalog = Catalog::standard();
    let clock = FixedClock::new(at(1_700_000_100));
    let ids = SequenceMinter::new();
    let ctx = MutationContext::new(&catalog, &clock, &ids);

    let changed = TrailerForm {
        trailer_name: "Alpha Prime".to_string(),
        registration_number: "REG-200".to_string(),
        ..form("Alpha")
    };
    let updated = match update_trailer(
        &ctx,
        &existing,
        &changed,
        &StockLevels::default(),
        &HashSet::new(),
    ) {
        Ok(trailer) => trailer,
        Err(e) => panic!("update failed: {e}"),
    };

    let appended: Vec<_> = updated.activity().iter().skip(1).collect();
    assert_eq!(appended.len(), 2);
    assert!(appended[0].description().contains("Name changed"));
    assert!(appended[1]
        .description()
        .contains("Registration number changed"));
}

#[test]
fn test_status_transition_entry_is_system_generated_even_with_actor() {
    let existing = created("Alpha");
    let catalog = Catalog::standard();
    let clock = FixedClock::new(at(1_700_000_100));
    let ids = SequenceMinter::new();
    let ctx = MutationContext::new(&catalog, &clock, &ids).with_actor("dispatch");

    let mut levels = StockLevels::default();
    for spec in catalog.tools() {
        levels = levels.with_tool(spec.name.as_str(), 50);
    }
    for sheet in catalog.film_sheets() {
        levels = levels.with_sheet(sheet.as_str(), 50);
    }

    let updated = match update_trailer(&ctx, &existing, &form("Alpha"), &levels, &HashSet::new())
    {
        Ok(trailer) => trailer,
        Err(e) => panic!("update failed: {e}"),
    };

    let status_entry = updated
        .activity()
        .iter()
        .find(|entry| entry.kind() == ActivityKind::StatusChanged);
    match status_entry {
        Some(entry) => {
            assert!(entry.is_system_generated());
            assert_eq!(entry.user(), None);
        }
        None => panic!("status entry missing"),
    }

    let inventory_entry = updated
        .activity()
        .iter()
        .find(|entry| entry.kind() == ActivityKind::InventoryUpdated);
    match inventory_entry {
        Some(entry) => assert_eq!(entry.user(), Some("dispatch")),
        None => panic!("inventory entry missing"),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// ARCHIVE & RESTOCK THROUGH THE STORE
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_archived_trailer_retains_history_and_leaves_active_views() {
    let catalog = Catalog::standard();
    let clock = FixedClock::new(at(1_700_000_000));
    let ids = SequenceMinter::new();
    let ctx = MutationContext::new(&catalog, &clock, &ids);

    let store = match FleetStore::new().create(&ctx, &form("Alpha")) {
        Ok(store) => store,
        Err(e) => panic!("create failed: {e}"),
    };
    let id = match store.trailers().front() {
        Some(trailer) => trailer.id().clone(),
        None => panic!("trailer missing"),
    };

    let store = match store.archive(&ctx, &id) {
        Ok(store) => store,
        Err(e) => panic!("archive failed: {e}"),
    };

    assert!(store.active().is_empty());
    assert_eq!(store.len(), 1);
    match store.get(&id) {
        Some(trailer) => {
            assert!(trailer.is_archived());
            assert_eq!(trailer.activity().len(), 2);
        }
        None => panic!("archived trailer missing from store"),
    }
}

#[test]
fn test_restock_sets_stock_to_threshold_and_logs_once() {
    let catalog = Catalog::standard();
    let clock = FixedClock::new(at(1_700_000_000));
    let ids = SequenceMinter::new();
    let ctx = MutationContext::new(&catalog, &clock, &ids);

    let store = match FleetStore::new().create(&ctx, &form("Alpha")) {
        Ok(store) => store,
        Err(e) => panic!("create failed: {e}"),
    };
    let id = match store.trailers().front() {
        Some(trailer) => trailer.id().clone(),
        None => panic!("trailer missing"),
    };

    let store = match store.restock(&ctx, &id) {
        Ok(store) => store,
        Err(e) => panic!("restock failed: {e}"),
    };

    let trailer = match store.get(&id) {
        Some(trailer) => trailer,
        None => panic!("trailer missing after restock"),
    };

    assert!(trailer
        .inventory()
        .tools()
        .iter()
        .all(|item| item.current_stock() == item.threshold()));
    assert!(trailer
        .inventory()
        .film_sheets()
        .iter()
        .all(|item| item.current_stock() == item.threshold()));
    // Every standard-catalog item has a positive threshold, so stock at
    // threshold means low across the board
    assert_eq!(trailer.status(), TrailerStatus::Low);

    let inventory_entries = trailer
        .activity()
        .iter()
        .filter(|entry| entry.kind() == ActivityKind::InventoryUpdated)
        .count();
    assert_eq!(inventory_entries, 1);
}

#[test]
fn test_note_flow_requires_text_and_attributes_actor() {
    let catalog = Catalog::standard();
    let clock = FixedClock::new(at(1_700_000_000));
    let ids = SequenceMinter::new();
    let ctx = MutationContext::new(&catalog, &clock, &ids).with_actor("foreman");

    let store = match FleetStore::new().create(&ctx, &form("Alpha")) {
        Ok(store) => store,
        Err(e) => panic!("create failed: {e}"),
    };
    let id = match store.trailers().front() {
        Some(trailer) => trailer.id().clone(),
        None => panic!("trailer missing"),
    };

    assert!(store.note(&ctx, &id, "   ").is_err());

    let store = match store.note(&ctx, &id, "Tire pressure checked") {
        Ok(store) => store,
        Err(e) => panic!("note failed: {e}"),
    };
    let entry = store.get(&id).and_then(|trailer| trailer.activity().last());
    match entry {
        Some(entry) => {
            assert_eq!(entry.kind(), ActivityKind::NoteAdded);
            assert_eq!(entry.user(), Some("foreman"));
            assert!(!entry.is_system_generated());
        }
        None => panic!("note entry missing"),
    }
}

#[test]
fn test_minted_ids_are_unique_across_entries() {
    let catalog = Catalog::standard();
    let clock = FixedClock::new(at(1_700_000_000));
    let ids = SequenceMinter::new();
    let ctx = MutationContext::new(&catalog, &clock, &ids);

    let store = match FleetStore::new()
        .create(&ctx, &form("Alpha"))
        .and_then(|s| s.create(&ctx, &form("Bravo")))
    {
        Ok(store) => store,
        Err(e) => panic!("setup failed: {e}"),
    };

    let mut seen = HashSet::new();
    for trailer in store.trailers() {
        assert!(seen.insert(trailer.id().as_str().to_string()));
        for entry in trailer.activity() {
            assert!(seen.insert(entry.id().as_str().to_string()));
        }
    }
}
