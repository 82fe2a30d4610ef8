#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::arithmetic_side_effects)]

//! Predicate functions for filtering trailers
//!
//! This module contains all the individual filter predicates that check
//! if a trailer matches specific filter criteria.

use crate::domain::trailer::Trailer;

use super::TrailerFilter;

/// Check if a trailer matches filter criteria (main coordinator)
pub(super) fn matches_filter(trailer: &Trailer, filter: &TrailerFilter) -> bool {
    matches_lifecycle(trailer, filter)
        && matches_status(trailer, filter)
        && matches_state(trailer, filter)
        && matches_search(trailer, filter)
}

/// Check if trailer passes the archived cutoff
pub(super) fn matches_lifecycle(trailer: &Trailer, filter: &TrailerFilter) -> bool {
    filter.include_archived || trailer.is_active()
}

/// Check if trailer matches status filter
pub(super) fn matches_status(trailer: &Trailer, filter: &TrailerFilter) -> bool {
    filter.status.is_empty() || filter.status.contains(&trailer.status())
}

/// Check if trailer matches state filter (exact, case-sensitive)
pub(super) fn matches_state(trailer: &Trailer, filter: &TrailerFilter) -> bool {
    filter
        .state
        .as_ref()
        .is_none_or(|state| trailer.state() == state)
}

/// Check if trailer matches search text filter
pub(super) fn matches_search(trailer: &Trailer, filter: &TrailerFilter) -> bool {
    filter
        .search_text
        .as_ref()
        .is_none_or(|text| search_matches_trailer(text, trailer))
}

/// Check if search text matches any searchable trailer field
///
/// Case-insensitive substring match over name, registration number,
/// parking address, and city. State is reachable through its own
/// dedicated filter instead.
pub(super) fn search_matches_trailer(text: &str, trailer: &Trailer) -> bool {
    let text_lower = text.to_lowercase();
    search_matches_name(&text_lower, trailer)
        || search_matches_registration(&text_lower, trailer)
        || search_matches_address(&text_lower, trailer)
        || search_matches_city(&text_lower, trailer)
}

/// Check if search text matches the trailer name
pub(super) fn search_matches_name(text_lower: &str, trailer: &Trailer) -> bool {
    trailer.name().as_str().to_lowercase().contains(text_lower)
}

/// Check if search text matches the registration number
pub(super) fn search_matches_registration(text_lower: &str, trailer: &Trailer) -> bool {
    trailer
        .registration_number()
        .to_lowercase()
        .contains(text_lower)
}

/// Check if search text matches the parking address
pub(super) fn search_matches_address(text_lower: &str, trailer: &Trailer) -> bool {
    trailer.parking_address().to_lowercase().contains(text_lower)
}

/// Check if search text matches the city
pub(super) fn search_matches_city(text_lower: &str, trailer: &Trailer) -> bool {
    trailer.city().to_lowercase().contains(text_lower)
}

#[cfg(test)]
#[allow(clippy::arithmetic_side_effects, clippy::redundant_clone)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::domain::identifiers::{TrailerId, TrailerName};
    use crate::domain::inventory::Inventory;
    use crate::domain::status::TrailerStatus;
    use crate::domain::trailer::TrailerProfile;
    use chrono::DateTime;

    fn trailer(name: &str, state: &str, city: &str) -> Trailer {
        let parsed = match TrailerName::parse(name) {
            Ok(parsed) => parsed,
            Err(e) => panic!("invalid test name: {e}"),
        };
        let created = DateTime::from_timestamp(1_700_000_000, 0)
            .map_or_else(|| panic!("timestamp out of range"), |t| t);
        Trailer::new(
            TrailerId::from_raw(format!("tr-{name}")),
            TrailerProfile {
                name: parsed,
                registration_number: "REG-77".to_string(),
                parking_address: "12 Depot Rd".to_string(),
                state: state.to_string(),
                city: city.to_string(),
            },
            Inventory::from_catalog(&Catalog::standard()),
            created,
        )
    }

    #[test]
    fn test_empty_filter_matches_active_trailer() {
        let t = trailer("Alpha", "TX", "Austin");
        assert!(matches_filter(&t, &TrailerFilter::new()));
    }

    #[test]
    fn test_status_filter() {
        // Fresh catalog inventory has zero stock, so status is unavailable
        let t = trailer("Alpha", "TX", "Austin");

        let unavailable = TrailerFilter::new().with_status(TrailerStatus::Unavailable);
        assert!(matches_status(&t, &unavailable));

        let available = TrailerFilter::new().with_status(TrailerStatus::Available);
        assert!(!matches_status(&t, &available));
    }

    #[test]
    fn test_state_filter_is_exact() {
        let t = trailer("Alpha", "TX", "Austin");

        assert!(matches_state(&t, &TrailerFilter::new().with_state("TX")));
        assert!(!matches_state(&t, &TrailerFilter::new().with_state("tx")));
        assert!(!matches_state(&t, &TrailerFilter::new().with_state("OK")));
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let t = trailer("North Yard", "TX", "Austin");

        assert!(matches_search(&t, &TrailerFilter::new().with_search("north")));
        assert!(matches_search(&t, &TrailerFilter::new().with_search("reg-77")));
        assert!(matches_search(&t, &TrailerFilter::new().with_search("depot")));
        assert!(matches_search(&t, &TrailerFilter::new().with_search("AUSTIN")));
        assert!(!matches_search(&t, &TrailerFilter::new().with_search("tulsa")));
    }

    #[test]
    fn test_search_does_not_cover_state() {
        let t = trailer("Alpha", "Texas", "Austin");
        assert!(!matches_search(&t, &TrailerFilter::new().with_search("texas")));
    }

    #[test]
    fn test_criteria_and_compose() {
        let t = trailer("Alpha", "TX", "Austin");

        let both = TrailerFilter::new()
            .with_state("TX")
            .with_search("alpha");
        assert!(matches_filter(&t, &both));

        let mismatched = TrailerFilter::new()
            .with_state("OK")
            .with_search("alpha");
        assert!(!matches_filter(&t, &mismatched));
    }
}
