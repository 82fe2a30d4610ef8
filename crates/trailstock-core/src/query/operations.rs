#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::arithmetic_side_effects)]

//! Complex filtering operations for the fleet
//!
//! This module provides the main operations for filtering, sorting, and
//! paginating trailers. These are higher-level functions that compose
//! predicates into complete query pipelines.

use std::cmp::Reverse;

use chrono::DateTime;
use chrono::Utc;
use im::Vector;
use itertools::Itertools;
use tap::Pipe;

use crate::domain::status::TrailerStatus;
use crate::domain::trailer::Trailer;

use super::predicates::matches_filter;
use super::{SortDirection, SortField, TrailerFilter, TrailerQuery};

/// Extract sort key from trailer based on sort field
fn extract_sort_key(trailer: &Trailer, sort: SortField) -> SortKey {
    match sort {
        SortField::Name => SortKey::Text(trailer.name().as_str().to_lowercase()),
        SortField::Registration => SortKey::Text(trailer.registration_number().to_lowercase()),
        SortField::Status => SortKey::Status(trailer.status()),
        SortField::State => SortKey::Text(trailer.state().to_lowercase()),
        SortField::City => SortKey::Text(trailer.city().to_lowercase()),
        SortField::Created => SortKey::DateTime(trailer.created_at()),
        SortField::Updated => SortKey::DateTime(trailer.updated_at()),
    }
}

/// Unified sort key type for type-safe sorting
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    /// Trailer status in severity order
    Status(TrailerStatus),
    /// Simple timestamp
    DateTime(DateTime<Utc>),
    /// Lowercase text for case-insensitive sorting
    Text(String),
}

/// Apply sort direction to sort key
fn apply_direction(direction: SortDirection) -> impl Fn(SortKey) -> SortKeyWithDirection {
    move |key| match direction {
        SortDirection::Asc => SortKeyWithDirection::Asc(key),
        SortDirection::Desc => SortKeyWithDirection::Desc(Reverse(key)),
    }
}

/// Sort key with direction applied
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SortKeyWithDirection {
    Asc(SortKey),
    Desc(Reverse<SortKey>),
}

/// Filter trailers by criteria
#[must_use]
pub fn filter_trailers(trailers: &Vector<Trailer>, filter: &TrailerFilter) -> Vector<Trailer> {
    trailers
        .iter()
        .filter(|trailer| matches_filter(trailer, filter))
        .cloned()
        .collect()
}

/// Sort trailers by field and direction using functional approach
///
/// The underlying sort is stable, so trailers with equal keys keep their
/// relative order.
#[must_use]
pub fn sort_trailers(
    trailers: &Vector<Trailer>,
    sort: SortField,
    direction: SortDirection,
) -> Vector<Trailer> {
    let direction_fn = apply_direction(direction);

    trailers
        .iter()
        .map(|trailer| (trailer, direction_fn(extract_sort_key(trailer, sort))))
        .sorted_by(|(_, key_a), (_, key_b)| key_a.cmp(key_b))
        .map(|(trailer, _)| trailer)
        .cloned()
        .collect()
}

/// Paginate trailers with offset and limit
#[must_use]
pub fn paginate(
    trailers: &Vector<Trailer>,
    offset: Option<usize>,
    limit: Option<usize>,
) -> Vector<Trailer> {
    trailers
        .iter()
        .skip(offset.unwrap_or(0))
        .take(limit.unwrap_or_else(|| trailers.len()))
        .cloned()
        .collect()
}

/// Apply complete query: filter, sort, and paginate
#[must_use]
pub fn apply_query(trailers: &Vector<Trailer>, query: &TrailerQuery) -> Vector<Trailer> {
    trailers
        .pipe(|t| filter_trailers(t, &query.filter))
        .pipe(|t| sort_trailers(&t, query.sort, query.direction))
        .pipe(|t| paginate(&t, query.filter.offset, query.filter.limit))
}

/// Check if any trailer matches the filter
#[must_use]
pub fn any_match(trailers: &Vector<Trailer>, filter: &TrailerFilter) -> bool {
    trailers.iter().any(|trailer| matches_filter(trailer, filter))
}

/// Check if all trailers match the filter
#[must_use]
pub fn all_match(trailers: &Vector<Trailer>, filter: &TrailerFilter) -> bool {
    trailers.iter().all(|trailer| matches_filter(trailer, filter))
}
