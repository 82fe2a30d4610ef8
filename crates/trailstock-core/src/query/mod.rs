#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::arithmetic_side_effects)]

//! Fleet filtering, sorting, and pagination operations
//!
//! This module provides pure functional operations for querying, filtering,
//! sorting, and paginating trailers. All functions are immutable and
//! panic-free; no query ever changes a trailer.
//!
//! The module is organized into:
//! - **predicates**: Individual filter predicates that check if a trailer matches criteria
//! - **operations**: Complex filtering operations that compose predicates into pipelines

mod operations;
mod predicates;

pub use operations::{all_match, any_match, apply_query, filter_trailers, paginate, sort_trailers};

use strum::{Display, EnumString};

use crate::domain::status::TrailerStatus;

/// Filter criteria for querying the fleet
///
/// All criteria AND-compose; an empty filter matches every active
/// trailer. Archived trailers are excluded unless `include_archived`
/// is set.
#[derive(Debug, Clone, Default)]
pub struct TrailerFilter {
    pub status: Vec<TrailerStatus>,
    pub state: Option<String>,
    pub search_text: Option<String>,
    pub include_archived: bool,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl TrailerFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_status(self, status: TrailerStatus) -> Self {
        Self {
            status: self
                .status
                .into_iter()
                .chain(std::iter::once(status))
                .collect(),
            ..self
        }
    }

    #[must_use]
    pub fn with_statuses(self, statuses: impl IntoIterator<Item = TrailerStatus>) -> Self {
        Self {
            status: self.status.into_iter().chain(statuses).collect(),
            ..self
        }
    }

    #[must_use]
    pub fn with_state(self, state: impl Into<String>) -> Self {
        Self {
            state: Some(state.into()),
            ..self
        }
    }

    #[must_use]
    pub fn with_search(self, text: impl Into<String>) -> Self {
        Self {
            search_text: Some(text.into()),
            ..self
        }
    }

    #[must_use]
    pub fn include_archived(self) -> Self {
        Self {
            include_archived: true,
            ..self
        }
    }

    #[must_use]
    pub fn limit(self, n: usize) -> Self {
        Self {
            limit: Some(n),
            ..self
        }
    }

    #[must_use]
    pub fn offset(self, n: usize) -> Self {
        Self {
            offset: Some(n),
            ..self
        }
    }
}

/// Sort field for fleet queries
#[derive(Debug, Clone, Copy, EnumString, Display, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum SortField {
    #[strum(to_string = "name")]
    Name,

    #[strum(to_string = "registration")]
    Registration,

    #[strum(to_string = "status")]
    Status,

    #[strum(to_string = "state")]
    State,

    #[strum(to_string = "city")]
    City,

    #[strum(to_string = "created")]
    Created,

    #[strum(to_string = "updated")]
    Updated,
}

/// Sort direction
#[derive(Debug, Clone, Copy, EnumString, Display, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum SortDirection {
    #[strum(to_string = "asc")]
    Asc,

    #[strum(to_string = "desc")]
    Desc,
}

/// Complete query specification for the fleet
#[derive(Debug, Clone)]
pub struct TrailerQuery {
    pub filter: TrailerFilter,
    pub sort: SortField,
    pub direction: SortDirection,
}

impl Default for TrailerQuery {
    fn default() -> Self {
        Self {
            filter: TrailerFilter::new(),
            sort: SortField::Name,
            direction: SortDirection::Asc,
        }
    }
}

impl TrailerQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn filter(self, filter: TrailerFilter) -> Self {
        Self { filter, ..self }
    }

    #[must_use]
    pub fn sort_by(self, sort: SortField) -> Self {
        Self { sort, ..self }
    }

    #[must_use]
    pub fn direction(self, direction: SortDirection) -> Self {
        Self { direction, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_builders_accumulate_statuses() {
        let filter = TrailerFilter::new()
            .with_status(TrailerStatus::Low)
            .with_status(TrailerStatus::Unavailable);

        assert_eq!(
            filter.status,
            vec![TrailerStatus::Low, TrailerStatus::Unavailable]
        );
    }

    #[test]
    fn test_default_query_sorts_by_name_ascending() {
        let query = TrailerQuery::default();
        assert_eq!(query.sort, SortField::Name);
        assert_eq!(query.direction, SortDirection::Asc);
        assert!(!query.filter.include_archived);
    }

    #[test]
    fn test_sort_field_round_trips_through_strings() {
        let parsed: Result<SortField, _> = "registration".parse();
        assert_eq!(parsed, Ok(SortField::Registration));
        assert_eq!(SortField::Updated.to_string(), "updated");
        assert_eq!(SortDirection::Desc.to_string(), "desc");
    }
}
