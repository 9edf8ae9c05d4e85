//! Cast graph trait definition
//!
//! The graph is never materialized: an edge between two people labeled by a
//! movie exists whenever both starred in it. Implementors compute neighbor
//! sets on demand from their own indices.

use crate::movie::MovieId;
use crate::person::PersonId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One (movie, co-star) link.
///
/// Ordering is by movie id, then person id, which fixes the order in which
/// the search enumerates neighbors.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PathStep {
    /// Movie shared with the previous person
    pub movie: MovieId,
    /// Person reached through that movie
    pub person: PersonId,
}

impl PathStep {
    pub fn new(movie: impl Into<MovieId>, person: impl Into<PersonId>) -> Self {
        Self {
            movie: movie.into(),
            person: person.into(),
        }
    }
}

/// Read-only view of the cast graph consumed by the path finder
pub trait CastGraph {
    /// Whether the id belongs to a known person
    fn contains_person(&self, id: &PersonId) -> bool;

    /// Every (movie, co-star) pair reachable in one step.
    ///
    /// The person itself appears once per movie they starred in; callers
    /// filter or tolerate those self links. Unknown ids yield an empty set.
    fn neighbors(&self, id: &PersonId) -> BTreeSet<PathStep>;
}
