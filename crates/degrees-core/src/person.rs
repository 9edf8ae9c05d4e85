//! Person (cast member) types

use crate::movie::MovieId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Unique identifier for a person, as it appears in the dataset
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub String);

impl PersonId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PersonId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PersonId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A person who starred in at least zero movies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier
    pub id: PersonId,

    /// Display name (not unique)
    pub name: String,

    /// Birth year, when the dataset has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth: Option<i32>,

    /// Movies this person starred in
    #[serde(default)]
    pub movies: BTreeSet<MovieId>,
}

impl Person {
    /// Create a person with no movies
    pub fn new(id: impl Into<PersonId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            birth: None,
            movies: BTreeSet::new(),
        }
    }

    pub fn with_birth(mut self, birth: Option<i32>) -> Self {
        self.birth = birth;
        self
    }

    /// Key used by the name index
    pub fn name_key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Birth year for display, empty when unknown
    pub fn birth_display(&self) -> String {
        self.birth.map(|b| b.to_string()).unwrap_or_default()
    }
}
