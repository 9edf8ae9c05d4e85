//! Name search traits

use degrees_core::{Dataset, Person, PersonId};
use serde::Serialize;

pub use crate::error::{SearchError, SearchResult as Result};

/// A person matched by a name search, with a relevance score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameHit {
    pub person_id: PersonId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth: Option<i32>,
    pub score: u32,
}

impl NameHit {
    pub fn from_person(person: &Person, score: u32) -> Self {
        Self {
            person_id: person.id.clone(),
            name: person.name.clone(),
            birth: person.birth,
            score,
        }
    }
}

/// Trait for name search engines
pub trait NameSearch {
    /// Find people whose name matches the query, best matches first
    fn search(&self, query: &str, dataset: &Dataset) -> Result<Vec<NameHit>>;
}
