//! Exact name search - case-insensitive lookup in the name index

use crate::traits::{NameHit, NameSearch, Result};
use degrees_core::limits::validate_name_query;
use degrees_core::Dataset;

/// Stateless exact name lookup
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactNameSearch;

impl ExactNameSearch {
    pub fn new() -> Self {
        Self
    }
}

impl NameSearch for ExactNameSearch {
    fn search(&self, query: &str, dataset: &Dataset) -> Result<Vec<NameHit>> {
        validate_name_query(query)?;

        let resolution = dataset.resolve(query);
        let hits: Vec<NameHit> = resolution
            .candidates()
            .iter()
            .filter_map(|id| dataset.person(id))
            .map(|person| NameHit::from_person(person, 0))
            .collect();

        tracing::debug!("Exact lookup for '{}' matched {} people", query, hits.len());
        Ok(hits)
    }
}
