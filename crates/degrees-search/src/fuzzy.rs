//! Fuzzy name suggestions using nucleo

use nucleo_matcher::{
    pattern::{AtomKind, CaseMatching, Normalization, Pattern},
    Config, Matcher, Utf32Str,
};

use crate::traits::{NameHit, NameSearch, Result};
use degrees_core::limits::validate_name_query;
use degrees_core::Dataset;

/// Stateless fuzzy name search engine using nucleo
#[derive(Debug, Clone)]
pub struct FuzzyNameSearch {
    pub limit: usize,
}

impl FuzzyNameSearch {
    pub fn new() -> Self {
        Self { limit: 5 }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }
}

impl Default for FuzzyNameSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl NameSearch for FuzzyNameSearch {
    fn search(&self, query: &str, dataset: &Dataset) -> Result<Vec<NameHit>> {
        validate_name_query(query)?;

        let pattern = Pattern::new(
            query.trim(),
            CaseMatching::Ignore,
            Normalization::Smart,
            AtomKind::Fuzzy,
        );
        let mut matcher = Matcher::new(Config::DEFAULT);
        let mut buf = Vec::new();

        // Score each distinct name once, then expand to the people carrying it
        let mut scored: Vec<(u32, &str)> = dataset
            .names()
            .filter_map(|(name, _)| {
                pattern
                    .score(Utf32Str::new(name, &mut buf), &mut matcher)
                    .map(|score| (score, name))
            })
            .collect();

        // Sort by score descending, then name for stable output
        scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1)));

        let hits: Vec<NameHit> = scored
            .into_iter()
            .flat_map(move |(score, name)| {
                dataset
                    .person_ids_for_name(name)
                    .into_iter()
                    .flatten()
                    .filter_map(move |id| dataset.person(id))
                    .map(move |person| NameHit::from_person(person, score))
            })
            .take(self.limit)
            .collect();

        tracing::debug!("Fuzzy lookup for '{}' suggested {} people", query, hits.len());
        Ok(hits)
    }
}
