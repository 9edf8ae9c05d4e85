//! In-memory cast dataset
//!
//! Holds the three lookup tables (people, movies, lowercase name index). A
//! `Dataset` is assembled once through [`DatasetBuilder`] and is read-only
//! afterwards.

use crate::error::{Error, Result};
use crate::graph::{CastGraph, PathStep};
use crate::movie::{Movie, MovieId};
use crate::person::{Person, PersonId};
use crate::resolution::Resolution;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Counters collected while building a dataset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadSummary {
    pub people: usize,
    pub movies: usize,
    pub stars: usize,
    /// Person rows whose id was already present
    pub duplicate_people: usize,
    /// Movie rows whose id was already present
    pub duplicate_movies: usize,
    /// Star rows naming an unknown person or movie
    pub dropped_stars: usize,
    /// Star rows repeating a (person, movie) pair already recorded
    #[serde(default)]
    pub duplicate_stars: usize,
}

/// Immutable people / movies / names tables
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    people: HashMap<PersonId, Person>,
    movies: HashMap<MovieId, Movie>,
    names: HashMap<String, BTreeSet<PersonId>>,
}

impl Dataset {
    pub fn builder() -> DatasetBuilder {
        DatasetBuilder::new()
    }

    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.get(id)
    }

    pub fn movie(&self, id: &MovieId) -> Option<&Movie> {
        self.movies.get(id)
    }

    /// Look a person up, treating an unknown id as an error
    pub fn require_person(&self, id: &PersonId) -> Result<&Person> {
        self.person(id).ok_or_else(|| Error::UnknownPerson(id.clone()))
    }

    /// Look a movie up, treating an unknown id as an error
    pub fn require_movie(&self, id: &MovieId) -> Result<&Movie> {
        self.movie(id).ok_or_else(|| Error::UnknownMovie(id.clone()))
    }

    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Number of distinct lowercase names
    pub fn name_count(&self) -> usize {
        self.names.len()
    }

    /// Distinct lowercase names with their person ids
    pub fn names(&self) -> impl Iterator<Item = (&str, &BTreeSet<PersonId>)> {
        self.names.iter().map(|(name, ids)| (name.as_str(), ids))
    }

    /// Ids of everyone carrying this name (case-insensitive)
    pub fn person_ids_for_name(&self, name: &str) -> Option<&BTreeSet<PersonId>> {
        self.names.get(&name.to_lowercase())
    }

    /// Resolve a name to a person id without prompting
    pub fn resolve(&self, name: &str) -> Resolution {
        match self.person_ids_for_name(name.trim()) {
            Some(ids) if ids.len() > 1 => Resolution::Ambiguous(ids.iter().cloned().collect()),
            Some(ids) => ids
                .iter()
                .next()
                .cloned()
                .map_or(Resolution::NotFound, Resolution::Found),
            None => Resolution::NotFound,
        }
    }
}

impl CastGraph for Dataset {
    fn contains_person(&self, id: &PersonId) -> bool {
        self.people.contains_key(id)
    }

    fn neighbors(&self, id: &PersonId) -> BTreeSet<PathStep> {
        let mut neighbors = BTreeSet::new();
        let Some(person) = self.people.get(id) else {
            return neighbors;
        };

        for movie_id in &person.movies {
            if let Some(movie) = self.movies.get(movie_id) {
                for star in &movie.stars {
                    neighbors.insert(PathStep {
                        movie: movie_id.clone(),
                        person: star.clone(),
                    });
                }
            }
        }

        neighbors
    }
}

/// Incremental constructor for [`Dataset`]
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    dataset: Dataset,
    summary: LoadSummary,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a person. Returns false, keeping the first row, if the id exists.
    pub fn add_person(&mut self, person: Person) -> bool {
        if self.dataset.people.contains_key(&person.id) {
            self.summary.duplicate_people += 1;
            tracing::debug!("Skipping duplicate person id {}", person.id);
            return false;
        }

        self.dataset
            .names
            .entry(person.name_key())
            .or_default()
            .insert(person.id.clone());
        self.dataset.people.insert(person.id.clone(), person);
        self.summary.people += 1;
        true
    }

    /// Add a movie. Returns false, keeping the first row, if the id exists.
    pub fn add_movie(&mut self, movie: Movie) -> bool {
        if self.dataset.movies.contains_key(&movie.id) {
            self.summary.duplicate_movies += 1;
            tracing::debug!("Skipping duplicate movie id {}", movie.id);
            return false;
        }

        self.dataset.movies.insert(movie.id.clone(), movie);
        self.summary.movies += 1;
        true
    }

    /// Record that a person starred in a movie.
    ///
    /// Rows naming an unknown person or movie are dropped and counted, as
    /// are repeats of a pair already recorded.
    pub fn add_star(&mut self, person_id: &PersonId, movie_id: &MovieId) -> bool {
        let (Some(person), Some(movie)) = (
            self.dataset.people.get_mut(person_id),
            self.dataset.movies.get_mut(movie_id),
        ) else {
            self.summary.dropped_stars += 1;
            return false;
        };

        if !person.movies.insert(movie_id.clone()) {
            self.summary.duplicate_stars += 1;
            return false;
        }
        movie.stars.insert(person_id.clone());
        self.summary.stars += 1;
        true
    }

    /// Convenience for fixtures: add a movie together with its cast
    pub fn add_cast(&mut self, movie: Movie, cast: &[&str]) -> &mut Self {
        let movie_id = movie.id.clone();
        self.add_movie(movie);
        for person in cast {
            self.add_star(&PersonId::from(*person), &movie_id);
        }
        self
    }

    pub fn summary(&self) -> &LoadSummary {
        &self.summary
    }

    pub fn build(self) -> Dataset {
        self.dataset
    }

    /// Finish building and hand back the counters as well
    pub fn finish(self) -> (Dataset, LoadSummary) {
        (self.dataset, self.summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_dataset() -> Dataset {
        let mut builder = Dataset::builder();
        builder.add_person(Person::new("1", "Alice").with_birth(Some(1970)));
        builder.add_person(Person::new("2", "Bob"));
        builder.add_person(Person::new("3", "Carol"));
        builder.add_person(Person::new("4", "Chris").with_birth(Some(1980)));
        builder.add_person(Person::new("5", "chris").with_birth(Some(1990)));
        builder
            .add_cast(Movie::new("m1", "First").with_year(Some(2001)), &["1", "2"])
            .add_cast(Movie::new("m2", "Second"), &["2", "3"])
            .add_cast(Movie::new("m3", "Third"), &["1", "2"]);
        builder.build()
    }

    #[test]
    fn test_lookup_tables() {
        let dataset = create_test_dataset();

        assert_eq!(dataset.person_count(), 5);
        assert_eq!(dataset.movie_count(), 3);
        assert_eq!(dataset.name_count(), 4);

        let bob = dataset.require_person(&PersonId::from("2")).unwrap();
        assert_eq!(bob.movies.len(), 3);
        let first = dataset.require_movie(&MovieId::from("m1")).unwrap();
        assert!(first.has_star(&PersonId::from("1")));
        assert!(dataset.require_movie(&MovieId::from("nope")).is_err());
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let dataset = create_test_dataset();

        assert_eq!(dataset.resolve("ALICE"), Resolution::Found(PersonId::from("1")));
        assert_eq!(dataset.resolve("  carol "), Resolution::Found(PersonId::from("3")));
        assert_eq!(dataset.resolve("Dave"), Resolution::NotFound);
    }

    #[test]
    fn test_resolve_ambiguous_name() {
        let dataset = create_test_dataset();

        assert_eq!(
            dataset.resolve("Chris"),
            Resolution::Ambiguous(vec![PersonId::from("4"), PersonId::from("5")])
        );
    }

    #[test]
    fn test_neighbors_keep_one_pair_per_movie() {
        let dataset = create_test_dataset();
        let neighbors = dataset.neighbors(&PersonId::from("1"));

        // Alice and Bob share m1 and m3: both links are kept
        assert!(neighbors.contains(&PathStep::new("m1", "2")));
        assert!(neighbors.contains(&PathStep::new("m3", "2")));
        let with_bob = neighbors
            .iter()
            .filter(|step| step.person.as_str() == "2")
            .count();
        assert_eq!(with_bob, 2);
    }

    #[test]
    fn test_neighbors_include_self_links() {
        let dataset = create_test_dataset();
        let neighbors = dataset.neighbors(&PersonId::from("3"));

        assert_eq!(
            neighbors.into_iter().collect::<Vec<_>>(),
            vec![PathStep::new("m2", "2"), PathStep::new("m2", "3")]
        );
    }

    #[test]
    fn test_neighbors_are_repeatable() {
        let dataset = create_test_dataset();
        let id = PersonId::from("2");
        assert_eq!(dataset.neighbors(&id), dataset.neighbors(&id));
        assert!(dataset.neighbors(&PersonId::from("unknown")).is_empty());
    }

    #[test]
    fn test_builder_drops_unknown_stars() {
        let mut builder = Dataset::builder();
        builder.add_person(Person::new("1", "Alice"));
        builder.add_movie(Movie::new("m1", "First"));

        assert!(builder.add_star(&PersonId::from("1"), &MovieId::from("m1")));
        assert!(!builder.add_star(&PersonId::from("9"), &MovieId::from("m1")));
        assert!(!builder.add_star(&PersonId::from("1"), &MovieId::from("m9")));

        let (dataset, summary) = builder.finish();
        assert_eq!(summary.stars, 1);
        assert_eq!(summary.dropped_stars, 2);
        assert_eq!(dataset.require_movie(&MovieId::from("m1")).unwrap().stars.len(), 1);
    }

    #[test]
    fn test_builder_counts_repeated_star_once() {
        let mut builder = Dataset::builder();
        builder.add_person(Person::new("1", "Alice"));
        builder.add_movie(Movie::new("m1", "First"));

        assert!(builder.add_star(&PersonId::from("1"), &MovieId::from("m1")));
        assert!(!builder.add_star(&PersonId::from("1"), &MovieId::from("m1")));
        assert_eq!(builder.summary().stars, 1);

        let (dataset, summary) = builder.finish();
        assert_eq!(summary.duplicate_stars, 1);
        assert_eq!(summary.dropped_stars, 0);
        assert_eq!(dataset.require_person(&PersonId::from("1")).unwrap().movies.len(), 1);
    }

    #[test]
    fn test_builder_keeps_first_duplicate() {
        let mut builder = Dataset::builder();
        assert!(builder.add_person(Person::new("1", "Alice")));
        assert!(!builder.add_person(Person::new("1", "Impostor")));
        assert!(builder.add_movie(Movie::new("m1", "First")));
        assert!(!builder.add_movie(Movie::new("m1", "Remake")));

        let (dataset, summary) = builder.finish();
        assert_eq!(summary.duplicate_people, 1);
        assert_eq!(summary.duplicate_movies, 1);
        assert_eq!(dataset.require_person(&PersonId::from("1")).unwrap().name, "Alice");
        assert_eq!(dataset.resolve("Impostor"), Resolution::NotFound);
    }
}
