//! In-memory dataset source
//!
//! Useful for testing and for datasets assembled by other code.

use crate::error::StorageResult;
use crate::rows::{MovieRow, PersonRow, StarRow};
use crate::traits::DatasetSource;

/// Dataset tables held as row vectors
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    people: Vec<PersonRow>,
    movies: Vec<MovieRow>,
    stars: Vec<StarRow>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_person(mut self, id: &str, name: &str, birth: &str) -> Self {
        self.people.push(PersonRow::new(id, name, birth));
        self
    }

    pub fn with_movie(mut self, id: &str, title: &str, year: &str) -> Self {
        self.movies.push(MovieRow::new(id, title, year));
        self
    }

    pub fn with_star(mut self, person_id: &str, movie_id: &str) -> Self {
        self.stars.push(StarRow::new(person_id, movie_id));
        self
    }
}

impl DatasetSource for MemorySource {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    fn people(&self) -> StorageResult<Vec<PersonRow>> {
        Ok(self.people.clone())
    }

    fn movies(&self) -> StorageResult<Vec<MovieRow>> {
        Ok(self.movies.clone())
    }

    fn stars(&self) -> StorageResult<Vec<StarRow>> {
        Ok(self.stars.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use degrees_core::{PathFinder, PersonId, Resolution};

    #[test]
    fn test_load_builds_searchable_dataset() {
        let source = MemorySource::new()
            .with_person("1", "Alice", "")
            .with_person("2", "Bob", "")
            .with_person("3", "Carol", "")
            .with_movie("m1", "First", "2001")
            .with_movie("m2", "Second", "2002")
            .with_star("1", "m1")
            .with_star("2", "m1")
            .with_star("2", "m2")
            .with_star("3", "m2");

        let loaded = source.load().unwrap();
        let finder = PathFinder::new(&loaded.dataset);
        let outcome = finder
            .find_shortest_path(&PersonId::from("1"), &PersonId::from("3"))
            .unwrap();

        assert_eq!(outcome.path().map(|p| p.degrees()), Some(2));
    }

    #[test]
    fn test_duplicate_rows_counted() {
        let source = MemorySource::new()
            .with_person("1", "Alice", "")
            .with_person("1", "Alicia", "")
            .with_movie("m1", "First", "")
            .with_movie("m1", "First again", "");

        let loaded = source.load().unwrap();

        assert_eq!(loaded.summary.duplicate_people, 1);
        assert_eq!(loaded.summary.duplicate_movies, 1);
        assert_eq!(loaded.dataset.resolve("alicia"), Resolution::NotFound);
    }
}
