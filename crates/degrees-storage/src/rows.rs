//! Row types for the three dataset tables

use degrees_core::{Movie, MovieId, Person, PersonId};
use serde::{Deserialize, Serialize};

/// One row of `people.csv`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRow {
    pub id: String,
    pub name: String,
    /// Birth year; blank when unknown
    #[serde(default)]
    pub birth: String,
}

impl PersonRow {
    pub fn new(id: impl Into<String>, name: impl Into<String>, birth: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            birth: birth.into(),
        }
    }

    pub fn into_person(self) -> Person {
        let birth = parse_year(&self.birth);
        Person::new(self.id, self.name).with_birth(birth)
    }
}

/// One row of `movies.csv`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRow {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub year: String,
}

impl MovieRow {
    pub fn new(id: impl Into<String>, title: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year: year.into(),
        }
    }

    pub fn into_movie(self) -> Movie {
        let year = parse_year(&self.year);
        Movie::new(self.id, self.title).with_year(year)
    }
}

/// One row of `stars.csv`: a person starring in a movie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarRow {
    pub person_id: String,
    pub movie_id: String,
}

impl StarRow {
    pub fn new(person_id: impl Into<String>, movie_id: impl Into<String>) -> Self {
        Self {
            person_id: person_id.into(),
            movie_id: movie_id.into(),
        }
    }

    pub fn ids(&self) -> (PersonId, MovieId) {
        (
            PersonId::new(self.person_id.as_str()),
            MovieId::new(self.movie_id.as_str()),
        )
    }
}

/// Parse a year column, treating blank or garbled values as unknown
fn parse_year(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}
