//! Error types for Degrees Core

use crate::movie::MovieId;
use crate::person::PersonId;
use thiserror::Error;

/// Result type alias using Degrees' Error
pub type Result<T> = std::result::Result<T, Error>;

/// Degrees error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown person id: {0}")]
    UnknownPerson(PersonId),

    #[error("Unknown movie id: {0}")]
    UnknownMovie(MovieId),

    #[error("Person not found: {0}")]
    PersonNotFound(String),

    #[error("Ambiguous name '{name}': {} candidates", .candidates.len())]
    AmbiguousName {
        name: String,
        candidates: Vec<PersonId>,
    },

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<crate::limits::ValidationError> for Error {
    fn from(err: crate::limits::ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}
