//! Search error types

use degrees_core::limits::ValidationError;
use thiserror::Error;

/// Result type alias for search operations
pub type SearchResult<T> = std::result::Result<T, SearchError>;

/// Search-specific error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("Query error: {0}")]
    Query(String),
}

impl From<ValidationError> for SearchError {
    fn from(err: ValidationError) -> Self {
        Self::Query(err.to_string())
    }
}
