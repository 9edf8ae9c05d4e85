//! Degrees Search - Name lookup engines
//!
//! Provides exact (case-insensitive) lookup and fuzzy suggestions (nucleo)
//! over the people of a dataset.

pub mod error;
pub mod exact;
pub mod traits;

#[cfg(feature = "fuzzy")]
pub mod fuzzy;

pub use error::{SearchError, SearchResult};
pub use exact::ExactNameSearch;
pub use traits::{NameHit, NameSearch};

#[cfg(feature = "fuzzy")]
pub use fuzzy::FuzzyNameSearch;
