//! Degrees Storage - Dataset loaders
//!
//! This crate reads the people / movies / stars tables from disk and builds
//! the in-memory [`degrees_core::Dataset`] the path finder runs on.

pub mod directory;
pub mod error;
pub mod memory;
pub mod rows;
pub mod traits;

pub use directory::CsvDirectory;
pub use error::{StorageError, StorageResult};
pub use memory::MemorySource;
pub use rows::{MovieRow, PersonRow, StarRow};
pub use traits::{DatasetSource, LoadedDataset};
