//! Degrees Core - Cast graph model and shortest-path search
//!
//! This crate provides the dataset tables, name resolution and the
//! breadth-first path finder for the Degrees system.

pub mod dataset;
pub mod error;
pub mod graph;
pub mod limits;
pub mod movie;
pub mod person;
pub mod resolution;
pub mod traversal;

pub use dataset::{Dataset, DatasetBuilder, LoadSummary};
pub use error::{Error, Result};
pub use graph::{CastGraph, PathStep};
pub use movie::{Movie, MovieId};
pub use person::{Person, PersonId};
pub use resolution::Resolution;
pub use traversal::{Path, PathFinder, PathQuery, PathResult, SearchOutcome, SearchStats};
