//! Dataset source trait definitions

use crate::error::StorageResult;
use crate::rows::{MovieRow, PersonRow, StarRow};
use degrees_core::{Dataset, LoadSummary};

/// A dataset together with the counters gathered while building it
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub dataset: Dataset,
    pub summary: LoadSummary,
}

/// Trait for anything that can supply the three dataset tables
pub trait DatasetSource {
    /// Human-readable location, used in log messages
    fn describe(&self) -> String;

    /// Rows of the people table
    fn people(&self) -> StorageResult<Vec<PersonRow>>;

    /// Rows of the movies table
    fn movies(&self) -> StorageResult<Vec<MovieRow>>;

    /// Rows of the cast relation table
    fn stars(&self) -> StorageResult<Vec<StarRow>>;

    /// Load and index every table.
    ///
    /// Star rows naming an unknown person or movie are dropped, not raised.
    fn load(&self) -> StorageResult<LoadedDataset> {
        tracing::info!("Loading dataset from {}", self.describe());

        let mut builder = Dataset::builder();
        for row in self.people()? {
            builder.add_person(row.into_person());
        }
        for row in self.movies()? {
            builder.add_movie(row.into_movie());
        }
        tracing::debug!(
            "Indexed {} people and {} movies",
            builder.summary().people,
            builder.summary().movies
        );
        for row in self.stars()? {
            let (person_id, movie_id) = row.ids();
            if !builder.add_star(&person_id, &movie_id) {
                tracing::trace!("Skipped star row {} -> {}", person_id, movie_id);
            }
        }

        let (dataset, summary) = builder.finish();

        if summary.dropped_stars > 0 {
            tracing::warn!(
                "Dropped {} star rows referencing unknown people or movies",
                summary.dropped_stars
            );
        }
        if summary.duplicate_people > 0 || summary.duplicate_movies > 0 || summary.duplicate_stars > 0 {
            tracing::warn!(
                "Ignored {} duplicate people, {} duplicate movies and {} repeated star rows",
                summary.duplicate_people,
                summary.duplicate_movies,
                summary.duplicate_stars
            );
        }
        tracing::info!(
            "Loaded {} people, {} movies, {} star links",
            summary.people,
            summary.movies,
            summary.stars
        );

        Ok(LoadedDataset { dataset, summary })
    }
}
