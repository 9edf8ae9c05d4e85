//! CSV directory source
//!
//! Reads `people.csv`, `movies.csv` and `stars.csv` from one directory. Each
//! file has a header row; fields may be quoted.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;

use crate::error::{StorageError, StorageResult};
use crate::rows::{MovieRow, PersonRow, StarRow};
use crate::traits::DatasetSource;

pub const PEOPLE_FILE: &str = "people.csv";
pub const MOVIES_FILE: &str = "movies.csv";
pub const STARS_FILE: &str = "stars.csv";

/// Dataset stored as three CSV files in a directory
#[derive(Debug, Clone)]
pub struct CsvDirectory {
    root: PathBuf,
}

impl CsvDirectory {
    /// Open a dataset directory, failing if it does not exist
    pub fn open(root: impl Into<PathBuf>) -> StorageResult<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(StorageError::MissingDirectory(root));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_rows<T: DeserializeOwned>(&self, file: &str) -> StorageResult<Vec<T>> {
        let path = self.root.join(file);
        if !path.is_file() {
            return Err(StorageError::MissingFile(path));
        }

        tracing::debug!("Reading {:?}", path);
        let reader = BufReader::new(File::open(&path)?);
        let mut csv = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

        csv.deserialize()
            .collect::<Result<Vec<T>, csv::Error>>()
            .map_err(|source| StorageError::Csv { path, source })
    }
}

impl DatasetSource for CsvDirectory {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    fn people(&self) -> StorageResult<Vec<PersonRow>> {
        self.read_rows(PEOPLE_FILE)
    }

    fn movies(&self) -> StorageResult<Vec<MovieRow>> {
        self.read_rows(MOVIES_FILE)
    }

    fn stars(&self) -> StorageResult<Vec<StarRow>> {
        self.read_rows(STARS_FILE)
    }
}
