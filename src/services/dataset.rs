use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use crate::models::InternshipRecord;

/// Errors that can occur while loading or provisioning the dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Dataset file not found: {0}")]
    NotFound(PathBuf),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed dataset at {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// In-memory internship table, loaded once and shared read-only
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<InternshipRecord>,
    source: Option<PathBuf>,
}

impl Dataset {
    pub fn new(records: Vec<InternshipRecord>) -> Self {
        Self { records, source: None }
    }

    /// Load a dataset from a CSV file with a header row
    ///
    /// Rows keep file order. Stipend text is normalized here so requests never
    /// re-parse it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => DatasetError::NotFound(path.to_path_buf()),
            _ => DatasetError::Io { path: path.to_path_buf(), source: e },
        })?;

        let records = read_records(file).map_err(|source| DatasetError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("Loaded {} internship records from {}", records.len(), path.display());

        Ok(Self {
            records,
            source: Some(path.to_path_buf()),
        })
    }

    /// Parse CSV text directly, mainly for tests and embedded data
    pub fn from_csv_str(data: &str) -> Result<Self, csv::Error> {
        Ok(Self::new(read_records(data.as_bytes())?))
    }

    pub fn records(&self) -> &[InternshipRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

fn read_records<R: Read>(reader: R) -> Result<Vec<InternshipRecord>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let records: Result<Vec<InternshipRecord>, csv::Error> = reader.deserialize().collect();
    records
}
