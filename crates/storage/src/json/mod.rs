use std::path::{Path, PathBuf};

use async_trait::async_trait;
use quiz_core::model::Dataset;
use tracing::debug;

use crate::repository::{DatasetRepository, StorageError};

mod mapping;

pub use mapping::{DatasetDocument, QuestionRecord};

const EMBEDDED_DATASET: &str = include_str!("../../data/travel_quiz.json");

/// Parse a JSON dataset document and validate it.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON, or the
/// validation errors of `DatasetDocument::into_dataset`.
pub fn parse_dataset(raw: &str) -> Result<Dataset, StorageError> {
    let document: DatasetDocument =
        serde_json::from_str(raw).map_err(|e| StorageError::Serialization(e.to_string()))?;
    document.into_dataset()
}

/// Render a dataset as pretty-printed JSON in the document format.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if encoding fails.
pub fn to_json_pretty(dataset: &Dataset) -> Result<String, StorageError> {
    serde_json::to_string_pretty(&DatasetDocument::from_dataset(dataset))
        .map_err(|e| StorageError::Serialization(e.to_string()))
}

/// The travel quiz shipped with the crate.
///
/// # Errors
///
/// Returns `StorageError` if the embedded document is invalid.
pub fn embedded_dataset() -> Result<Dataset, StorageError> {
    parse_dataset(EMBEDDED_DATASET)
}

/// Serves the dataset compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedRepository;

#[async_trait]
impl DatasetRepository for EmbeddedRepository {
    async fn load_dataset(&self) -> Result<Dataset, StorageError> {
        let dataset = embedded_dataset()?;
        debug!(
            questions = dataset.total_questions(),
            "loaded embedded dataset"
        );
        Ok(dataset)
    }
}

/// Reads a dataset document from a JSON file on every load.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DatasetRepository for JsonFileRepository {
    async fn load_dataset(&self) -> Result<Dataset, StorageError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => {
                    StorageError::NotFound(self.path.display().to_string())
                }
                _ => StorageError::Io(format!("{}: {e}", self.path.display())),
            })?;
        let dataset = parse_dataset(&raw)?;
        debug!(
            path = %self.path.display(),
            questions = dataset.total_questions(),
            "loaded dataset file"
        );
        Ok(dataset)
    }
}
