use async_trait::async_trait;
use quiz_core::model::{Dataset, DatasetError, TraitError};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::json::{EmbeddedRepository, JsonFileRepository};

/// Errors surfaced by dataset sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("dataset not found: {0}")]
    NotFound(String),

    #[error("i/o error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Trait(#[from] TraitError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Source of quiz content.
///
/// Implementations must return a validated `Dataset`; configuration problems
/// surface here, before any session starts.
#[async_trait]
pub trait DatasetRepository: Send + Sync {
    /// Load the full dataset.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the source is unreachable or its content is
    /// not a valid dataset.
    async fn load_dataset(&self) -> Result<Dataset, StorageError>;
}

/// Simple in-memory repository for tests and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    dataset: Arc<Mutex<Option<Dataset>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            dataset: Arc::new(Mutex::new(None)),
        }
    }

    #[must_use]
    pub fn with_dataset(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(Mutex::new(Some(dataset))),
        }
    }

    /// Replace the stored dataset.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the lock is poisoned.
    pub fn put(&self, dataset: Dataset) -> Result<(), StorageError> {
        let mut guard = self
            .dataset
            .lock()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        *guard = Some(dataset);
        Ok(())
    }
}

#[async_trait]
impl DatasetRepository for InMemoryRepository {
    async fn load_dataset(&self) -> Result<Dataset, StorageError> {
        let guard = self
            .dataset
            .lock()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        guard
            .clone()
            .ok_or_else(|| StorageError::NotFound("in-memory dataset".into()))
    }
}

/// Bundles the dataset source behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub dataset: Arc<dyn DatasetRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(InMemoryRepository::with_dataset(dataset)),
        }
    }

    /// The dataset compiled into the binary.
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            dataset: Arc::new(EmbeddedRepository),
        }
    }

    #[must_use]
    pub fn json_file(path: impl Into<PathBuf>) -> Self {
        Self {
            dataset: Arc::new(JsonFileRepository::new(path)),
        }
    }
}
