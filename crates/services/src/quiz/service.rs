use std::sync::Arc;

use quiz_core::model::{Dataset, TraitPriority};
use storage::repository::DatasetRepository;
use tracing::info;

use crate::error::QuizServiceError;
use super::session::QuizSession;

/// Loads quiz content once and opens sessions over it.
#[derive(Clone)]
pub struct QuizService {
    dataset: Arc<Dataset>,
}

impl QuizService {
    #[must_use]
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }

    /// Load and validate the dataset from `repo`.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Storage` if the source is unreachable or the
    /// dataset is misconfigured.
    pub async fn load(repo: &dyn DatasetRepository) -> Result<Self, QuizServiceError> {
        let dataset = repo.load_dataset().await?;
        info!(
            questions = dataset.total_questions(),
            priority = %dataset.priority(),
            "quiz dataset ready"
        );
        Ok(Self::new(dataset))
    }

    /// Override the tie-break order for sessions opened afterwards.
    #[must_use]
    pub fn with_priority(self, priority: TraitPriority) -> Self {
        let dataset = Arc::unwrap_or_clone(self.dataset).with_priority(priority);
        Self::new(dataset)
    }

    #[must_use]
    pub fn dataset(&self) -> Arc<Dataset> {
        Arc::clone(&self.dataset)
    }

    /// Open a new session on the top page.
    #[must_use]
    pub fn new_session(&self) -> QuizSession {
        QuizSession::new(self.dataset())
    }
}
