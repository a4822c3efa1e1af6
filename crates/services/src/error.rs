//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::DatasetError;
use storage::repository::StorageError;

use crate::quiz::Page;

/// Errors emitted by quiz session transitions.
///
/// A rejected transition never modifies the session state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("cannot answer while on the {page} page")]
    NotInQuiz { page: Page },
    #[error("answer value must be positive, got {value}")]
    InvalidAnswer { value: u32 },
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Errors emitted while bootstrapping the quiz service.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}
