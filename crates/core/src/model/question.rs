use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::TraitId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,
}

/// A single quiz statement, scored into one trait bucket.
///
/// Presentation order is the question's position in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    text: String,
    #[serde(rename = "trait")]
    trait_id: TraitId,
}

impl Question {
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyText` if `text` is blank.
    pub fn new(text: impl Into<String>, trait_id: TraitId) -> Result<Self, QuestionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        Ok(Self { text, trait_id })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn trait_id(&self) -> TraitId {
        self.trait_id
    }
}
