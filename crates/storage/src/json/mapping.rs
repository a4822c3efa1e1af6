use quiz_core::model::{Dataset, DatasetError, Question, ResultRecord, TraitId, TraitPriority};
use serde::{Deserialize, Serialize};

use crate::repository::StorageError;

/// On-disk shape of a dataset document.
///
/// Kept separate from the domain `Dataset` so the file format can evolve
/// without leaking into the core crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trait_priority: Option<Vec<TraitId>>,
    pub questions: Vec<QuestionRecord>,
    pub results: Vec<ResultRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub text: String,
    #[serde(rename = "trait")]
    pub trait_id: TraitId,
}

impl DatasetDocument {
    #[must_use]
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            trait_priority: Some(dataset.priority().as_slice().to_vec()),
            questions: dataset
                .questions()
                .iter()
                .map(|q| QuestionRecord {
                    text: q.text().to_owned(),
                    trait_id: q.trait_id(),
                })
                .collect(),
            results: dataset.results().to_vec(),
        }
    }

    /// Convert the document into a validated domain `Dataset`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Trait` for an invalid priority order and
    /// `StorageError::Dataset` for missing questions or result records.
    pub fn into_dataset(self) -> Result<Dataset, StorageError> {
        let priority = match self.trait_priority {
            Some(order) => TraitPriority::new(&order)?,
            None => TraitPriority::default(),
        };

        let questions = self
            .questions
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                Question::new(record.text, record.trait_id)
                    .map_err(|_| DatasetError::EmptyQuestionText { index })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Dataset::new(questions, self.results, priority)?)
    }
}
