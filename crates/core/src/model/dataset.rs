use thiserror::Error;

use crate::model::{Question, ResultRecord, TraitId, TraitPriority};

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Configuration errors found while assembling a dataset, plus out-of-range
/// question lookups.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DatasetError {
    #[error("dataset has no questions")]
    NoQuestions,

    #[error("question {index} has empty text")]
    EmptyQuestionText { index: usize },

    #[error("no result record for trait {0}")]
    MissingResult(TraitId),

    #[error("more than one result record for trait {0}")]
    DuplicateResult(TraitId),

    #[error("question index {index} out of range (total {total})")]
    OutOfRange { index: usize, total: usize },
}

//
// ─── DATASET ──────────────────────────────────────────────────────────────────
//

/// Read-only quiz content: the ordered questions, one result per trait and the
/// tie-break order.
///
/// Validated once at construction, so `result_for` is total and
/// `total_questions` is never zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    questions: Vec<Question>,
    // Indexed by `TraitId::index()`.
    results: Vec<ResultRecord>,
    priority: TraitPriority,
}

impl Dataset {
    /// Validate and assemble a dataset.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::NoQuestions` for an empty question list,
    /// `DatasetError::EmptyQuestionText` for a blank question slot,
    /// `DatasetError::DuplicateResult` / `DatasetError::MissingResult` unless
    /// every trait has exactly one result record.
    pub fn new(
        questions: Vec<Question>,
        results: Vec<ResultRecord>,
        priority: TraitPriority,
    ) -> Result<Self, DatasetError> {
        if questions.is_empty() {
            return Err(DatasetError::NoQuestions);
        }
        if let Some(index) = questions.iter().position(|q| q.text().trim().is_empty()) {
            return Err(DatasetError::EmptyQuestionText { index });
        }

        let mut slots: [Option<ResultRecord>; TraitId::COUNT] = Default::default();
        for record in results {
            let slot = &mut slots[record.trait_id.index()];
            if slot.is_some() {
                return Err(DatasetError::DuplicateResult(record.trait_id));
            }
            *slot = Some(record);
        }

        let mut ordered = Vec::with_capacity(TraitId::COUNT);
        for (trait_id, slot) in TraitId::ALL.into_iter().zip(slots) {
            ordered.push(slot.ok_or(DatasetError::MissingResult(trait_id))?);
        }

        Ok(Self {
            questions,
            results: ordered,
            priority,
        })
    }

    /// # Errors
    ///
    /// Returns `DatasetError::OutOfRange` when `index >= total_questions()`.
    pub fn question_at(&self, index: usize) -> Result<&Question, DatasetError> {
        self.questions.get(index).ok_or(DatasetError::OutOfRange {
            index,
            total: self.questions.len(),
        })
    }

    #[must_use]
    pub fn result_for(&self, trait_id: TraitId) -> &ResultRecord {
        &self.results[trait_id.index()]
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn results(&self) -> &[ResultRecord] {
        &self.results
    }

    #[must_use]
    pub fn priority(&self) -> TraitPriority {
        self.priority
    }

    /// Replace the tie-break order, keeping questions and results.
    #[must_use]
    pub fn with_priority(mut self, priority: TraitPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Number of questions scored into `trait_id`.
    #[must_use]
    pub fn question_count_for(&self, trait_id: TraitId) -> usize {
        self.questions
            .iter()
            .filter(|q| q.trait_id() == trait_id)
            .count()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn record(trait_id: TraitId) -> ResultRecord {
        ResultRecord {
            trait_id,
            label: format!("label-{trait_id}"),
            description: "desc".into(),
            spot_name: "spot".into(),
            spot_reason: "reason".into(),
            image_url: String::new(),
        }
    }

    fn all_records() -> Vec<ResultRecord> {
        TraitId::ALL.into_iter().map(record).collect()
    }

    fn questions() -> Vec<Question> {
        vec![
            Question::new("q1", TraitId::Extraversion).unwrap(),
            Question::new("q2", TraitId::Agreeableness).unwrap(),
            Question::new("q3", TraitId::Extraversion).unwrap(),
        ]
    }

    #[test]
    fn results_are_reachable_regardless_of_input_order() {
        let mut records = all_records();
        records.reverse();
        let dataset = Dataset::new(questions(), records, TraitPriority::default()).unwrap();

        for trait_id in TraitId::ALL {
            assert_eq!(dataset.result_for(trait_id).trait_id, trait_id);
        }
    }

    #[test]
    fn missing_result_is_a_configuration_error() {
        let records = all_records()
            .into_iter()
            .filter(|r| r.trait_id != TraitId::Openness)
            .collect();
        let err = Dataset::new(questions(), records, TraitPriority::default()).unwrap_err();
        assert_eq!(err, DatasetError::MissingResult(TraitId::Openness));
    }

    #[test]
    fn duplicate_result_is_a_configuration_error() {
        let mut records = all_records();
        records.push(record(TraitId::Agreeableness));
        let err = Dataset::new(questions(), records, TraitPriority::default()).unwrap_err();
        assert_eq!(err, DatasetError::DuplicateResult(TraitId::Agreeableness));
    }

    #[test]
    fn empty_question_list_is_rejected() {
        let err = Dataset::new(Vec::new(), all_records(), TraitPriority::default()).unwrap_err();
        assert_eq!(err, DatasetError::NoQuestions);
    }

    #[test]
    fn question_lookup_is_bounded() {
        let dataset = Dataset::new(questions(), all_records(), TraitPriority::default()).unwrap();
        assert_eq!(dataset.total_questions(), 3);
        assert_eq!(dataset.question_at(2).unwrap().text(), "q3");
        assert_eq!(
            dataset.question_at(3).unwrap_err(),
            DatasetError::OutOfRange { index: 3, total: 3 }
        );
    }

    #[test]
    fn counts_questions_per_trait() {
        let dataset = Dataset::new(questions(), all_records(), TraitPriority::default()).unwrap();
        assert_eq!(dataset.question_count_for(TraitId::Extraversion), 2);
        assert_eq!(dataset.question_count_for(TraitId::Agreeableness), 1);
        assert_eq!(dataset.question_count_for(TraitId::Conscientiousness), 0);
    }
}
