use thiserror::Error;

use crate::model::{DatasetError, QuestionError, TraitError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Trait(#[from] TraitError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Question, TraitId, TraitPriority};

    fn build(text: &str, priority: &str) -> Result<Question, Error> {
        let priority: TraitPriority = priority.parse()?;
        Ok(Question::new(text, priority.first())?)
    }

    #[test]
    fn domain_errors_convert_into_crate_error() {
        assert_eq!(build("旅は好き?", "CAOE").unwrap().trait_id(), TraitId::Conscientiousness);
        assert!(matches!(build("q", "EAO"), Err(Error::Trait(_))));
        assert!(matches!(build(" ", "EAOC"), Err(Error::Question(_))));
    }
}
