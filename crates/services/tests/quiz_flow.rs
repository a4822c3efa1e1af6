use std::sync::Arc;

use quiz_core::model::{Dataset, TraitId, TraitPriority};
use services::{Page, QuizEvent, QuizService, QuizServiceError, SessionError, Transition};
use storage::repository::{DatasetRepository, InMemoryRepository, Storage, StorageError};

#[tokio::test]
async fn embedded_quiz_runs_to_a_result() {
    let storage = Storage::embedded();
    let service = QuizService::load(storage.dataset.as_ref()).await.unwrap();
    let mut session = service.new_session();
    let total = service.dataset().total_questions();

    let first = session.start().map(|q| q.trait_id());
    assert_eq!(first, Some(TraitId::Extraversion));

    // Answer 5 for openness questions, 1 for everything else.
    let mut transition = None;
    while session.page() == Page::Quiz {
        let question = session.current_question().expect("question on quiz page");
        let value = if question.trait_id() == TraitId::Openness { 5 } else { 1 };
        transition = Some(session.answer(value).unwrap());
    }

    assert_eq!(
        transition,
        Some(Transition::Completed {
            winner: TraitId::Openness
        })
    );
    assert_eq!(session.progress().answered, total);
    let result = session.current_result().expect("result on result page");
    assert_eq!(result.trait_id, TraitId::Openness);
    assert_eq!(session.scores().get(TraitId::Openness), 20);
    assert_eq!(session.scores().get(TraitId::Conscientiousness), 4);
}

#[tokio::test]
async fn priority_override_breaks_uniform_ties() {
    let storage = Storage::embedded();
    let service = QuizService::load(storage.dataset.as_ref())
        .await
        .unwrap()
        .with_priority("AOCE".parse::<TraitPriority>().unwrap());
    let mut session = service.new_session();

    session.start();
    while session.page() == Page::Quiz {
        session.answer(3).unwrap();
    }

    assert_eq!(session.winner(), Some(TraitId::Agreeableness));
}

#[tokio::test]
async fn sessions_from_one_service_are_independent() {
    let service = QuizService::load(Storage::embedded().dataset.as_ref())
        .await
        .unwrap();
    let mut first = service.new_session();
    let second = service.new_session();

    first.dispatch(QuizEvent::Start).unwrap();
    first.dispatch(QuizEvent::Answer(4)).unwrap();

    assert_eq!(first.scores().get(TraitId::Extraversion), 4);
    assert_eq!(second.page(), Page::Top);
    assert!(second.scores().is_zero());
}

#[tokio::test]
async fn answering_before_start_is_rejected() {
    let service = QuizService::load(Storage::embedded().dataset.as_ref())
        .await
        .unwrap();
    let mut session = service.new_session();

    let err = session.answer(3).unwrap_err();
    assert_eq!(err, SessionError::NotInQuiz { page: Page::Top });
    assert!(session.scores().is_zero());
}

struct BrokenRepo;

#[async_trait::async_trait]
impl DatasetRepository for BrokenRepo {
    async fn load_dataset(&self) -> Result<Dataset, StorageError> {
        Err(StorageError::Io("disk on fire".into()))
    }
}

#[tokio::test]
async fn load_failure_is_reported() {
    let err = QuizService::load(&BrokenRepo).await.err().expect("load fails");
    assert!(matches!(err, QuizServiceError::Storage(StorageError::Io(_))));

    let empty = Arc::new(InMemoryRepository::new());
    let err = QuizService::load(empty.as_ref()).await.err().expect("load fails");
    assert!(matches!(err, QuizServiceError::Storage(StorageError::NotFound(_))));
}
