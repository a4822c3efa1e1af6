use quiz_core::model::{Dataset, TraitId};
use quiz_core::{ScoreTable, Scorer};

use crate::error::SessionError;
use super::page::Page;
use super::progress::QuizProgress;

//
// ─── EVENTS ────────────────────────────────────────────────────────────────────
//

/// Input accepted by the quiz state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEvent {
    /// Begin a fresh session at the first question.
    Start,
    /// Submit the score of the chosen answer for the current question.
    Answer(u32),
    /// Reset and go back to the top page.
    Restart,
}

/// What an accepted event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Started,
    Advanced { index: usize },
    Completed { winner: TraitId },
    Restarted,
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Everything that changes during a quiz session.
///
/// `current_index` is a valid question index while `page` is `Quiz` and equals
/// the question count once `page` is `Result`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    current_index: usize,
    scorer: Scorer,
    page: Page,
    winner: Option<TraitId>,
}

impl SessionState {
    /// Fresh state on the top page.
    #[must_use]
    pub fn initial() -> Self {
        Self::default()
    }

    /// Fresh state showing the first question.
    #[must_use]
    pub fn started() -> Self {
        Self {
            page: Page::Quiz,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn page(&self) -> Page {
        self.page
    }

    #[must_use]
    pub fn scores(&self) -> &ScoreTable {
        self.scorer.scores()
    }

    /// Winning trait, set only on the result page.
    #[must_use]
    pub fn winner(&self) -> Option<TraitId> {
        self.winner
    }

    #[must_use]
    pub fn progress(&self, total: usize) -> QuizProgress {
        QuizProgress {
            answered: self.current_index,
            total,
        }
    }

    /// Compute the state that follows `event`.
    ///
    /// `self` is left untouched; the caller decides whether to keep the
    /// returned state.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotInQuiz` for an answer outside the quiz page and
    /// `SessionError::InvalidAnswer` for a zero answer value.
    pub fn apply(
        &self,
        dataset: &Dataset,
        event: QuizEvent,
    ) -> Result<(SessionState, Transition), SessionError> {
        match event {
            QuizEvent::Start => Ok((Self::started(), Transition::Started)),
            QuizEvent::Restart => Ok((Self::initial(), Transition::Restarted)),
            QuizEvent::Answer(value) => self.answered(dataset, value),
        }
    }

    fn answered(
        &self,
        dataset: &Dataset,
        value: u32,
    ) -> Result<(SessionState, Transition), SessionError> {
        if self.page != Page::Quiz {
            return Err(SessionError::NotInQuiz { page: self.page });
        }
        if value == 0 {
            return Err(SessionError::InvalidAnswer { value });
        }

        let question = dataset.question_at(self.current_index)?;
        let mut next = self.clone();
        next.scorer.record(question.trait_id(), value);
        next.current_index += 1;

        if next.current_index < dataset.total_questions() {
            let index = next.current_index;
            return Ok((next, Transition::Advanced { index }));
        }

        let winner = next.scorer.winner(&dataset.priority());
        next.winner = Some(winner);
        next.page = Page::Result;
        Ok((next, Transition::Completed { winner }))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
