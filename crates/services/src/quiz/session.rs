use std::sync::Arc;

use quiz_core::ScoreTable;
use quiz_core::model::{Dataset, Question, ResultRecord, TraitId};
use tracing::{debug, info, warn};

use crate::error::SessionError;
use super::page::Page;
use super::progress::QuizProgress;
use super::state::{QuizEvent, SessionState, Transition};

/// A single quiz run over a shared, read-only dataset.
///
/// Owns its `SessionState`. A rejected event leaves the state as it was.
#[derive(Debug, Clone)]
pub struct QuizSession {
    dataset: Arc<Dataset>,
    state: SessionState,
}

impl QuizSession {
    /// Create a session on the top page.
    #[must_use]
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            dataset,
            state: SessionState::initial(),
        }
    }

    /// Apply a transition event.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` when the event is rejected; the state is then
    /// unchanged.
    pub fn dispatch(&mut self, event: QuizEvent) -> Result<Transition, SessionError> {
        match self.state.apply(&self.dataset, event) {
            Ok((next, transition)) => {
                self.state = next;
                log_transition(transition, &self.state);
                Ok(transition)
            }
            Err(err) => {
                warn!(?event, page = %self.state.page(), %err, "rejected quiz event");
                Err(err)
            }
        }
    }

    /// Reset scores and show the first question.
    pub fn start(&mut self) -> Option<&Question> {
        self.state = SessionState::started();
        log_transition(Transition::Started, &self.state);
        self.current_question()
    }

    /// Record the chosen answer for the current question and advance.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotInQuiz` outside the quiz page and
    /// `SessionError::InvalidAnswer` for a zero value.
    pub fn answer(&mut self, value: u32) -> Result<Transition, SessionError> {
        self.dispatch(QuizEvent::Answer(value))
    }

    /// Reset scores and return to the top page.
    pub fn restart(&mut self) {
        self.state = SessionState::initial();
        log_transition(Transition::Restarted, &self.state);
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn page(&self) -> Page {
        self.state.page()
    }

    /// Question on screen; `None` unless on the quiz page.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.state.page() != Page::Quiz {
            return None;
        }
        self.dataset.question_at(self.state.current_index()).ok()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        self.state.progress(self.dataset.total_questions())
    }

    /// Convenience for `progress().ratio()`.
    #[must_use]
    pub fn progress_ratio(&self) -> f64 {
        self.progress().ratio()
    }

    /// Result to display; `None` unless on the result page.
    #[must_use]
    pub fn current_result(&self) -> Option<&ResultRecord> {
        self.state
            .winner()
            .filter(|_| self.state.page() == Page::Result)
            .map(|winner| self.dataset.result_for(winner))
    }

    #[must_use]
    pub fn winner(&self) -> Option<TraitId> {
        self.state.winner()
    }

    #[must_use]
    pub fn scores(&self) -> &ScoreTable {
        self.state.scores()
    }
}

fn log_transition(transition: Transition, state: &SessionState) {
    match transition {
        Transition::Started => debug!("quiz started"),
        Transition::Advanced { index } => debug!(index, "advanced to next question"),
        Transition::Completed { winner } => info!(
            %winner,
            total = state.scores().total(),
            "quiz completed"
        ),
        Transition::Restarted => debug!("quiz restarted"),
    }
}
