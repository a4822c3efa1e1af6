use quiz_core::model::{Question, ResultRecord};
use services::{Page, QuizEvent, QuizProgress, QuizSession, Transition};

use crate::views::ViewError;

/// User input coming from the quiz screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Start,
    Choose(u32),
    BackToTop,
}

impl From<QuizIntent> for QuizEvent {
    fn from(intent: QuizIntent) -> Self {
        match intent {
            QuizIntent::Start => QuizEvent::Start,
            QuizIntent::Choose(value) => QuizEvent::Answer(value),
            QuizIntent::BackToTop => QuizEvent::Restart,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub value: u32,
    pub label: &'static str,
}

/// The five answer buttons, scored 1 to 5.
pub const CHOICES: [ChoiceVm; 5] = [
    ChoiceVm {
        value: 1,
        label: "あてはまらない",
    },
    ChoiceVm {
        value: 2,
        label: "あまりあてはまらない",
    },
    ChoiceVm {
        value: 3,
        label: "どちらともいえない",
    },
    ChoiceVm {
        value: 4,
        label: "ややあてはまる",
    },
    ChoiceVm {
        value: 5,
        label: "あてはまる",
    },
];

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionVm {
    pub text: String,
    pub progress_text: String,
    pub progress_width: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageVm {
    pub src: String,
    pub alt: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub headline: String,
    pub description: String,
    pub spot_name: String,
    pub spot_reason: String,
    pub image: Option<ImageVm>,
}

#[must_use]
pub fn map_question(question: &Question, progress: QuizProgress) -> QuestionVm {
    QuestionVm {
        text: question.text().to_owned(),
        progress_text: format!("{} / {} 問", progress.current_number(), progress.total),
        progress_width: progress_width(progress),
    }
}

/// CSS width of the progress bar fill, e.g. `"25%"`.
#[must_use]
pub fn progress_width(progress: QuizProgress) -> String {
    format!("{}%", progress.ratio() * 100.0)
}

#[must_use]
pub fn map_result(record: &ResultRecord) -> ResultVm {
    let image = record.has_image().then(|| ImageVm {
        src: record.image_url.clone(),
        alt: format!("{}の画像", record.spot_name),
    });

    ResultVm {
        headline: format!("あなたは{}が高い傾向にあります。", record.label),
        description: record.description.clone(),
        spot_name: record.spot_name.clone(),
        spot_reason: record.spot_reason.clone(),
        image,
    }
}

/// Presenter-side wrapper that turns intents into session transitions and
/// exposes render-ready data for the current page.
#[derive(Clone, Debug)]
pub struct QuizVm {
    session: QuizSession,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn page(&self) -> Page {
        self.session.page()
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// # Errors
    ///
    /// Returns `ViewError::Rejected` when the session refuses the intent, for
    /// example a choice arriving after the result is shown.
    pub fn apply(&mut self, intent: QuizIntent) -> Result<Transition, ViewError> {
        self.session
            .dispatch(intent.into())
            .map_err(|_| ViewError::Rejected)
    }

    #[must_use]
    pub fn question(&self) -> Option<QuestionVm> {
        self.session
            .current_question()
            .map(|question| map_question(question, self.session.progress()))
    }

    #[must_use]
    pub fn result(&self) -> Option<ResultVm> {
        self.session.current_result().map(map_result)
    }
}
