#![forbid(unsafe_code)]

pub mod error;
pub mod quiz;

pub use error::{QuizServiceError, SessionError};
pub use quiz::{Page, QuizEvent, QuizProgress, QuizService, QuizSession, SessionState, Transition};
