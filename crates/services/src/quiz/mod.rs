mod page;
mod progress;
mod service;
mod session;
mod state;

// Public API of the quiz subsystem.
pub use crate::error::SessionError;
pub use page::Page;
pub use progress::QuizProgress;
pub use service::QuizService;
pub use session::QuizSession;
pub use state::{QuizEvent, SessionState, Transition};
