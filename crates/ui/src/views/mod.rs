mod quiz;
mod result;
mod screen;
mod state;
mod top;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use quiz::QuizView;
pub use result::ResultView;
pub use screen::QuizScreen;
pub use state::ViewError;
pub use top::TopView;
