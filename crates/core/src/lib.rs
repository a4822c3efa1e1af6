#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod scorer;

pub use error::Error;
pub use scorer::{ScoreTable, Scorer};
