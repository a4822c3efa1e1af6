mod dataset;
mod question;
mod result;
mod traits;

pub use dataset::{Dataset, DatasetError};
pub use question::{Question, QuestionError};
pub use result::ResultRecord;
pub use traits::{TraitError, TraitId, TraitPriority};
