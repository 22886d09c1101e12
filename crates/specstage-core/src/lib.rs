pub mod error;
pub mod outcome;
pub mod review;

pub use error::ContextError;
pub use outcome::{StageOutcome, StageStatus};
pub use review::SelfReview;
