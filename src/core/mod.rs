pub mod counter;
pub mod effects;
pub mod landing;
pub mod waitlist;

pub use crate::domain::model::{PageEvent, SubmissionOutcome, WaitlistEntry, WaitlistStore};
pub use crate::domain::ports::Presenter;
pub use crate::utils::error::Result;
