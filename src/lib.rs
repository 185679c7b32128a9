pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::terminal::{TerminalLine, TerminalPresenter};
pub use config::LandingConfig;
pub use crate::core::{landing::LandingPage, waitlist::WaitlistController};
pub use domain::model::{Feedback, FeedbackKind, PageEvent, SubmissionOutcome, WaitlistEntry};
pub use domain::ports::Presenter;
pub use utils::error::{LandingError, Result};
