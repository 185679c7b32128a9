use crate::domain::model::{SubmissionOutcome, WaitlistStore};
use crate::utils::validation::{is_valid_email, trim_email_input};

/// Owns the collected emails and classifies every submission.
#[derive(Debug, Default)]
pub struct WaitlistController {
    store: WaitlistStore,
}

impl WaitlistController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trim, validate, deduplicate and record a candidate email.
    ///
    /// Never fails: every rejection is reported through the outcome and leaves
    /// the store untouched.
    pub fn submit(&mut self, raw_input: &str) -> SubmissionOutcome {
        let candidate = trim_email_input(raw_input);

        if !is_valid_email(candidate) {
            tracing::debug!("Rejected malformed email input");
            return SubmissionOutcome::RejectedInvalidFormat;
        }

        if self.store.contains(candidate) {
            tracing::debug!("Rejected duplicate email: {}", candidate);
            return SubmissionOutcome::RejectedDuplicate;
        }

        self.store.push(candidate.to_string());
        tracing::info!("📝 Waitlist entry accepted ({} total)", self.store.len());
        SubmissionOutcome::Accepted
    }

    pub fn store(&self) -> &WaitlistStore {
        &self.store
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
