use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A validated, deduplicated email accepted onto the waitlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    pub email: String,
}

/// Insertion-ordered entries with no two equal emails.
///
/// Only the waitlist controller mutates it; everyone else gets a shared view.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct WaitlistStore {
    entries: Vec<WaitlistEntry>,
}

impl WaitlistStore {
    pub fn contains(&self, email: &str) -> bool {
        self.entries.iter().any(|entry| entry.email == email)
    }

    pub(crate) fn push(&mut self, email: String) {
        self.entries.push(WaitlistEntry { email });
    }

    pub fn entries(&self) -> &[WaitlistEntry] {
        &self.entries
    }

    pub fn emails(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.email.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted,
    RejectedInvalidFormat,
    RejectedDuplicate,
}

impl SubmissionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted)
    }

    pub fn kind(&self) -> FeedbackKind {
        match self {
            SubmissionOutcome::Accepted => FeedbackKind::Success,
            SubmissionOutcome::RejectedInvalidFormat | SubmissionOutcome::RejectedDuplicate => {
                FeedbackKind::Error
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Success,
    Error,
}

impl FeedbackKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackKind::Success => "success",
            FeedbackKind::Error => "error",
        }
    }
}

/// 表單下方的暫時訊息
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub message: String,
    pub kind: FeedbackKind,
    /// Delay before the message starts fading out.
    pub fade_after: Duration,
    /// Fade duration; the message is cleared once it elapses.
    pub fade_for: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFrame {
    /// Offset from the start of the animation.
    pub at: Duration,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterAnimation {
    pub start_after: Duration,
    pub frames: Vec<CounterFrame>,
}

impl CounterAnimation {
    pub fn final_value(&self) -> Option<i64> {
        self.frames.last().map(|frame| frame.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RevealTarget {
    Section(String),
    FeatureHighlight { group: String, index: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FloatingHeart {
    pub delay: Duration,
    pub left_px: f64,
    pub top_px: f64,
    pub lifetime: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ripple {
    pub size_px: f64,
    pub left_px: f64,
    pub top_px: f64,
    pub lifetime: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrailParticle {
    pub x: f64,
    pub y: f64,
    pub lifetime: Duration,
}

/// Purely visual work handed to the presenter. Nothing here feeds back into the waitlist.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FloatingHeart(FloatingHeart),
    Ripple(Ripple),
    TrailParticle(TrailParticle),
    Parallax { offset_px: f64 },
    Reveal { target: RevealTarget, delay: Duration },
}

/// Generic page events the landing page reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Loaded,
    Submit {
        value: String,
    },
    KeyDown {
        key: String,
        on_email_input: bool,
        value: String,
    },
    ScrollIndicatorClicked,
    Scrolled {
        offset_y: f64,
    },
    PointerMoved {
        x: f64,
        y: f64,
        viewport_width: f64,
    },
    ButtonClicked {
        rect: Rect,
        x: f64,
        y: f64,
    },
    SectionIntersected {
        id: String,
        ratio: f64,
    },
    HighlightIntersected {
        group: String,
        index: usize,
        group_len: usize,
        ratio: f64,
    },
}
