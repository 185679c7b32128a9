use crate::config::LandingConfig;
use crate::core::counter::{CounterTween, DisplayCounter};
use crate::core::effects::{self, CursorTrail};
use crate::core::waitlist::WaitlistController;
use crate::domain::model::{Effect, Feedback, PageEvent, SubmissionOutcome, WaitlistStore};
use crate::domain::ports::Presenter;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Wires page events to the waitlist and the presenter.
///
/// The waitlist is always classified first; everything handed to the presenter
/// afterwards is decoration.
pub struct LandingPage<P: Presenter> {
    waitlist: WaitlistController,
    counter: DisplayCounter,
    trail: CursorTrail,
    config: LandingConfig,
    presenter: P,
    rng: StdRng,
}

impl<P: Presenter> LandingPage<P> {
    pub fn new(config: LandingConfig, presenter: P) -> Self {
        Self::with_rng(config, presenter, StdRng::from_entropy())
    }

    /// Deterministic variant for tests and replays.
    pub fn with_seed(config: LandingConfig, presenter: P, seed: u64) -> Self {
        Self::with_rng(config, presenter, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: LandingConfig, presenter: P, rng: StdRng) -> Self {
        let tween = CounterTween::new(config.counter_duration(), config.timing.counter_steps);
        Self {
            waitlist: WaitlistController::new(),
            counter: DisplayCounter::new(tween),
            trail: CursorTrail::new(&config.effects),
            config,
            presenter,
            rng,
        }
    }

    /// Returns the submission outcome when the event was a submission.
    pub fn handle_event(&mut self, event: PageEvent) -> Option<SubmissionOutcome> {
        match event {
            PageEvent::Loaded => {
                self.on_loaded();
                None
            }
            PageEvent::Submit { value } => Some(self.submit(&value)),
            PageEvent::KeyDown {
                key,
                on_email_input,
                value,
            } => {
                if key == "Enter" && on_email_input {
                    Some(self.submit(&value))
                } else {
                    None
                }
            }
            PageEvent::ScrollIndicatorClicked => {
                let target = self.config.effects.scroll_target.clone();
                self.presenter.scroll_to(&target);
                None
            }
            PageEvent::Scrolled { offset_y } => {
                let offset_px =
                    effects::parallax_offset(offset_y, self.config.effects.parallax_speed);
                self.play(Effect::Parallax { offset_px });
                None
            }
            PageEvent::PointerMoved {
                x,
                y,
                viewport_width,
            } => {
                let roll = self.rng.gen::<f64>();
                if let Some(particle) =
                    self.trail.record(x, y, viewport_width, Utc::now(), roll)
                {
                    self.play(Effect::TrailParticle(particle));
                }
                None
            }
            PageEvent::ButtonClicked { rect, x, y } => {
                let lifetime = Duration::from_millis(self.config.effects.ripple_lifetime_ms);
                self.play(Effect::Ripple(effects::ripple(&rect, x, y, lifetime)));
                None
            }
            PageEvent::SectionIntersected { id, ratio } => {
                if let Some(effect) =
                    effects::reveal_section(&id, ratio, self.config.effects.reveal_threshold)
                {
                    self.play(effect);
                }
                None
            }
            PageEvent::HighlightIntersected {
                group,
                index,
                group_len,
                ratio,
            } => {
                let stagger = Duration::from_millis(self.config.effects.reveal_stagger_ms);
                for effect in effects::reveal_highlight_group(
                    &group,
                    index,
                    group_len,
                    ratio,
                    self.config.effects.reveal_threshold,
                    stagger,
                ) {
                    self.play(effect);
                }
                None
            }
        }
    }

    /// Classify a submission and render the matching feedback.
    pub fn submit(&mut self, raw_input: &str) -> SubmissionOutcome {
        let outcome = self.waitlist.submit(raw_input);

        let feedback = self.feedback_for(outcome);
        self.presenter.show_feedback(&feedback);

        if outcome.is_accepted() {
            let animation = self.counter.increment();
            self.presenter.animate_counter(animation);
            self.presenter.clear_input();
            self.celebrate();

            if let Ok(emails) = serde_json::to_string(self.waitlist.store()) {
                tracing::debug!("Waitlist emails: {}", emails);
            }
        }

        outcome
    }

    pub fn feedback_for(&self, outcome: SubmissionOutcome) -> Feedback {
        let message = match outcome {
            SubmissionOutcome::Accepted => &self.config.messages.accepted,
            SubmissionOutcome::RejectedInvalidFormat => &self.config.messages.invalid_email,
            SubmissionOutcome::RejectedDuplicate => &self.config.messages.duplicate_email,
        };

        Feedback {
            message: message.clone(),
            kind: outcome.kind(),
            fade_after: self.config.message_fade_after(),
            fade_for: self.config.message_fade_for(),
        }
    }

    fn on_loaded(&mut self) {
        let animation = self
            .counter
            .animate_to(self.config.counter.seed, self.config.intro_delay());
        self.presenter.animate_counter(animation);
    }

    fn celebrate(&mut self) {
        let hearts =
            effects::celebration(&self.config.effects, &self.config.viewport, &mut self.rng);
        for heart in hearts {
            self.play(Effect::FloatingHeart(heart));
        }
    }

    fn play(&mut self, effect: Effect) {
        if self.config.effects.enabled {
            self.presenter.play_effect(effect);
        }
    }

    pub fn waitlist(&self) -> &WaitlistStore {
        self.waitlist.store()
    }

    pub fn display_count(&self) -> i64 {
        self.counter.value()
    }

    pub fn trail(&self) -> &CursorTrail {
        &self.trail
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }
}
