use crate::domain::model::{CounterAnimation, Effect, Feedback};

/// Rendering side of the landing page.
///
/// Every call is fire-and-forget: implementations schedule whatever timers they
/// need and must not report back into the waitlist.
pub trait Presenter {
    fn show_feedback(&mut self, feedback: &Feedback);
    fn animate_counter(&mut self, animation: CounterAnimation);
    fn clear_input(&mut self);
    fn play_effect(&mut self, effect: Effect);
    fn scroll_to(&mut self, section_id: &str);
}

