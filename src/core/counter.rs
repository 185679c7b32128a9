use crate::domain::model::{CounterAnimation, CounterFrame};
use std::time::Duration;

/// Linear tween over a fixed number of discrete steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterTween {
    duration: Duration,
    steps: u32,
}

impl CounterTween {
    pub fn new(duration: Duration, steps: u32) -> Self {
        Self {
            duration,
            steps: steps.max(1),
        }
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// 每一步四捨五入到整數，最後一步固定為目標值
    pub fn frames(&self, from: i64, to: i64) -> Vec<CounterFrame> {
        let increment = (to as f64 - from as f64) / f64::from(self.steps);

        (1..=self.steps)
            .map(|step| {
                let value = if step == self.steps {
                    to
                } else {
                    round_half_up(from as f64 + increment * f64::from(step))
                };
                CounterFrame {
                    at: self.duration * step / self.steps,
                    value,
                }
            })
            .collect()
    }
}

// .5 always rounds toward positive infinity, e.g. -2.5 -> -2
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// The decorative "people on the waitlist" number.
///
/// Not derived from the waitlist itself; it starts at zero and is animated up to
/// a configured seed on page load.
#[derive(Debug, Clone)]
pub struct DisplayCounter {
    value: i64,
    tween: CounterTween,
}

impl DisplayCounter {
    pub fn new(tween: CounterTween) -> Self {
        Self { value: 0, tween }
    }

    /// Value the display settles on once any running animation finishes.
    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn animate_to(&mut self, target: i64, start_after: Duration) -> CounterAnimation {
        let frames = self.tween.frames(self.value, target);
        self.value = target;
        CounterAnimation {
            start_after,
            frames,
        }
    }

    pub fn increment(&mut self) -> CounterAnimation {
        self.animate_to(self.value.saturating_add(1), Duration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_tween() -> CounterTween {
        CounterTween::new(Duration::from_millis(1000), 20)
    }

    #[test]
    fn test_frames_are_evenly_spaced() {
        let frames = default_tween().frames(0, 247);

        assert_eq!(frames.len(), 20);
        assert_eq!(frames[0].at, Duration::from_millis(50));
        assert_eq!(frames[19].at, Duration::from_millis(1000));
    }

    #[test]
    fn test_frames_interpolate_and_round() {
        let frames = default_tween().frames(0, 247);

        // 247 / 20 = 12.35 per step
        assert_eq!(frames[0].value, 12);
        assert_eq!(frames[1].value, 25);
        assert_eq!(frames[3].value, 49);
        assert_eq!(frames[19].value, 247);
    }

    #[test]
    fn test_single_increment_rounds_up_at_halfway() {
        let frames = default_tween().frames(247, 248);
        let values: Vec<i64> = frames.iter().map(|f| f.value).collect();

        assert!(values[..9].iter().all(|v| *v == 247));
        assert!(values[9..].iter().all(|v| *v == 248));
    }

    #[test]
    fn test_round_half_up_for_negative_values() {
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.6), -3);
    }

    #[test]
    fn test_zero_steps_is_clamped() {
        let tween = CounterTween::new(Duration::from_millis(100), 0);
        let frames = tween.frames(1, 5);

        assert_eq!(tween.steps(), 1);
        assert_eq!(
            frames,
            vec![CounterFrame {
                at: Duration::from_millis(100),
                value: 5
            }]
        );
    }

    #[test]
    fn test_display_counter_increment_builds_on_seed() {
        let mut counter = DisplayCounter::new(default_tween());
        let intro = counter.animate_to(247, Duration::from_millis(2000));

        assert_eq!(intro.start_after, Duration::from_millis(2000));
        assert_eq!(intro.final_value(), Some(247));

        let bump = counter.increment();
        assert_eq!(bump.start_after, Duration::ZERO);
        assert_eq!(bump.final_value(), Some(248));
        assert_eq!(counter.value(), 248);
    }

    #[test]
    fn test_increment_saturates_at_max_seed() {
        let mut counter = DisplayCounter::new(default_tween());
        counter.animate_to(i64::MAX, Duration::ZERO);

        let bump = counter.increment();
        assert_eq!(bump.final_value(), Some(i64::MAX));
        assert_eq!(counter.value(), i64::MAX);
    }
}
