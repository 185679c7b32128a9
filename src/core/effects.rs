use crate::config::toml_config::{EffectsConfig, ViewportConfig};
use crate::domain::model::{Effect, FloatingHeart, Rect, RevealTarget, Ripple, TrailParticle};
use chrono::{DateTime, Utc};
use rand::Rng;
use std::collections::VecDeque;
use std::time::Duration;

/// Hearts floating up from the bottom edge, staggered one after another.
pub fn celebration<R: Rng + ?Sized>(
    config: &EffectsConfig,
    viewport: &ViewportConfig,
    rng: &mut R,
) -> Vec<FloatingHeart> {
    let stagger = Duration::from_millis(config.heart_stagger_ms);
    let lifetime = Duration::from_millis(config.heart_lifetime_ms);

    (0..config.heart_count)
        .map(|i| FloatingHeart {
            delay: stagger * i,
            left_px: rng.gen::<f64>() * viewport.width,
            top_px: viewport.height,
            lifetime,
        })
        .collect()
}

/// Ripple centred on the click, sized to cover the button.
pub fn ripple(rect: &Rect, client_x: f64, client_y: f64, lifetime: Duration) -> Ripple {
    let size = rect.width.max(rect.height);
    Ripple {
        size_px: size,
        left_px: client_x - rect.left - size / 2.0,
        top_px: client_y - rect.top - size / 2.0,
        lifetime,
    }
}

pub fn parallax_offset(scrolled: f64, speed: f64) -> f64 {
    scrolled * speed
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    pub x: f64,
    pub y: f64,
    pub time: DateTime<Utc>,
}

/// Recent pointer positions plus the odd particle left behind.
#[derive(Debug, Clone)]
pub struct CursorTrail {
    points: VecDeque<TrailPoint>,
    capacity: usize,
    min_viewport_width: f64,
    spawn_chance: f64,
    particle_lifetime: Duration,
}

impl CursorTrail {
    pub fn new(config: &EffectsConfig) -> Self {
        Self {
            points: VecDeque::with_capacity(config.trail_length + 1),
            capacity: config.trail_length,
            min_viewport_width: config.trail_min_viewport_width,
            spawn_chance: config.trail_spawn_chance,
            particle_lifetime: Duration::from_millis(config.trail_particle_lifetime_ms),
        }
    }

    /// `roll` is a uniform sample in `[0, 1)`; a particle spawns when it falls under
    /// the spawn chance. Narrow (mobile) viewports are ignored entirely.
    pub fn record(
        &mut self,
        x: f64,
        y: f64,
        viewport_width: f64,
        now: DateTime<Utc>,
        roll: f64,
    ) -> Option<TrailParticle> {
        if viewport_width <= self.min_viewport_width {
            return None;
        }

        self.points.push_back(TrailPoint { x, y, time: now });
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }

        (roll < self.spawn_chance).then(|| TrailParticle {
            x,
            y,
            lifetime: self.particle_lifetime,
        })
    }

    pub fn points(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

pub fn reveal_section(id: &str, ratio: f64, threshold: f64) -> Option<Effect> {
    (ratio >= threshold).then(|| Effect::Reveal {
        target: RevealTarget::Section(id.to_string()),
        delay: Duration::ZERO,
    })
}

/// A visible highlight reveals itself, then its whole group one by one.
pub fn reveal_highlight_group(
    group: &str,
    index: usize,
    group_len: usize,
    ratio: f64,
    threshold: f64,
    stagger: Duration,
) -> Vec<Effect> {
    if ratio < threshold || ratio.is_nan() {
        return Vec::new();
    }

    let mut effects = vec![Effect::Reveal {
        target: RevealTarget::FeatureHighlight {
            group: group.to_string(),
            index,
        },
        delay: Duration::ZERO,
    }];

    effects.extend((0..group_len).map(|i| Effect::Reveal {
        target: RevealTarget::FeatureHighlight {
            group: group.to_string(),
            index: i,
        },
        delay: stagger * i as u32,
    }));

    effects
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_celebration_staggers_hearts_inside_viewport() {
        let config = EffectsConfig::default();
        let viewport = ViewportConfig {
            width: 1000.0,
            height: 700.0,
        };
        let mut rng = StdRng::seed_from_u64(7);

        let hearts = celebration(&config, &viewport, &mut rng);

        assert_eq!(hearts.len(), 5);
        for (i, heart) in hearts.iter().enumerate() {
            assert_eq!(heart.delay, Duration::from_millis(200 * i as u64));
            assert_eq!(heart.lifetime, Duration::from_millis(3000));
            assert_eq!(heart.top_px, 700.0);
            assert!(heart.left_px >= 0.0 && heart.left_px < 1000.0);
        }
    }

    #[test]
    fn test_ripple_geometry() {
        let rect = Rect {
            left: 100.0,
            top: 50.0,
            width: 200.0,
            height: 40.0,
        };

        let r = ripple(&rect, 150.0, 70.0, Duration::from_millis(600));

        assert_eq!(r.size_px, 200.0);
        assert_eq!(r.left_px, -50.0);
        assert_eq!(r.top_px, -80.0);
        assert_eq!(r.lifetime, Duration::from_millis(600));
    }

    #[test]
    fn test_parallax_offset() {
        assert_eq!(parallax_offset(300.0, 0.5), 150.0);
        assert_eq!(parallax_offset(0.0, 0.5), 0.0);
    }

    #[test]
    fn test_trail_keeps_last_points_only() {
        let mut trail = CursorTrail::new(&EffectsConfig::default());
        let now = Utc::now();

        for i in 0..15 {
            trail.record(i as f64, 0.0, 1280.0, now, 0.99);
        }

        assert_eq!(trail.len(), 10);
        assert_eq!(trail.points().next().map(|p| p.x), Some(5.0));
    }

    #[test]
    fn test_trail_ignores_narrow_viewports() {
        let mut trail = CursorTrail::new(&EffectsConfig::default());

        assert!(trail.record(1.0, 1.0, 768.0, Utc::now(), 0.0).is_none());
        assert!(trail.is_empty());
    }

    #[test]
    fn test_trail_spawns_particle_on_low_roll() {
        let mut trail = CursorTrail::new(&EffectsConfig::default());

        let particle = trail.record(40.0, 60.0, 1280.0, Utc::now(), 0.05);
        assert_eq!(
            particle,
            Some(TrailParticle {
                x: 40.0,
                y: 60.0,
                lifetime: Duration::from_millis(1000)
            })
        );
        assert!(trail.record(40.0, 60.0, 1280.0, Utc::now(), 0.5).is_none());
    }

    #[test]
    fn test_reveal_respects_threshold() {
        assert!(reveal_section("about", 0.05, 0.1).is_none());
        assert_eq!(
            reveal_section("about", 0.1, 0.1),
            Some(Effect::Reveal {
                target: RevealTarget::Section("about".to_string()),
                delay: Duration::ZERO,
            })
        );
    }

    #[test]
    fn test_highlight_group_is_staggered() {
        let effects =
            reveal_highlight_group("features", 2, 3, 0.5, 0.1, Duration::from_millis(200));

        assert_eq!(effects.len(), 4);
        let delays: Vec<Duration> = effects
            .iter()
            .map(|effect| match effect {
                Effect::Reveal { delay, .. } => *delay,
                other => panic!("unexpected effect {:?}", other),
            })
            .collect();
        assert_eq!(
            delays,
            vec![
                Duration::ZERO,
                Duration::ZERO,
                Duration::from_millis(200),
                Duration::from_millis(400)
            ]
        );
        assert!(reveal_highlight_group("features", 0, 3, 0.0, 0.1, Duration::ZERO).is_empty());
        assert!(reveal_highlight_group("features", 0, 3, f64::NAN, 0.1, Duration::ZERO).is_empty());
    }
}
