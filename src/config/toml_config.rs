use crate::utils::error::{LandingError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub messages: MessagesConfig,
    pub timing: TimingConfig,
    pub counter: CounterConfig,
    pub viewport: ViewportConfig,
    pub effects: EffectsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagesConfig {
    pub invalid_email: String,
    pub duplicate_email: String,
    pub accepted: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            invalid_email: "Please enter a valid email address, darling! 💋".to_string(),
            duplicate_email: "You're already on our exclusive list! 💕".to_string(),
            accepted: "✨ Welcome to the ReallyCloset family! We'll be in touch soon with something special."
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub message_visible_ms: u64,
    pub message_fade_ms: u64,
    pub counter_duration_ms: u64,
    pub counter_steps: u32,
    pub intro_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            message_visible_ms: 6000,
            message_fade_ms: 300,
            counter_duration_ms: 1000,
            counter_steps: 20,
            intro_delay_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// 裝飾用的起始人數，與實際名單無關
    pub seed: i64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self { seed: 247 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub enabled: bool,
    pub heart_count: u32,
    pub heart_stagger_ms: u64,
    pub heart_lifetime_ms: u64,
    pub ripple_lifetime_ms: u64,
    pub parallax_speed: f64,
    pub trail_min_viewport_width: f64,
    pub trail_length: usize,
    pub trail_spawn_chance: f64,
    pub trail_particle_lifetime_ms: u64,
    pub reveal_threshold: f64,
    pub reveal_stagger_ms: u64,
    pub scroll_target: String,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            heart_count: 5,
            heart_stagger_ms: 200,
            heart_lifetime_ms: 3000,
            ripple_lifetime_ms: 600,
            parallax_speed: 0.5,
            trail_min_viewport_width: 768.0,
            trail_length: 10,
            trail_spawn_chance: 0.1,
            trail_particle_lifetime_ms: 1000,
            reveal_threshold: 0.1,
            reveal_stagger_ms: 200,
            scroll_target: "about".to_string(),
        }
    }
}

impl LandingConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LandingError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| LandingError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${WELCOME_MESSAGE})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        // 字面常數，不會失敗
        let re = Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex");

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn message_fade_after(&self) -> Duration {
        Duration::from_millis(self.timing.message_visible_ms)
    }

    pub fn message_fade_for(&self) -> Duration {
        Duration::from_millis(self.timing.message_fade_ms)
    }

    pub fn counter_duration(&self) -> Duration {
        Duration::from_millis(self.timing.counter_duration_ms)
    }

    pub fn intro_delay(&self) -> Duration {
        Duration::from_millis(self.timing.intro_delay_ms)
    }
}

impl Validate for LandingConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("messages.invalid_email", &self.messages.invalid_email)?;
        validate_non_empty_string("messages.duplicate_email", &self.messages.duplicate_email)?;
        validate_non_empty_string("messages.accepted", &self.messages.accepted)?;

        validate_positive_number(
            "timing.counter_steps",
            u64::from(self.timing.counter_steps),
            1,
        )?;

        validate_range("viewport.width", self.viewport.width, 1.0, f64::MAX)?;
        validate_range("viewport.height", self.viewport.height, 1.0, f64::MAX)?;

        validate_range("effects.parallax_speed", self.effects.parallax_speed, -10.0, 10.0)?;
        validate_range(
            "effects.trail_spawn_chance",
            self.effects.trail_spawn_chance,
            0.0,
            1.0,
        )?;
        validate_range("effects.reveal_threshold", self.effects.reveal_threshold, 0.0, 1.0)?;
        validate_positive_number("effects.trail_length", self.effects.trail_length as u64, 1)?;
        validate_non_empty_string("effects.scroll_target", &self.effects.scroll_target)?;

        Ok(())
    }
}
