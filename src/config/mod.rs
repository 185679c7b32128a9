pub mod toml_config;

pub use toml_config::LandingConfig;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "landing-waitlist")]
#[command(about = "Waitlist landing page, played in the terminal")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    /// Override the decorative counter seed
    #[arg(long)]
    pub seed: Option<i64>,

    #[arg(long, help = "Disable decorative effects")]
    pub no_effects: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入配置檔 (若有) 並套用命令列覆蓋
    pub fn load_landing_config(&self) -> crate::utils::error::Result<LandingConfig> {
        let mut config = match &self.config {
            Some(path) => LandingConfig::from_file(path)?,
            None => LandingConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut LandingConfig) {
        if let Some(seed) = self.seed {
            config.counter.seed = seed;
        }
        if self.no_effects {
            config.effects.enabled = false;
        }
    }
}
