//! Command-line arguments.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use game_content::ContentFactory;
use game_core::{ConfigRegistry, GameConfig};
use runtime::RuntimeConfig;

#[derive(Parser, Debug)]
#[command(
    name = "incremental",
    about = "Run scripted sessions of the incremental game",
    version
)]
pub struct Cli {
    /// Seed for the session random source (overrides RUNTIME_SEED)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory with content tables and config.toml; bundled content when omitted
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Encounter timer period in milliseconds (overrides RUNTIME_TICK_MS)
    #[arg(long)]
    pub tick_ms: Option<u64>,

    /// Give up on an encounter that has not resolved after this many seconds
    #[arg(long, default_value_t = 120)]
    pub encounter_timeout: u64,

    /// Print the final game state as JSON instead of the game log
    #[arg(long)]
    pub json: bool,

    /// Action ids to perform, in order
    #[arg(value_name = "ACTION")]
    pub actions: Vec<String>,
}

impl Cli {
    /// Runtime settings from the environment with flag overrides applied.
    pub fn runtime_config(&self, game_config: GameConfig) -> RuntimeConfig {
        let mut config = RuntimeConfig::from_env();
        config.game_config = game_config;
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval = Duration::from_millis(tick_ms);
        }
        config
    }

    /// Loads the content registry and session defaults.
    pub fn load_content(&self) -> Result<(ConfigRegistry, GameConfig)> {
        match &self.data_dir {
            Some(dir) => {
                let factory = ContentFactory::new(dir);
                let registry = factory
                    .load_registry()
                    .with_context(|| format!("loading content from {}", dir.display()))?;
                let config = factory.load_config()?;
                Ok((registry, config))
            }
            None => Ok((
                game_content::default_registry()?,
                game_content::default_config()?,
            )),
        }
    }

    pub fn encounter_timeout(&self) -> Duration {
        Duration::from_secs(self.encounter_timeout)
    }
}
