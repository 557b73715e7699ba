use crate::common::{ApplicationResult, DomainError, DomainResult};
use crate::domains::settings::BotSettings;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Prefix for environment overrides, e.g. `AUTOFOLLOW__BOT__FOLLOW__FOLLOW_DISTANCE=4.5`.
pub const ENV_PREFIX: &str = "AUTOFOLLOW";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub bot: BotSettings,
    pub scheduler: SchedulerConfig,
    pub logging: LoggingConfig,
    /// JSON scenario for the simulated world. The binary falls back to a
    /// built-in scenario when unset.
    pub scenario: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    pub tick_interval_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Optional `fast_log` file, in addition to tracing output.
    pub file: Option<String>,
    pub buffer_capacity: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self { tick_interval_ms: 100 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            buffer_capacity: 256,
        }
    }
}

impl SchedulerConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Config {
    pub async fn from_file<P: AsRef<Path>>(path: P) -> ApplicationResult<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config =
            toml::from_str(&content).with_context(|| format!("Failed to parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Layers an optional TOML file under `AUTOFOLLOW__*` environment overrides.
    pub fn load<P: AsRef<Path>>(path: P) -> ApplicationResult<Self> {
        let config = Self::layered(path.as_ref()).context("Failed to load layered config")?;
        config.validate()?;
        Ok(config)
    }

    fn layered(path: &Path) -> Result<Self, ::config::ConfigError> {
        ::config::Config::builder()
            .add_source(::config::File::from(path).required(false))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    pub fn validate(&self) -> DomainResult<()> {
        let distance = self.bot.follow.follow_distance;
        if !distance.is_finite() || distance < 0.0 {
            return Err(DomainError::InvalidConfiguration {
                reason: format!("follow_distance must be a finite, non-negative number, got {}", distance),
            });
        }
        if self.scheduler.tick_interval_ms == 0 {
            return Err(DomainError::InvalidConfiguration {
                reason: "tick_interval_ms must be greater than zero".to_string(),
            });
        }
        if self.logging.buffer_capacity == 0 {
            return Err(DomainError::InvalidConfiguration {
                reason: "buffer_capacity must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
