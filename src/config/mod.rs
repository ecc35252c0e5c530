use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_PURGE_COOLDOWN_SECS: u64 = 5 * 60;

#[derive(Debug, Deserialize, Clone)]
pub struct CacheConfig {
    #[serde(default = "default_purge_cooldown_secs")]
    pub purge_cooldown_secs: u64,
}

fn default_purge_cooldown_secs() -> u64 {
    DEFAULT_PURGE_COOLDOWN_SECS
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            purge_cooldown_secs: DEFAULT_PURGE_COOLDOWN_SECS,
        }
    }
}

impl CacheConfig {
    /// Loads configuration from an optional TOML file, with `PIXCACHE_*`
    /// environment variables layered on top.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("PIXCACHE"))
            .build()?
            .try_deserialize()
    }

    pub fn purge_cooldown(&self) -> Duration {
        Duration::from_secs(self.purge_cooldown_secs)
    }
}
