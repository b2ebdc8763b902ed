//! Configuration management for the Stride engine
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: STRIDE__)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use stride_shared::DEFAULT_DAILY_GOAL;

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub storage: StorageConfig,
    pub tracker: TrackerConfig,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON store file
    pub path: String,
}

/// Tracker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Daily step goal used until the user saves their own
    pub default_daily_goal: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                path: "stride-data.json".to_string(),
            },
            tracker: TrackerConfig {
                default_daily_goal: DEFAULT_DAILY_GOAL,
            },
        }
    }
}

impl EngineConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with STRIDE__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&EngineConfig::default())?)
            // Load from environment-specific config file
            .add_source(config::File::with_name(&config_file).required(false))
            // Override with environment variables (STRIDE__ prefix)
            // e.g., STRIDE__STORAGE__PATH=/tmp/stride.json sets storage.path
            .add_source(config::Environment::with_prefix("STRIDE").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}
