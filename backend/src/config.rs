//! Configuration management for the AGROMET_RCI server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with AGROMET_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

use crate::services::session::DEFAULT_IDLE_TIMEOUT;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Synthetic data generator configuration
    pub generator: GeneratorConfig,

    /// Dashboard session configuration
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeneratorConfig {
    /// Seed of every generated series
    pub seed: u64,

    /// Days shown by the daily weather bulletin
    pub default_days: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// Seconds of inactivity before a session is dropped
    pub idle_timeout_secs: u64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("AGROMET_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("generator.seed", shared::generator::DEFAULT_SEED as i64)?
            .set_default("generator.default_days", i64::from(shared::generator::DEFAULT_DAYS))?
            .set_default(
                "session.idle_timeout_secs",
                DEFAULT_IDLE_TIMEOUT.as_secs() as i64,
            )?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AGROMET_ prefix)
            .add_source(
                Environment::with_prefix("AGROMET")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            generator: GeneratorConfig::default(),
            session: SessionConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: shared::generator::DEFAULT_SEED,
            default_days: shared::generator::DEFAULT_DAYS,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout_secs: DEFAULT_IDLE_TIMEOUT.as_secs(),
        }
    }
}
