use std::path::Path;

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adapters::github::GitHubConfig;
use crate::adapters::summary::SummarizerConfig;
use crate::services::lookup::{DEFAULT_SUMMARY_TIMEOUT_SECS, DEFAULT_TTL_HOURS};

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port: 0 is not a usable listen port")]
    InvalidPort,

    #[error("Invalid cache ttl_hours: {0}. Must be at least 1")]
    InvalidTtl(i64),

    #[error("Invalid max_connections: {0}. Must be at least 1")]
    InvalidMaxConnections(u32),

    #[error("Invalid timeout: {0} seconds. Must be at least 1")]
    InvalidTimeout(u64),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite URL, e.g. `sqlite:gitbrief.db`. Absent disables caching.
    pub url: Option<String>,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Read-time expiry for cached records.
    pub ttl_hours: i64,
    /// Budget for a single summary generation attempt.
    pub summary_timeout_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_hours: DEFAULT_TTL_HOURS,
            summary_timeout_secs: DEFAULT_SUMMARY_TIMEOUT_SECS,
        }
    }
}

/// Top-level service configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
    pub github: GitHubConfig,
    pub summarizer: SummarizerConfig,
}

/// Configuration loader with hierarchical merging.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging.
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. gitbrief.yaml (or the file passed on the command line)
    /// 3. Environment variables (GITBRIEF_* prefix)
    /// 4. Plain deployment variables: HF_TOKEN, DATABASE_URL
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let file = path.unwrap_or_else(|| Path::new("gitbrief.yaml"));

        let mut config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(file))
            .merge(Env::prefixed("GITBRIEF_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        // The original deployment configured these through bare variables;
        // keep honoring them under the prefixed scheme.
        if config.summarizer.api_token.is_none() {
            config.summarizer.api_token = non_empty_env("HF_TOKEN");
        }
        if config.database.url.is_none() {
            config.database.url = non_empty_env("DATABASE_URL");
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.server.port == 0 {
            return Err(ConfigError::InvalidPort);
        }
        if config.cache.ttl_hours < 1 {
            return Err(ConfigError::InvalidTtl(config.cache.ttl_hours));
        }
        if config.database.max_connections == 0 {
            return Err(ConfigError::InvalidMaxConnections(
                config.database.max_connections,
            ));
        }
        for timeout in [
            config.cache.summary_timeout_secs,
            config.github.timeout_secs,
            config.summarizer.timeout_secs,
        ] {
            if timeout == 0 {
                return Err(ConfigError::InvalidTimeout(timeout));
            }
        }
        Ok(())
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
