// src/config.rs

//! Manages interceptor configuration: loading, defaults, and validation.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;

/// How the async entry point behaves when the wrapped invoker has no
/// asynchronous capability.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AsyncMode {
    /// Fail fast with `AsyncUnsupported` before any work is done.
    #[default]
    Strict,
    /// Silently run the synchronous path and return its result.
    SyncFallback,
}

/// Configuration for the built-in fallback handler.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FallbackConfig {
    /// The status code of the built-in fallback response.
    #[serde(default = "default_fallback_status")]
    pub status: u16,
    /// The leading text of the built-in fallback response body; the request
    /// line is appended to it.
    #[serde(default = "default_fallback_body")]
    pub body: String,
}

fn default_fallback_status() -> u16 {
    404
}
fn default_fallback_body() -> String {
    "404 Not Found".to_string()
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            status: default_fallback_status(),
            body: default_fallback_body(),
        }
    }
}

/// The top-level configuration for an interceptor.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub async_mode: AsyncMode,
    #[serde(default)]
    pub fallback: FallbackConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            async_mode: AsyncMode::default(),
            fallback: FallbackConfig::default(),
        }
    }
}

impl Config {
    /// Creates a new `Config` instance by reading and parsing a TOML file.
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at '{path}'"))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse TOML from '{path}'"))?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(100..=599).contains(&self.fallback.status) {
            bail!(
                "fallback.status must be a valid HTTP status code (100-599), got {}",
                self.fallback.status
            );
        }
        if self.log_level.is_empty() {
            bail!("log_level must not be empty");
        }
        Ok(())
    }
}
