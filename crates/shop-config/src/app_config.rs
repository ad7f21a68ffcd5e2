//! Application configuration
//!
//! Configuration loaded from `.shop-tui.toml` (see [`crate::load_config_file`]).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Product catalog (TOML). The built-in catalog is used when unset.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Tab shown at startup: "state", "store" or "connected"
    #[serde(default = "default_initial_view")]
    pub initial_view: String,

    /// Artificial latency of the product fetch, in milliseconds
    #[serde(default = "default_fetch_delay_ms")]
    pub fetch_delay_ms: u64,

    /// Event poll interval of the render loop, in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Log level when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_initial_view() -> String {
    "state".to_string()
}

fn default_fetch_delay_ms() -> u64 {
    300
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_log_level() -> String {
    "debug".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            initial_view: default_initial_view(),
            fetch_delay_ms: default_fetch_delay_ms(),
            tick_rate_ms: default_tick_rate_ms(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load config from the first config file found, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}
