//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/shop-tui/`, `~/.cache/shop-tui/`
//! - macOS: `~/Library/Application Support/shop-tui/`, `~/Library/Caches/shop-tui/`
//! - Windows: `%APPDATA%\shop-tui\`, `%LOCALAPPDATA%\shop-tui\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "shop-tui";

/// Get the application config directory, creating it if needed
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    Ok(dir)
}

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    Ok(dir)
}

/// Directory for log files in release builds
pub fn log_dir() -> Result<PathBuf> {
    let dir = cache_dir()?.join("logs");
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    Ok(dir)
}

/// Get path to app config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}
