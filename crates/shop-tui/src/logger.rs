//! File-based logging using simplelog
//!
//! Log file location depends on build type:
//! - Debug builds: current working directory (for development convenience)
//! - Release builds: log directory (~/.cache/shop-tui/logs/ on Linux)
//!
//! The terminal belongs to the UI, so nothing is logged to stdout/stderr.

use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

fn log_file_path() -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let filename = format!("shop-tui-{}.log", timestamp);

    if cfg!(debug_assertions) {
        PathBuf::from(filename)
    } else {
        shop_config::log_dir()
            .map(|dir| dir.join(&filename))
            .unwrap_or_else(|_| PathBuf::from(filename))
    }
}

/// Level from `RUST_LOG`, else the configured one
fn resolve_level(env: Option<&str>, configured: &str) -> LevelFilter {
    parse_level(env.unwrap_or(configured))
        .or_else(|| parse_level(configured))
        .unwrap_or(LevelFilter::Debug)
}

fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.trim().to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

/// Level the logger is installed with. Without `RUST_LOG` it stays open
/// to everything so the configured level can still raise the filter.
fn installed_level(env: Option<&str>) -> LevelFilter {
    env.and_then(parse_level).unwrap_or(LevelFilter::Trace)
}

/// Initialize file-based logging
///
/// Runs before the config is loaded, so config discovery is logged too.
/// Until [`apply_config_level`] runs the filter is `RUST_LOG`, else debug.
/// Returns the path of the log file.
pub fn init(env: Option<&str>) -> Result<PathBuf> {
    let log_file = log_file_path();

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c) // Fallback if local time offset fails
        .build();

    let file = File::create(&log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    WriteLogger::init(installed_level(env), config, file).context("Failed to initialize logger")?;
    log::set_max_level(resolve_level(env, "debug"));

    Ok(log_file)
}

/// Switch to the configured level unless `RUST_LOG` overrides it
pub fn apply_config_level(env: Option<&str>, configured: &str) -> LevelFilter {
    let level = resolve_level(env, configured);
    log::set_max_level(level);
    level
}
