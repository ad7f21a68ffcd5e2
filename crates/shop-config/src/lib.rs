//! Configuration and file locations for shop-tui
//!
//! This crate provides:
//! - Platform directories for config, cache and log files
//! - Configuration file discovery (TOML)
//! - Application configuration (AppConfig)

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::AppConfig;
pub use config_file::load_config_file;
pub use paths::{app_config_path, cache_dir, config_dir, log_dir};
