//! Anatomark Settings Crate
//!
//! Handles editor configuration and its persistence.

pub mod config;
pub mod error;

pub use config::{
    config_dir, default_config_path, Config, DisplaySettings, DrawingSettings, HistorySettings,
    CONFIG_FILE_NAME,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
