//! Configuration for the annotation editor
//!
//! Supports JSON and TOML files, chosen by extension. Configuration is
//! organized into sections:
//! - Drawing defaults (stroke color, thickness, fill mode)
//! - Display preferences (fill and label opacity, outlines, halos)
//! - History (undo depth cap)

use std::path::{Path, PathBuf};

use anatomark_core::Rgba;
use anatomark_designer::{RenderOptions, ToolSettings};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult, SettingsResult};

/// File name used inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Drawing defaults applied to new shapes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingSettings {
    /// Stroke color for new shapes
    pub color: Rgba,
    /// Stroke thickness in pixels
    pub thickness: f64,
    /// Start in automatic fill mode
    pub fill_mode_auto: bool,
}

impl Default for DrawingSettings {
    fn default() -> Self {
        let tools = ToolSettings::default();
        Self {
            color: tools.color,
            thickness: tools.thickness,
            fill_mode_auto: tools.fill_mode_auto,
        }
    }
}

/// Display preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub fill_opacity: f64,
    /// Opacity of diagnosis labels
    pub label_opacity: f64,
    pub show_outlines: bool,
    /// Draw halos around the selection
    pub show_halo: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        let options = RenderOptions::default();
        Self {
            fill_opacity: options.fill_opacity,
            label_opacity: options.label_opacity,
            show_outlines: options.show_outlines,
            show_halo: options.show_halo,
        }
    }
}

/// Undo history settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum undo depth; 0 keeps every entry
    pub depth: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self { depth: 100 }
    }
}

/// Complete editor configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub drawing: DrawingSettings,
    pub display: DisplaySettings,
    pub history: HistorySettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> ConfigResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

fn check_unit(key: &str, value: f64) -> ConfigResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML), creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.drawing.thickness > 0.0 && self.drawing.thickness.is_finite()) {
            return Err(ConfigError::ValueOutOfRange {
                key: "drawing.thickness".to_string(),
                value: self.drawing.thickness.to_string(),
            });
        }
        check_unit("display.fill_opacity", self.display.fill_opacity)?;
        check_unit("display.label_opacity", self.display.label_opacity)?;
        Ok(())
    }

    pub fn tool_settings(&self) -> ToolSettings {
        ToolSettings {
            color: self.drawing.color,
            thickness: self.drawing.thickness,
            fill_mode_auto: self.drawing.fill_mode_auto,
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            fill_opacity: self.display.fill_opacity,
            label_opacity: self.display.label_opacity,
            show_outlines: self.display.show_outlines,
            show_halo: self.display.show_halo,
        }
    }
}

/// Platform config directory for the editor, e.g. `~/.config/anatomark`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("anatomark"))
}

/// Default location of the config file.
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}
