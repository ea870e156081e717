//! Configuration and settings management for DragDrop
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats stored in the platform config directory.
//!
//! Configuration is organized into logical sections:
//! - Layout constants shared by hit-testing and rendering
//! - Gesture recognition (touch slop)
//! - Highlight animation timing

use dragdrop_core::{ConfigError, Error, Result, ShapeLayout};
use dragdrop_designer::HighlightTiming;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Shape layout settings, in logical pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Side of the square hit-test box
    pub shape_box_size: f64,
    /// Side of the visual shape, centered in its box
    pub shape_size: f64,
    /// Outline stroke width
    pub outline_width: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            shape_box_size: 48.0,
            shape_size: 36.0,
            outline_width: 3.0,
        }
    }
}

/// Gesture recognition settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureSettings {
    /// Movement past which a press becomes a drag
    pub touch_slop: f64,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self { touch_slop: 8.0 }
    }
}

/// Highlight blink settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightSettings {
    /// Number of blinks
    pub pulse_count: u32,
    /// Length of each on and off phase in milliseconds
    pub pulse_ms: u64,
}

impl Default for HighlightSettings {
    fn default() -> Self {
        Self {
            pulse_count: 3,
            pulse_ms: 200,
        }
    }
}

/// Complete editor configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub layout: LayoutSettings,
    pub gestures: GestureSettings,
    pub highlight: HighlightSettings,
}

impl EditorConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a `.json` or `.toml` file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
                format: "json",
                reason: e.to_string(),
            })?,
            Format::Toml => toml::from_str(&content).map_err(|e| ConfigError::Parse {
                format: "toml",
                reason: e.to_string(),
            })?,
        };

        config.validate()?;
        tracing::info!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Load configuration from `path` if it exists, otherwise use defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save configuration to a `.json` or `.toml` file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse {
                format: "json",
                reason: e.to_string(),
            })?,
            Format::Toml => toml::to_string_pretty(self).map_err(|e| ConfigError::Parse {
                format: "toml",
                reason: e.to_string(),
            })?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let layout = &self.layout;
        if !(layout.shape_box_size.is_finite() && layout.shape_box_size > 0.0) {
            return Err(invalid("layout.shape_box_size", "must be > 0"));
        }
        if !(layout.shape_size > 0.0 && layout.shape_size <= layout.shape_box_size) {
            return Err(invalid(
                "layout.shape_size",
                "must be > 0 and no larger than layout.shape_box_size",
            ));
        }
        if !(layout.outline_width.is_finite() && layout.outline_width >= 0.0) {
            return Err(invalid("layout.outline_width", "must be >= 0"));
        }
        if !(self.gestures.touch_slop.is_finite() && self.gestures.touch_slop >= 0.0) {
            return Err(invalid("gestures.touch_slop", "must be >= 0"));
        }
        if self.highlight.pulse_count == 0 {
            return Err(invalid("highlight.pulse_count", "must be >= 1"));
        }
        if self.highlight.pulse_ms == 0 {
            return Err(invalid("highlight.pulse_ms", "must be > 0"));
        }
        Ok(())
    }

    /// Layout shared by hit-testing and rendering
    pub fn shape_layout(&self) -> Result<ShapeLayout> {
        Ok(ShapeLayout::new(
            self.layout.shape_box_size,
            self.layout.shape_size,
            self.layout.outline_width,
        )?)
    }

    /// Blink timing for the highlight animator
    pub fn highlight_timing(&self) -> HighlightTiming {
        HighlightTiming {
            pulses: self.highlight.pulse_count,
            interval: Duration::from_millis(self.highlight.pulse_ms),
        }
    }

    /// Default config file location in the platform config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dragdrop").join("config.toml"))
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> std::result::Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(ConfigError::UnsupportedFormat {
                extension: other.unwrap_or("").to_string(),
            }),
        }
    }
}

fn invalid(setting: &str, reason: &str) -> Error {
    ConfigError::Invalid {
        setting: setting.to_string(),
        reason: reason.to_string(),
    }
    .into()
}
