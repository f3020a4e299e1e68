//! Runtime configuration for the sketch window and view behaviour.
//!
//! Configuration is optional. When the `SHAPE_SKETCH_CONFIG` environment
//! variable names a JSON file its fields override the defaults; any field the
//! file leaves out keeps its default value.

use crate::constants::{
    DEFAULT_GRID_SPACING, DEFAULT_SCALE, DEFAULT_WINDOW_SIZE, MAX_SCALE, MIN_SCALE,
    ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable holding the path of a JSON configuration file.
pub const CONFIG_ENV_VAR: &str = "SHAPE_SKETCH_CONFIG";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid JSON for [`SketchConfig`]
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A value is out of range
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Settings for the sketch application.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Initial window width in logical points
    pub window_width: f32,
    /// Initial window height in logical points
    pub window_height: f32,
    /// Initial pixels per world unit
    pub initial_scale: f32,
    /// Grid interval in world units; the cursor snaps to it
    pub grid_spacing: f32,
    /// Scale multiplier per frame while zooming in
    pub zoom_in_factor: f32,
    /// Scale multiplier per frame while zooming out
    pub zoom_out_factor: f32,
    /// Whether grid dots and axes are drawn
    pub show_grid: bool,
    /// Whether the key binding overlay is drawn
    pub show_help: bool,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_SIZE.0,
            window_height: DEFAULT_WINDOW_SIZE.1,
            initial_scale: DEFAULT_SCALE,
            grid_spacing: DEFAULT_GRID_SPACING,
            zoom_in_factor: ZOOM_IN_FACTOR,
            zoom_out_factor: ZOOM_OUT_FACTOR,
            show_grid: true,
            show_help: true,
        }
    }
}

impl SketchConfig {
    /// Loads configuration from the file named by [`CONFIG_ENV_VAR`], or
    /// returns the defaults when the variable is unset.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    /// Reads and validates a JSON configuration file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Parses and validates configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "window size must be positive, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        if !(MIN_SCALE..=MAX_SCALE).contains(&self.initial_scale) {
            return Err(ConfigError::Invalid(format!(
                "initial_scale must be between {MIN_SCALE} and {MAX_SCALE}, got {}",
                self.initial_scale
            )));
        }
        if !(self.grid_spacing > 0.0 && self.grid_spacing.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "grid_spacing must be positive, got {}",
                self.grid_spacing
            )));
        }
        if !(self.zoom_in_factor > 1.0 && self.zoom_in_factor.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "zoom_in_factor must be greater than 1, got {}",
                self.zoom_in_factor
            )));
        }
        if !(self.zoom_out_factor > 0.0 && self.zoom_out_factor < 1.0) {
            return Err(ConfigError::Invalid(format!(
                "zoom_out_factor must be between 0 and 1, got {}",
                self.zoom_out_factor
            )));
        }
        Ok(())
    }
}
