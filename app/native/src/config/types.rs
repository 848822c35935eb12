//! Configuration types for Pixelpanes.
//!
//! This module provides the configuration types and loading functionality.
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.

use std::fs;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{geometry, ids, window_defaults};
use crate::modules::windows::Frame;

/// Geometry and identifier settings for the window container.
///
/// Every bound the move, resize and reflow transitions apply is read from
/// here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct WindowsConfig {
    /// Width of a newly opened or restored window, in pixels.
    /// Default: 600
    #[schemars(range(min = 1))]
    pub default_width: i32,

    /// Height of a newly opened or restored window, in pixels.
    /// Default: 300
    #[schemars(range(min = 1))]
    pub default_height: i32,

    /// Left edge of a newly opened or restored window, in pixels.
    /// Default: 200
    pub default_x: i32,

    /// Top edge of a newly opened or restored window, in pixels.
    /// Default: 200
    pub default_y: i32,

    /// Minimum window width. Also the strip that stays visible when a
    /// window is dragged past the left edge.
    /// Default: 70
    #[schemars(range(min = 1))]
    pub min_width: i32,

    /// Minimum window height.
    /// Default: 50
    #[schemars(range(min = 1))]
    pub min_height: i32,

    /// Closest distance of a window's top-left corner to the right and
    /// bottom viewport edges.
    /// Default: 30
    pub edge_margin: i32,

    /// Offset of a cloned window from its original, on both axes.
    /// Default: 15
    pub clone_offset: i32,

    /// Largest window identifier the allocator hands out.
    /// Default: 99999
    pub max_window_id: u32,
}

impl Default for WindowsConfig {
    fn default() -> Self {
        Self {
            default_width: window_defaults::WIDTH,
            default_height: window_defaults::HEIGHT,
            default_x: window_defaults::X,
            default_y: window_defaults::Y,
            min_width: geometry::MIN_WIDTH,
            min_height: geometry::MIN_HEIGHT,
            edge_margin: geometry::EDGE_MARGIN,
            clone_offset: geometry::CLONE_OFFSET,
            max_window_id: ids::MAX_WINDOW_ID,
        }
    }
}

impl WindowsConfig {
    /// Checks that every window dimension is at least one pixel.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dimensions = [
            ("windows.defaultWidth", self.default_width),
            ("windows.defaultHeight", self.default_height),
            ("windows.minWidth", self.min_width),
            ("windows.minHeight", self.min_height),
        ];
        match dimensions.into_iter().find(|&(_, value)| value < 1) {
            Some((field, value)) => Err(ConfigError::Invalid { field, value }),
            None => Ok(()),
        }
    }

    /// Frame given to newly opened and restored windows.
    #[must_use]
    pub const fn default_frame(&self) -> Frame {
        Frame::new(self.default_x, self.default_y, self.default_width, self.default_height)
    }
}

/// Canvas renderer preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct RendererConfig {
    /// Start with the 3D canvas renderer. Falls back to no rendering (with
    /// an alert) when WebGL2 is unavailable.
    /// Default: false
    pub prefer3d: bool,
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PixelpanesConfig {
    /// Window geometry and identifier settings.
    pub windows: WindowsConfig,

    /// Canvas renderer preferences.
    pub renderer: RendererConfig,
}

/// Errors that can occur when loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration file was found in any of the expected locations.
    #[error(
        "No configuration file found. Expected at $XDG_CONFIG_HOME/pixelpanes/config.jsonc \
         or ~/.config/pixelpanes/config.jsonc"
    )]
    NotFound,

    /// The configuration file exists but could not be read.
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file contains invalid JSON.
    #[error("Failed to parse configuration file: {0}")]
    Parse(#[from] serde_json::Error),

    /// A window dimension is below one pixel.
    #[error("Invalid configuration: {field} must be at least 1, got {value}")]
    Invalid { field: &'static str, value: i32 },
}

/// Name of the configuration directory.
const CONFIG_DIR_NAME: &str = "pixelpanes";

/// Configuration file names to search for (in priority order).
const CONFIG_FILE_NAMES: &[&str] = &["config.jsonc", "config.json"];

/// Returns the possible configuration file paths in priority order.
///
/// If `$XDG_CONFIG_HOME` is set, `$XDG_CONFIG_HOME/pixelpanes/` is checked
/// before `~/.config/pixelpanes/`.
#[must_use]
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        let dir = PathBuf::from(xdg_config).join(CONFIG_DIR_NAME);
        for filename in CONFIG_FILE_NAMES {
            paths.push(dir.join(filename));
        }
    }

    if let Some(home) = dirs::home_dir() {
        let dir = home.join(".config").join(CONFIG_DIR_NAME);
        for filename in CONFIG_FILE_NAMES {
            let path = dir.join(filename);
            // XDG_CONFIG_HOME might be ~/.config
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }

    paths
}

/// Loads the configuration from the first available config file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if no configuration file exists in any of
/// the expected locations, or the error of [`load_config_from_path`].
pub fn load_config() -> Result<(PixelpanesConfig, PathBuf), ConfigError> {
    config_paths()
        .into_iter()
        .find(|path| path.exists())
        .map_or(Err(ConfigError::NotFound), |path| load_config_from_path(&path))
}

/// Loads the configuration from a specific file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file does not exist,
/// `ConfigError::Io` if it could not be read, `ConfigError::Parse` if it
/// is not valid JSONC and `ConfigError::Invalid` if a window dimension is
/// below one pixel.
pub fn load_config_from_path(path: &Path) -> Result<(PixelpanesConfig, PathBuf), ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound);
    }

    let file = fs::File::open(path)?;
    let reader = json_comments::StripComments::new(file);
    let config: PixelpanesConfig = serde_json::from_reader(reader)?;
    config.windows.validate()?;
    Ok((config, path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_default_windows_config() {
        let config = WindowsConfig::default();
        assert_eq!(config.default_frame(), Frame::new(200, 200, 600, 300));
        assert_eq!((config.min_width, config.min_height), (70, 50));
        assert_eq!(config.edge_margin, 30);
        assert_eq!(config.clone_offset, 15);
        assert_eq!(config.max_window_id, 99_999);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let json = r#"{ "windows": { "minWidth": 100 }, "renderer": { "prefer3d": true } }"#;
        let config: PixelpanesConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.windows.min_width, 100);
        assert_eq!(config.windows.min_height, 50);
        assert!(config.renderer.prefer3d);
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: PixelpanesConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PixelpanesConfig::default());
    }

    #[test]
    fn test_load_config_from_path_with_comments() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.jsonc");

        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "{{").unwrap();
        writeln!(file, "  // smaller windows").unwrap();
        writeln!(file, r#"  "windows": {{ "defaultWidth": 400 /* px */ }}"#).unwrap();
        writeln!(file, "}}").unwrap();

        let (config, loaded_from) = load_config_from_path(&path).unwrap();
        assert_eq!(config.windows.default_width, 400);
        assert_eq!(loaded_from, path);
    }

    #[test]
    fn test_load_config_from_missing_path() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_config_from_path(&temp_dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::NotFound)));
    }

    #[test]
    fn test_load_config_from_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let result = load_config_from_path(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_rejects_zero_min_width() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{ "windows": { "minWidth": 0 } }"#).unwrap();

        let result = load_config_from_path(&path);
        assert!(matches!(
            result,
            Err(ConfigError::Invalid { field: "windows.minWidth", value: 0 })
        ));
    }

    #[test]
    fn test_validate_rejects_negative_default_height() {
        let config = WindowsConfig { default_height: -300, ..WindowsConfig::default() };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("windows.defaultHeight"));
        assert!(WindowsConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_paths_end_with_file_names() {
        for path in config_paths() {
            let name = path.file_name().and_then(|n| n.to_str()).unwrap();
            assert!(CONFIG_FILE_NAMES.contains(&name));
        }
    }

    #[test]
    fn test_config_error_message() {
        assert!(ConfigError::NotFound.to_string().contains("No configuration file found"));
    }
}
