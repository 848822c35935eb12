//! Configuration module for Pixelpanes.
//!
//! This module provides configuration types and loading functionality.
//!
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.

pub mod env;
pub mod types;

use std::path::PathBuf;
use std::sync::OnceLock;

pub use types::{
    ConfigError, PixelpanesConfig, RendererConfig, WindowsConfig, config_paths,
    load_config as load_config_default, load_config_from_path,
};

/// Global configuration instance, loaded once at startup.
static CONFIG: OnceLock<PixelpanesConfig> = OnceLock::new();

/// Path to the currently loaded configuration file.
static CONFIG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Custom config path override (set via CLI --config flag).
static CUSTOM_CONFIG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Sets a custom configuration file path to use instead of the default search paths.
///
/// This must be called before `get_config()` to take effect.
///
/// # Returns
///
/// `true` if the path was set successfully, `false` if a path was already set.
pub fn set_custom_config_path(path: PathBuf) -> bool { CUSTOM_CONFIG_PATH.set(path).is_ok() }

/// Loads the configuration from disk, falling back to defaults.
fn load_or_default() -> PixelpanesConfig {
    let result = CUSTOM_CONFIG_PATH
        .get()
        .map_or_else(load_config_default, |path| load_config_from_path(path));

    match result {
        Ok((config, path)) => {
            tracing::debug!(path = %path.display(), "loaded configuration");
            let _ = CONFIG_PATH.set(path);
            config
        }
        Err(ConfigError::NotFound) => {
            tracing::debug!("no configuration file found, using defaults");
            PixelpanesConfig::default()
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to load configuration, using defaults");
            PixelpanesConfig::default()
        }
    }
}

/// Returns the global configuration instance, loading it on first use.
///
/// Every call returns the same instance.
pub fn get_config() -> &'static PixelpanesConfig { CONFIG.get_or_init(load_or_default) }

/// Returns the path to the loaded configuration file, if any.
pub fn get_config_path() -> Option<&'static PathBuf> { CONFIG_PATH.get() }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = ConfigError::NotFound;
        assert!(err.to_string().contains("No configuration file found"));
    }

    #[test]
    fn test_get_config_is_stable() {
        let first: *const PixelpanesConfig = get_config();
        let second: *const PixelpanesConfig = get_config();
        assert_eq!(first, second);
    }

    #[test]
    fn test_config_path_is_set_only_for_existing_file() {
        let _ = get_config();
        if let Some(path) = get_config_path() {
            assert!(path.exists());
        }
    }
}
