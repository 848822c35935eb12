//! Error types for Pixelpanes.
//!
//! This module provides the unified error type returned by the CLI and other
//! application-level entry points. Window transitions have their own
//! [`WindowError`](crate::modules::windows::WindowError), which converts into
//! this one.

use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;
use crate::modules::windows::WindowError;

/// Errors that can occur during application execution.
///
/// Serializes as `{ "kind": ..., "message": ... }` for structured output.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum PixelpanesError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// A window operation failed.
    #[error("Window error: {0}")]
    WindowError(String),
    /// IO error.
    #[error("IO error: {0}")]
    IoError(String),
    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    JsonError(String),
}

impl From<std::io::Error> for PixelpanesError {
    fn from(err: std::io::Error) -> Self { Self::IoError(err.to_string()) }
}

impl From<serde_json::Error> for PixelpanesError {
    fn from(err: serde_json::Error) -> Self { Self::JsonError(err.to_string()) }
}

impl From<ConfigError> for PixelpanesError {
    fn from(err: ConfigError) -> Self { Self::ConfigError(err.to_string()) }
}

impl From<WindowError> for PixelpanesError {
    fn from(err: WindowError) -> Self { Self::WindowError(err.to_string()) }
}
