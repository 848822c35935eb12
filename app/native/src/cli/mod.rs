//! CLI module for Pixelpanes.
//!
//! This module provides the command-line interface for replaying window
//! operations and inspecting configuration.

mod commands;

use clap::Parser;
pub use commands::Cli;

use crate::error::PixelpanesError;

/// Runs the CLI.
///
/// Parses command-line arguments and executes the appropriate command.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn run() -> Result<(), PixelpanesError> {
    let cli = Cli::parse();
    cli.execute()
}
