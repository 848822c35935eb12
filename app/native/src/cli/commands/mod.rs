//! CLI command definitions using Clap.
//!
//! This module defines all CLI commands and their arguments, organized into
//! domain-specific submodules:
//!
//! - `replay` - Replay recorded window operations
//! - `types` - Shared types used across commands

use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};

use crate::config::env::ServerConfig;
use crate::error::PixelpanesError;
use crate::{config, schema};

pub mod replay;
pub mod types;

pub use replay::ReplayArgs;

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Pixelpanes CLI - inspect and replay the window state machine.
#[derive(Parser, Debug)]
#[command(name = "pixelpanes")]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a custom configuration file.
    ///
    /// Overrides the default configuration file search paths.
    /// Supports JSONC format (JSON with comments).
    #[arg(long, short, global = true, value_name = "PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum Commands {
    /// Replay window operations and print the resulting state.
    ///
    /// Reads a JSON array of operations (`OPEN_WINDOW`, `MOVE_WINDOW`, ...),
    /// applies them in order and prints the final `{ modal, windows, args }`
    /// snapshot. Stops with an error at the first failing operation.
    Replay(ReplayArgs),

    /// Output Pixelpanes configuration JSON Schema.
    ///
    /// Outputs a JSON Schema to stdout that describes the structure of the
    /// configuration file. Can be redirected to a file for use with
    /// editors that support JSON Schema validation.
    Schema,

    /// Print the resolved server settings.
    ///
    /// Reads the process environment, optionally merged with a `.env` file,
    /// and prints the settings the server would run with.
    ServerConfig {
        /// Path to a `.env` file. Process environment variables take precedence.
        #[arg(long, value_name = "PATH")]
        env_file: Option<PathBuf>,
    },

    /// Generate shell completions.
    ///
    /// Outputs shell completion script to stdout for the specified shell.
    ///
    /// Usage:
    ///   eval "$(pixelpanes completions --shell zsh)"
    ///   pixelpanes completions --shell fish > ~/.config/fish/completions/pixelpanes.fish
    Completions {
        /// The shell to generate completions for.
        #[arg(long, short, value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Returns the custom config path if specified via --config flag.
    #[must_use]
    pub fn config_path(&self) -> Option<PathBuf> { self.config.as_ref().map(PathBuf::from) }

    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command execution fails.
    pub fn execute(&self) -> Result<(), PixelpanesError> {
        if let Some(path_buf) = self.config_path() {
            if !path_buf.exists() {
                return Err(PixelpanesError::ConfigError(format!(
                    "Configuration file not found: {}",
                    path_buf.display()
                )));
            }
            config::set_custom_config_path(path_buf);
        }

        match &self.command {
            Commands::Replay(args) => {
                let windows = config::get_config().windows;
                match config::get_config_path() {
                    Some(path) => tracing::info!(path = %path.display(), "using configuration file"),
                    None => tracing::info!("using default configuration"),
                }
                replay::execute(args, windows)
            }

            Commands::Schema => {
                println!("{}", schema::print_schema());
                Ok(())
            }

            Commands::ServerConfig { env_file } => {
                let server = ServerConfig::load(env_file.as_deref());
                println!("{}", serde_json::to_string_pretty(&server)?);
                Ok(())
            }

            Commands::Completions { shell } => {
                Self::print_completions(*shell);
                Ok(())
            }
        }
    }

    /// Print shell completions to stdout.
    fn print_completions<G: Generator>(generator: G) {
        let mut cmd = Self::command();
        generate(generator, &mut cmd, "pixelpanes", &mut io::stdout());
    }
}
