//! Replay CLI command.
//!
//! Feeds a recorded list of window operations through a [`WindowStore`] and
//! prints the resulting state.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use super::types::ViewportSize;
use crate::config::WindowsConfig;
use crate::error::PixelpanesError;
use crate::modules::windows::{Reducer, StateSnapshot, WindowOp, WindowStore};

/// Arguments of the `replay` command.
#[derive(Args, Debug)]
#[command(after_long_help = r#"Examples:
  pixelpanes replay session.json
  pixelpanes replay session.json --seed 42
  pixelpanes replay session.json --viewport 1280x720"#)]
pub struct ReplayArgs {
    /// JSON file holding an array of window operations.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Seed for window id allocation, for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Reflow the windows into this viewport after replaying.
    #[arg(long, value_name = "WxH")]
    pub viewport: Option<ViewportSize>,
}

/// Execute the replay command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if any
/// operation fails.
pub fn execute(args: &ReplayArgs, config: WindowsConfig) -> Result<(), PixelpanesError> {
    let content = fs::read_to_string(&args.file).map_err(|e| {
        PixelpanesError::IoError(format!("Failed to read {}: {e}", args.file.display()))
    })?;
    let ops: Vec<WindowOp> = serde_json::from_str(&content)?;

    let snapshot = replay(ops, config, args.seed, args.viewport)?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

/// Replay `ops` on a fresh store and return the final snapshot.
///
/// # Errors
///
/// Returns `PixelpanesError::WindowError` naming the first operation that
/// failed.
pub fn replay(
    ops: Vec<WindowOp>,
    config: WindowsConfig,
    seed: Option<u64>,
    viewport: Option<ViewportSize>,
) -> Result<StateSnapshot, PixelpanesError> {
    let mut store = match seed {
        Some(seed) => WindowStore::new(Reducer::seeded(config, seed)),
        None => WindowStore::from_config(config),
    };

    let names: Vec<&'static str> = ops.iter().map(WindowOp::name).collect();
    let published = store.replay(ops).map_err(|(index, err)| {
        PixelpanesError::WindowError(format!(
            "operation #{index} ({}) failed: {err}",
            names.get(index).copied().unwrap_or("?")
        ))
    })?;
    tracing::debug!(operations = names.len(), published, "replayed operations");

    if let Some(size) = viewport {
        let viewport = size.viewport();
        store.dispatch(WindowOp::ViewportResize {
            width: viewport.width,
            height: viewport.height,
        })?;
    }

    Ok(store.state().snapshot())
}
