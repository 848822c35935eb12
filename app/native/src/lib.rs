//! Pixelpanes - window and modal state container for a single-page canvas
//! client.
//!
//! The core is [`modules::windows`]: an immutable snapshot of every floating
//! window plus one full-screen modal, and a reducer that derives the next
//! snapshot from a serialized [`WindowOp`](modules::windows::WindowOp). The
//! library also provides the canvas renderer host, the configuration layer
//! and the CLI.

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod modules;
pub mod schema;

use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber, writing to stderr.
///
/// The filter is read from `PIXELPANES_LOG` and defaults to `warn`.
/// Calling this more than once keeps the first subscriber.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(constants::LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
