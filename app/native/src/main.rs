#![allow(clippy::multiple_crate_versions)]

//! Pixelpanes CLI.
//!
//! Replays window operations, prints the configuration schema and resolves
//! server settings. Logs go to stderr, filtered by `PIXELPANES_LOG`.

fn main() {
    pixelpanes_lib::init_tracing();

    if let Err(err) = pixelpanes_lib::cli::run() {
        eprintln!("pixelpanes: {err}");
        std::process::exit(1);
    }
}
