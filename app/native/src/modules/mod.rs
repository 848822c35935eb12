//! Application feature modules for Pixelpanes.
//!
//! - [`renderer`] - Canvas renderer host and backend switching
//! - [`windows`] - Window and modal state machine (reducer architecture)

pub mod renderer;
pub mod windows;
