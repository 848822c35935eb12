//! State module for the window container.
//!
//! This module contains:
//! - Core types (`WindowId`, `Frame`, `Viewport`, `Payload`, `Window`)
//! - The UI views (`ModalState`, `WindowRecord`, `StateSnapshot`)
//! - The `WindowsState` snapshot type

mod types;
mod windows_state;

pub use types::{
    ChannelId, Frame, ModalState, Payload, Viewport, Window, WindowId, WindowKind, WindowRecord,
};
pub use windows_state::{StateSnapshot, WindowsState};
