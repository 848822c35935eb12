//! Default tuning constants for the window container.
//!
//! These are the built-in values behind [`crate::config::WindowsConfig`].
//! A configuration file may override any of them.
//!
//! # Organization
//!
//! - `window_defaults` - Frame given to newly opened and restored windows
//! - `geometry` - Clamping bounds used by move, resize and reflow
//! - `ids` - Window identifier range

/// Frame assigned to a window when it is opened or restored.
pub mod window_defaults {
    /// Default window width in pixels.
    pub const WIDTH: i32 = 600;

    /// Default window height in pixels.
    pub const HEIGHT: i32 = 300;

    /// Default left edge in pixels.
    pub const X: i32 = 200;

    /// Default top edge in pixels.
    pub const Y: i32 = 200;
}

/// Bounds applied by the geometry engine.
pub mod geometry {
    /// Minimum window width. Also the horizontal strip of a window that must
    /// stay inside the viewport when it is dragged off the left edge.
    pub const MIN_WIDTH: i32 = 70;

    /// Minimum window height.
    pub const MIN_HEIGHT: i32 = 50;

    /// Distance from the right and bottom viewport edges that a window's
    /// top-left corner may not cross.
    pub const EDGE_MARGIN: i32 = 30;

    /// Offset applied to both axes when a window is cloned.
    pub const CLONE_OFFSET: i32 = 15;
}

/// Window identifier range.
pub mod ids {
    /// Largest identifier the allocator hands out. `0` is the modal.
    pub const MAX_WINDOW_ID: u32 = 99_999;
}

/// Environment variable holding the tracing filter for the binary.
pub const LOG_ENV_VAR: &str = "PIXELPANES_LOG";
