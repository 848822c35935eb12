//! Canvas renderer host.
//!
//! The canvas is drawn by one active [`Renderer`] at a time: a 2D backend, a
//! 3D (voxel) backend that needs WebGL2, or the [`NullRenderer`] placeholder.
//! [`RendererHost`] owns the active backend and swaps it on request.

mod host;

use serde::{Deserialize, Serialize};

pub use host::{RendererBackends, RendererHost, RendererSwitch};

/// A canvas rendering backend.
pub trait Renderer {
    /// `Some(true)` for 3D backends, `Some(false)` for 2D, `None` for the
    /// placeholder.
    fn is_3d(&self) -> Option<bool>;

    /// Draw one frame.
    fn render(&mut self);

    /// Paint a single pixel with a palette color index.
    fn render_pixel(&mut self, x: i32, y: i32, color: u8);

    /// Reload the data of another canvas.
    fn update_canvas_data(&mut self, canvas_id: &str);

    /// Release the backend's resources. The host calls this exactly once,
    /// right before replacing the backend.
    fn destroy(&mut self);
}

/// Placeholder backend installed before initialization and after a failed
/// switch. Every call is a no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn is_3d(&self) -> Option<bool> { None }

    fn render(&mut self) {}

    fn render_pixel(&mut self, _x: i32, _y: i32, _color: u8) {}

    fn update_canvas_data(&mut self, _canvas_id: &str) {}

    fn destroy(&mut self) {}
}

/// Severity of a user-facing alert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Error,
}

/// A dialog the UI should show.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub level: AlertLevel,
    pub button: String,
}

impl Alert {
    /// Alert shown when a 3D canvas is requested but WebGL2 is unavailable.
    #[must_use]
    pub fn webgl2_unavailable() -> Self {
        Self {
            title: "Canvas Error".to_string(),
            message: "Can't render 3D canvas, do you have WebGL2 disabled?".to_string(),
            level: AlertLevel::Error,
            button: "OK".to_string(),
        }
    }
}
