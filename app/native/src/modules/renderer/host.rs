//! Backend switching and the animation-loop tick.

use super::{Alert, NullRenderer, Renderer};
use crate::config::RendererConfig;

/// Factory for the real backends, provided by the embedding client.
pub trait RendererBackends {
    /// Whether the host supports WebGL2.
    fn webgl2_available(&self) -> bool;

    /// Build a 2D backend.
    fn create_2d(&mut self) -> Box<dyn Renderer>;

    /// Build a 3D backend. Only called when WebGL2 is available.
    fn create_3d(&mut self) -> Box<dyn Renderer>;
}

/// Outcome of [`RendererHost::init`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RendererSwitch {
    /// The requested backend is active.
    Installed { is_3d: bool },

    /// The requested backend could not be created; the null renderer is
    /// active and the alert should be shown.
    Fallback(Alert),
}

/// Owner of the active renderer.
pub struct RendererHost<B> {
    backends: B,
    renderer: Box<dyn Renderer>,
}

impl<B: RendererBackends> RendererHost<B> {
    /// Create a host with the null renderer active.
    #[must_use]
    pub fn new(backends: B) -> Self {
        Self {
            backends,
            renderer: Box::new(NullRenderer),
        }
    }

    /// Destroy the active renderer and install a 2D or 3D backend.
    ///
    /// A 3D request without WebGL2 installs the null renderer instead and
    /// returns the alert to show.
    pub fn init(&mut self, is_3d: bool) -> RendererSwitch {
        self.renderer.destroy();

        if !is_3d {
            self.renderer = self.backends.create_2d();
            tracing::debug!("installed 2D renderer");
            return RendererSwitch::Installed { is_3d: false };
        }

        if !self.backends.webgl2_available() {
            tracing::warn!("WebGL2 unavailable, 3D renderer disabled");
            self.renderer = Box::new(NullRenderer);
            return RendererSwitch::Fallback(Alert::webgl2_unavailable());
        }

        self.renderer = self.backends.create_3d();
        tracing::debug!("installed 3D renderer");
        RendererSwitch::Installed { is_3d: true }
    }

    /// [`Self::init`] with the configured preference.
    pub fn init_from_config(&mut self, config: &RendererConfig) -> RendererSwitch {
        self.init(config.prefer3d)
    }

    /// One animation-loop tick: render a frame with the active backend.
    pub fn render_frame(&mut self) { self.renderer.render(); }

    /// The active backend.
    #[must_use]
    pub fn renderer(&self) -> &dyn Renderer { self.renderer.as_ref() }

    /// The active backend, mutably.
    pub fn renderer_mut(&mut self) -> &mut dyn Renderer { self.renderer.as_mut() }
}

impl<B> std::fmt::Debug for RendererHost<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RendererHost")
            .field("is_3d", &self.renderer.is_3d())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
