//! The window reducer: `(snapshot, operation) -> snapshot`.
//!
//! Each call first inspects the borrowed snapshot. Operations that change
//! nothing return the input `Arc` itself, so callers can detect no-ops with
//! [`Arc::ptr_eq`], and operations whose target is missing fail right away.
//! Neither path copies the state. Otherwise the snapshot is cloned, the
//! matching handler runs on the copy and the result is published as a new
//! `Arc`.

pub mod handlers;

use std::sync::Arc;

use crate::config::WindowsConfig;
use crate::modules::windows::error::{WindowError, WindowResult};
use crate::modules::windows::ids::IdAllocator;
use crate::modules::windows::ops::WindowOp;
use crate::modules::windows::state::{Payload, Viewport, WindowId, WindowsState};

/// Transition function over [`WindowsState`] snapshots.
///
/// Owns the geometry configuration and the id allocator, the only state a
/// transition needs besides the snapshot itself.
#[derive(Clone, Debug)]
pub struct Reducer {
    config: WindowsConfig,
    ids: IdAllocator,
}

impl Reducer {
    /// Create a reducer with a randomly seeded id allocator.
    #[must_use]
    pub fn new(config: WindowsConfig) -> Self {
        let ids = IdAllocator::new(config.max_window_id);
        Self { config, ids }
    }

    /// Create a reducer whose id choices are reproducible.
    #[must_use]
    pub fn seeded(config: WindowsConfig, seed: u64) -> Self {
        let ids = IdAllocator::seeded(seed, config.max_window_id);
        Self { config, ids }
    }

    /// Apply one operation to `state`.
    ///
    /// # Errors
    ///
    /// Returns the handler's [`WindowError`](crate::modules::windows::WindowError)
    /// if the operation targets a missing window, finds a malformed chat
    /// payload, or cannot allocate an id.
    pub fn apply(
        &mut self,
        state: &Arc<WindowsState>,
        op: WindowOp,
    ) -> WindowResult<Arc<WindowsState>> {
        if !changes(state, &self.config, &op)? {
            return Ok(Arc::clone(state));
        }

        let mut next = WindowsState::clone(state);

        let changed = match op {
            WindowOp::Open {
                window_type,
                title,
                fullscreen: true,
                args,
                ..
            } => {
                handlers::on_open_modal(&mut next, window_type, title, args);
                true
            }
            WindowOp::Open {
                window_type,
                title,
                fullscreen: false,
                cloneable,
                args,
            } => {
                handlers::on_open_window(
                    &mut next,
                    &mut self.ids,
                    &self.config,
                    window_type,
                    title,
                    cloneable,
                    args,
                )?;
                true
            }
            WindowOp::Remove { window_id } => handlers::on_remove(&mut next, window_id),
            WindowOp::Close { window_id } => handlers::on_close(&mut next, window_id),
            WindowOp::Clone { window_id } => {
                handlers::on_clone(&mut next, &mut self.ids, &self.config, window_id)?;
                true
            }
            WindowOp::Maximize { window_id } => {
                handlers::on_maximize(&mut next, window_id)?;
                true
            }
            WindowOp::Restore => {
                handlers::on_restore(&mut next, &mut self.ids, &self.config)?;
                true
            }
            WindowOp::CloseAll => handlers::on_close_all(&mut next),
            WindowOp::Move { window_id, x_diff, y_diff, viewport } => {
                handlers::on_move(&mut next, &self.config, window_id, x_diff, y_diff, viewport)?
            }
            WindowOp::Resize { window_id, x_diff, y_diff } => {
                handlers::on_resize(&mut next, &self.config, window_id, x_diff, y_diff)?
            }
            WindowOp::ViewportResize { width, height } => {
                handlers::on_viewport_resize(&mut next, &self.config, Viewport::new(width, height))
            }
            WindowOp::AppendChatInput { window_id, msg } => {
                handlers::on_append_chat_input(&mut next, window_id, &msg)?;
                true
            }
            WindowOp::SetChatChannel { window_id, cid } => {
                handlers::on_set_chat_channel(&mut next, window_id, cid)?;
                true
            }
            WindowOp::SetChatInput { window_id, msg } => {
                handlers::on_set_chat_input(&mut next, window_id, msg)?;
                true
            }
        };

        Ok(if changed { Arc::new(next) } else { Arc::clone(state) })
    }
}

impl Default for Reducer {
    fn default() -> Self { Self::new(WindowsConfig::default()) }
}

/// Whether `op` would change `state`, judged without copying it.
///
/// # Errors
///
/// Returns the error the matching handler would return for a missing
/// target or a malformed chat payload. Id exhaustion is only detected by
/// the handlers.
fn changes(state: &WindowsState, config: &WindowsConfig, op: &WindowOp) -> WindowResult<bool> {
    let floating = |window_id: WindowId| {
        state.window(window_id).map(|_| true).ok_or(WindowError::UnknownWindow(window_id))
    };
    let payload = |window_id: WindowId| {
        state.args(window_id).ok_or(WindowError::UnknownWindow(window_id))
    };

    match *op {
        WindowOp::Open { .. } => Ok(true),
        WindowOp::Close { window_id } if window_id.is_modal() => Ok(state.modal_open()),
        WindowOp::Remove { window_id } | WindowOp::Close { window_id } => {
            Ok(state.contains(window_id))
        }
        WindowOp::Clone { window_id } | WindowOp::Maximize { window_id } => floating(window_id),
        WindowOp::Restore => state
            .modal_window()
            .map(|_| true)
            .ok_or(WindowError::UnknownWindow(WindowId::MODAL)),
        WindowOp::CloseAll => Ok(!state.is_empty()),
        WindowOp::Move { window_id, x_diff, y_diff, viewport } => {
            handlers::moved_frame_of(state, config, window_id, x_diff, y_diff, viewport)
                .map(|frame| frame.is_some())
        }
        WindowOp::Resize { window_id, x_diff, y_diff } => {
            handlers::resized_frame_of(state, config, window_id, x_diff, y_diff)
                .map(|frame| frame.is_some())
        }
        WindowOp::ViewportResize { width, height } => {
            Ok(handlers::reflow_updates(state, config, Viewport::new(width, height))
                .next()
                .is_some())
        }
        WindowOp::AppendChatInput { window_id, .. } => payload(window_id)?
            .input_message()
            .map(|_| true)
            .ok_or(WindowError::InvalidPayload { window_id, field: Payload::INPUT_MESSAGE }),
        WindowOp::SetChatChannel { window_id, .. } | WindowOp::SetChatInput { window_id, .. } => {
            payload(window_id).map(|_| true)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
