//! Modal handlers.
//!
//! These handlers move a window between its floating form and the modal.

use crate::config::WindowsConfig;
use crate::modules::windows::error::{WindowError, WindowResult};
use crate::modules::windows::ids::IdAllocator;
use crate::modules::windows::state::{Window, WindowId, WindowsState};

/// Promote a floating window to the modal.
///
/// The window is removed and its payload moves to id `0`. An existing modal
/// is replaced.
///
/// # Errors
///
/// Returns [`WindowError::UnknownWindow`] if `window_id` is not a floating
/// window.
pub fn on_maximize(state: &mut WindowsState, window_id: WindowId) -> WindowResult<()> {
    if state.window(window_id).is_none() {
        return Err(WindowError::UnknownWindow(window_id));
    }
    let window = state.remove(window_id).ok_or(WindowError::UnknownWindow(window_id))?;

    let (window_type, title, payload) = window.into_content();
    tracing::debug!(window_id = %window_id, window_type = %window_type, "maximized window");
    state.set_modal(window_type, title, payload);
    Ok(())
}

/// Turn the modal back into a floating window.
///
/// The new window gets the default frame, is cloneable and receives a copy
/// of the modal payload. The modal is closed but keeps its payload.
///
/// # Errors
///
/// Returns [`WindowError::UnknownWindow`] with id `0` if there is no modal,
/// or [`WindowError::AllocatorExhausted`] if no id is free.
pub fn on_restore(
    state: &mut WindowsState,
    ids: &mut IdAllocator,
    config: &WindowsConfig,
) -> WindowResult<WindowId> {
    let (window_type, title, payload) = state
        .modal_window()
        .cloned()
        .ok_or(WindowError::UnknownWindow(WindowId::MODAL))?
        .into_content();

    let id = ids.allocate(state)?;
    tracing::debug!(window_id = %id, window_type = %window_type, "restored modal");
    state.push_window(Window::floating(
        id,
        window_type,
        title,
        config.default_frame(),
        true,
        payload,
    ));
    state.set_modal_open(false);
    Ok(id)
}
