//! Window lifecycle handlers.
//!
//! These handlers open, close, remove and clone windows.

use crate::config::WindowsConfig;
use crate::modules::windows::error::{WindowError, WindowResult};
use crate::modules::windows::ids::IdAllocator;
use crate::modules::windows::state::{Payload, Window, WindowId, WindowsState};

// ============================================================================
// Open
// ============================================================================

/// Open the full-screen modal, replacing any existing modal and its payload.
pub fn on_open_modal(state: &mut WindowsState, window_type: String, title: String, args: Payload) {
    tracing::debug!(window_type = %window_type, "opening modal");
    state.set_modal(window_type, title, args);
}

/// Open a floating window with the default geometry.
///
/// # Errors
///
/// Returns [`WindowError::AllocatorExhausted`] if no id is free.
pub fn on_open_window(
    state: &mut WindowsState,
    ids: &mut IdAllocator,
    config: &WindowsConfig,
    window_type: String,
    title: String,
    cloneable: bool,
    args: Payload,
) -> WindowResult<WindowId> {
    let id = ids.allocate(state)?;
    tracing::debug!(window_id = %id, window_type = %window_type, "opening window");
    state.push_window(Window::floating(
        id,
        window_type,
        title,
        config.default_frame(),
        cloneable,
        args,
    ));
    Ok(id)
}

// ============================================================================
// Remove / Close
// ============================================================================

/// Remove a window and its payload. Id `0` clears the modal.
///
/// Returns `false` if nothing was removed.
pub fn on_remove(state: &mut WindowsState, window_id: WindowId) -> bool {
    let removed = state.remove(window_id).is_some();
    if removed {
        tracing::debug!(window_id = %window_id, "removed window");
    }
    removed
}

/// Close a window.
///
/// Closing the modal only hides it, so its payload survives for a later
/// restore. Closing a floating window removes it.
///
/// Returns `false` if nothing changed.
pub fn on_close(state: &mut WindowsState, window_id: WindowId) -> bool {
    if !window_id.is_modal() {
        return on_remove(state, window_id);
    }

    if !state.modal_open() {
        return false;
    }

    tracing::debug!("closing modal");
    state.set_modal_open(false)
}

/// Close everything.
///
/// Returns `false` if the state was already empty.
pub fn on_close_all(state: &mut WindowsState) -> bool {
    if state.is_empty() {
        return false;
    }
    tracing::debug!(count = state.ids().count(), "closing all windows");
    state.clear();
    true
}

// ============================================================================
// Clone
// ============================================================================

/// Duplicate a floating window, offset by `clone_offset` on both axes.
///
/// The `cloneable` flag is carried over but not enforced.
///
/// # Errors
///
/// Returns [`WindowError::UnknownWindow`] if `window_id` is not a floating
/// window, or [`WindowError::AllocatorExhausted`] if no id is free.
pub fn on_clone(
    state: &mut WindowsState,
    ids: &mut IdAllocator,
    config: &WindowsConfig,
    window_id: WindowId,
) -> WindowResult<WindowId> {
    let source = state.window(window_id).ok_or(WindowError::UnknownWindow(window_id))?;
    let frame = source
        .frame()
        .ok_or(WindowError::UnknownWindow(window_id))?
        .offset(config.clone_offset, config.clone_offset);
    let (window_type, title, payload) = source.clone().into_content();
    let cloneable = source.is_cloneable();

    let id = ids.allocate(state)?;
    tracing::debug!(window_id = %id, source = %window_id, "cloned window");
    state.push_window(Window::floating(id, window_type, title, frame, cloneable, payload));
    Ok(id)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::windows::state::{Frame, ModalState};

    fn setup() -> (WindowsState, IdAllocator, WindowsConfig) {
        let config = WindowsConfig::default();
        (WindowsState::default(), IdAllocator::seeded(11, config.max_window_id), config)
    }

    fn open(state: &mut WindowsState, ids: &mut IdAllocator, config: &WindowsConfig) -> WindowId {
        on_open_window(
            state,
            ids,
            config,
            "CHAT".to_string(),
            "Chat".to_string(),
            true,
            Payload::new().with(Payload::INPUT_MESSAGE, ""),
        )
        .unwrap()
    }

    #[test]
    fn test_open_window_uses_default_frame() {
        let (mut state, mut ids, config) = setup();
        let id = open(&mut state, &mut ids, &config);

        let window = state.window(id).unwrap();
        assert_eq!(window.frame(), Some(Frame::new(200, 200, 600, 300)));
        assert!(window.is_cloneable());
        assert!(window.record().unwrap().window_open);
        assert_eq!(state.args(id).and_then(Payload::input_message), Some(""));
    }

    #[test]
    fn test_open_modal_replaces_payload() {
        let (mut state, ..) = setup();
        on_open_modal(&mut state, "A".to_string(), "a".to_string(), Payload::new().with("k", 1));
        on_open_modal(&mut state, "B".to_string(), "b".to_string(), Payload::new());

        assert_eq!(state.modal().title.as_deref(), Some("b"));
        assert_eq!(state.args(WindowId::MODAL), Some(&Payload::new()));
        assert_eq!(state.window_count(), 0);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let (mut state, ..) = setup();
        assert!(!on_remove(&mut state, WindowId::new(12)));
    }

    #[test]
    fn test_remove_modal_clears_it() {
        let (mut state, ..) = setup();
        on_open_modal(&mut state, "HELP".to_string(), "Help".to_string(), Payload::new());

        assert!(on_remove(&mut state, WindowId::MODAL));
        assert_eq!(state.modal(), ModalState::default());
        assert!(state.args(WindowId::MODAL).is_none());
    }

    #[test]
    fn test_close_modal_keeps_payload() {
        let (mut state, ..) = setup();
        on_open_modal(&mut state, "HELP".to_string(), "Help".to_string(), Payload::new().with("k", 1));

        assert!(on_close(&mut state, WindowId::MODAL));
        assert!(!state.modal().open);
        assert_eq!(state.modal().window_type.as_deref(), Some("HELP"));
        assert!(state.args(WindowId::MODAL).is_some());

        assert!(!on_close(&mut state, WindowId::MODAL));
    }

    #[test]
    fn test_close_modal_without_modal() {
        let (mut state, ..) = setup();
        assert!(!on_close(&mut state, WindowId::MODAL));
    }

    #[test]
    fn test_close_window_removes_it() {
        let (mut state, mut ids, config) = setup();
        let id = open(&mut state, &mut ids, &config);

        assert!(on_close(&mut state, id));
        assert!(!state.contains(id));
        assert!(state.args(id).is_none());
    }

    #[test]
    fn test_close_all() {
        let (mut state, mut ids, config) = setup();
        open(&mut state, &mut ids, &config);
        on_open_modal(&mut state, "HELP".to_string(), "Help".to_string(), Payload::new());

        assert!(on_close_all(&mut state));
        assert_eq!(state, WindowsState::default());
        assert!(!on_close_all(&mut state));
    }

    #[test]
    fn test_clone_offsets_and_copies_payload() {
        let (mut state, mut ids, config) = setup();
        let id = open(&mut state, &mut ids, &config);

        let copy = on_clone(&mut state, &mut ids, &config, id).unwrap();
        assert_ne!(copy, id);

        let original = state.window(id).unwrap();
        let cloned = state.window(copy).unwrap();
        assert_eq!(cloned.frame(), Some(Frame::new(215, 215, 600, 300)));
        assert_eq!(cloned.window_type(), original.window_type());
        assert_eq!(cloned.title(), original.title());
        assert_eq!(cloned.is_cloneable(), original.is_cloneable());
        assert_eq!(cloned.payload(), original.payload());
    }

    #[test]
    fn test_clone_unknown_window() {
        let (mut state, mut ids, config) = setup();
        assert_eq!(
            on_clone(&mut state, &mut ids, &config, WindowId::new(5)),
            Err(WindowError::UnknownWindow(WindowId::new(5)))
        );
    }

    #[test]
    fn test_clone_modal_is_unknown() {
        let (mut state, mut ids, config) = setup();
        on_open_modal(&mut state, "HELP".to_string(), "Help".to_string(), Payload::new());
        assert_eq!(
            on_clone(&mut state, &mut ids, &config, WindowId::MODAL),
            Err(WindowError::UnknownWindow(WindowId::MODAL))
        );
    }
}
