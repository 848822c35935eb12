//! Geometry handlers.
//!
//! These handlers apply the geometry engine to the frames stored in state.

use crate::config::WindowsConfig;
use crate::modules::windows::error::{WindowError, WindowResult};
use crate::modules::windows::geometry::{moved_frame, reflowed_frame, resized_frame};
use crate::modules::windows::state::{Frame, Viewport, Window, WindowId, WindowsState};

fn frame_of(state: &WindowsState, window_id: WindowId) -> WindowResult<Frame> {
    state
        .window(window_id)
        .and_then(Window::frame)
        .ok_or(WindowError::UnknownWindow(window_id))
}

/// Frame a move would give `window_id`, or `None` if it stays where it is.
///
/// # Errors
///
/// Returns [`WindowError::UnknownWindow`] if `window_id` is not a floating
/// window.
pub fn moved_frame_of(
    state: &WindowsState,
    config: &WindowsConfig,
    window_id: WindowId,
    x_diff: i32,
    y_diff: i32,
    viewport: Viewport,
) -> WindowResult<Option<Frame>> {
    let frame = frame_of(state, window_id)?;
    let moved = moved_frame(frame, x_diff, y_diff, viewport, config);
    Ok((moved != frame).then_some(moved))
}

/// Frame a resize would give `window_id`, or `None` if its size is unchanged.
///
/// # Errors
///
/// Returns [`WindowError::UnknownWindow`] if `window_id` is not a floating
/// window.
pub fn resized_frame_of(
    state: &WindowsState,
    config: &WindowsConfig,
    window_id: WindowId,
    x_diff: i32,
    y_diff: i32,
) -> WindowResult<Option<Frame>> {
    let frame = frame_of(state, window_id)?;
    let resized = resized_frame(frame, x_diff, y_diff, config);
    Ok((resized != frame).then_some(resized))
}

/// Windows that fall outside `viewport`, with the frame each must take.
///
/// Lazy and allocation-free.
pub fn reflow_updates<'a>(
    state: &'a WindowsState,
    config: &'a WindowsConfig,
    viewport: Viewport,
) -> impl Iterator<Item = (WindowId, Frame)> + 'a {
    state.windows().filter_map(move |window| {
        let frame = window.frame()?;
        reflowed_frame(frame, viewport, config).map(|reflowed| (window.id(), reflowed))
    })
}

/// Move a floating window by `x_diff`/`y_diff` inside `viewport`.
///
/// Returns `false` if the clamped frame did not change.
///
/// # Errors
///
/// Returns [`WindowError::UnknownWindow`] if `window_id` is not a floating
/// window.
pub fn on_move(
    state: &mut WindowsState,
    config: &WindowsConfig,
    window_id: WindowId,
    x_diff: i32,
    y_diff: i32,
    viewport: Viewport,
) -> WindowResult<bool> {
    let Some(moved) = moved_frame_of(state, config, window_id, x_diff, y_diff, viewport)? else {
        return Ok(false);
    };

    tracing::trace!(window_id = %window_id, x = moved.x, y = moved.y, "moved window");
    Ok(state.set_frame(window_id, moved))
}

/// Resize a floating window by `x_diff`/`y_diff`.
///
/// Returns `false` if the clamped frame did not change.
///
/// # Errors
///
/// Returns [`WindowError::UnknownWindow`] if `window_id` is not a floating
/// window.
pub fn on_resize(
    state: &mut WindowsState,
    config: &WindowsConfig,
    window_id: WindowId,
    x_diff: i32,
    y_diff: i32,
) -> WindowResult<bool> {
    let Some(resized) = resized_frame_of(state, config, window_id, x_diff, y_diff)? else {
        return Ok(false);
    };

    tracing::trace!(
        window_id = %window_id,
        width = resized.width,
        height = resized.height,
        "resized window"
    );
    Ok(state.set_frame(window_id, resized))
}

/// Pull every window whose corner fell outside `viewport` back into reach.
///
/// Returns `false` if no window needed adjusting.
pub fn on_viewport_resize(
    state: &mut WindowsState,
    config: &WindowsConfig,
    viewport: Viewport,
) -> bool {
    let updates: Vec<(WindowId, Frame)> = reflow_updates(state, config, viewport).collect();
    if updates.is_empty() {
        return false;
    }

    tracing::debug!(
        width = viewport.width,
        height = viewport.height,
        count = updates.len(),
        "reflowed windows"
    );
    for (window_id, frame) in updates {
        state.set_frame(window_id, frame);
    }
    true
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::windows::state::Payload;

    fn state_with_frames(frames: &[(u32, Frame)]) -> WindowsState {
        let mut state = WindowsState::default();
        for &(id, frame) in frames {
            state.push_window(Window::floating(
                WindowId::new(id),
                "T".to_string(),
                String::new(),
                frame,
                false,
                Payload::new(),
            ));
        }
        state
    }

    fn frame(state: &WindowsState, id: u32) -> Frame {
        state.window(WindowId::new(id)).and_then(Window::frame).unwrap()
    }

    #[test]
    fn test_move_updates_frame() {
        let mut state = state_with_frames(&[(1, Frame::new(200, 200, 600, 300))]);
        let changed = on_move(
            &mut state,
            &WindowsConfig::default(),
            WindowId::new(1),
            10,
            -10,
            Viewport::new(1920, 1080),
        )
        .unwrap();

        assert!(changed);
        assert_eq!(frame(&state, 1), Frame::new(210, 190, 600, 300));
    }

    #[test]
    fn test_move_against_bound_is_unchanged() {
        let mut state = state_with_frames(&[(1, Frame::new(200, 0, 600, 300))]);
        let changed = on_move(
            &mut state,
            &WindowsConfig::default(),
            WindowId::new(1),
            0,
            -50,
            Viewport::new(1920, 1080),
        )
        .unwrap();
        assert!(!changed);
    }

    #[test]
    fn test_move_unknown_window() {
        let mut state = WindowsState::default();
        let result = on_move(
            &mut state,
            &WindowsConfig::default(),
            WindowId::new(4),
            1,
            1,
            Viewport::new(100, 100),
        );
        assert_eq!(result, Err(WindowError::UnknownWindow(WindowId::new(4))));
    }

    #[test]
    fn test_resize_updates_frame() {
        let mut state = state_with_frames(&[(1, Frame::new(200, 200, 600, 300))]);
        assert!(on_resize(&mut state, &WindowsConfig::default(), WindowId::new(1), -1000, 25).unwrap());
        assert_eq!(frame(&state, 1), Frame::new(200, 200, 70, 325));
    }

    #[test]
    fn test_resize_modal_is_unknown() {
        let mut state = WindowsState::default();
        state.set_modal("HELP".to_string(), "Help".to_string(), Payload::new());
        assert_eq!(
            on_resize(&mut state, &WindowsConfig::default(), WindowId::MODAL, 1, 1),
            Err(WindowError::UnknownWindow(WindowId::MODAL))
        );
    }

    #[test]
    fn test_viewport_resize_clamps_offenders_only() {
        let mut state = state_with_frames(&[
            (1, Frame::new(500, 100, 400, 300)),
            (2, Frame::new(100, 100, 400, 300)),
        ]);
        assert!(on_viewport_resize(&mut state, &WindowsConfig::default(), Viewport::new(400, 800)));
        assert_eq!(frame(&state, 1), Frame::new(370, 100, 400, 300));
        assert_eq!(frame(&state, 2), Frame::new(100, 100, 400, 300));
    }

    #[test]
    fn test_viewport_resize_large_viewport_is_noop() {
        let mut state = state_with_frames(&[(1, Frame::new(500, 100, 400, 300))]);
        let before = state.clone();
        assert!(!on_viewport_resize(&mut state, &WindowsConfig::default(), Viewport::new(4000, 4000)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_reflow_updates_lists_offenders_only() {
        let state = state_with_frames(&[
            (1, Frame::new(500, 100, 400, 300)),
            (2, Frame::new(100, 900, 400, 300)),
            (3, Frame::new(100, 100, 400, 300)),
        ]);
        let config = WindowsConfig::default();
        let updates: Vec<_> = reflow_updates(&state, &config, Viewport::new(400, 800)).collect();
        assert_eq!(updates, vec![
            (WindowId::new(1), Frame::new(370, 100, 400, 300)),
            (WindowId::new(2), Frame::new(100, 770, 400, 300)),
        ]);
    }

    #[test]
    fn test_resized_frame_of_at_minimum_is_none() {
        let state = state_with_frames(&[(1, Frame::new(0, 0, 70, 50))]);
        let config = WindowsConfig::default();
        assert_eq!(resized_frame_of(&state, &config, WindowId::new(1), -10, -10), Ok(None));
        assert_eq!(
            resized_frame_of(&state, &config, WindowId::new(1), 10, 0),
            Ok(Some(Frame::new(0, 0, 80, 50)))
        );
    }
}
