//! Geometry engine for floating windows.
//!
//! Pure functions that compute the clamped frame of a window after a move,
//! a resize or a change of the host viewport. All bounds come from
//! [`WindowsConfig`] so they can be tuned without touching the transitions.

use crate::config::WindowsConfig;
use crate::modules::windows::state::{Frame, Viewport};

/// Clamps `value` into `[min, max]`.
///
/// Unlike [`Ord::clamp`] this never panics: if `min > max` (a viewport
/// smaller than the configured margins) the lower bound wins.
#[must_use]
pub fn clamp(value: i32, min: i32, max: i32) -> i32 { value.min(max).max(min) }

/// Frame after dragging a window by `dx`/`dy` inside `viewport`.
///
/// The window may leave the viewport on the left until only `min_width`
/// pixels remain visible, and its top-left corner may not come closer than
/// `edge_margin` to the right or bottom edge. The top edge never goes above 0.
#[must_use]
pub fn moved_frame(
    frame: Frame,
    dx: i32,
    dy: i32,
    viewport: Viewport,
    config: &WindowsConfig,
) -> Frame {
    Frame {
        x: clamp(
            frame.x.saturating_add(dx),
            config.min_width.saturating_sub(frame.width),
            viewport.width.saturating_sub(config.edge_margin),
        ),
        y: clamp(
            frame.y.saturating_add(dy),
            0,
            viewport.height.saturating_sub(config.edge_margin),
        ),
        ..frame
    }
}

/// Frame after dragging the bottom-right corner of a window by `dx`/`dy`.
///
/// A window pushed past the left viewport edge (negative `x`) is kept wide
/// enough that `min_width` pixels stay visible.
#[must_use]
pub fn resized_frame(frame: Frame, dx: i32, dy: i32, config: &WindowsConfig) -> Frame {
    Frame {
        width: frame
            .width
            .saturating_add(dx)
            .max(config.min_width)
            .max(config.min_width.saturating_sub(frame.x)),
        height: frame.height.saturating_add(dy).max(config.min_height),
        ..frame
    }
}

/// Frame after the viewport shrank to `viewport`, or `None` if the window is
/// still reachable and needs no adjustment.
///
/// Only the top-left corner is pulled back; sizes are left alone.
#[must_use]
pub fn reflowed_frame(frame: Frame, viewport: Viewport, config: &WindowsConfig) -> Option<Frame> {
    let x_max = viewport.width.saturating_sub(config.edge_margin);
    let y_max = viewport.height.saturating_sub(config.edge_margin);

    if frame.x <= x_max && frame.y <= y_max {
        return None;
    }

    Some(Frame {
        x: frame.x.min(x_max),
        y: frame.y.min(y_max),
        ..frame
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> WindowsConfig { WindowsConfig::default() }

    #[test]
    fn test_clamp_within_bounds() {
        assert_eq!(clamp(5, 0, 10), 5);
        assert_eq!(clamp(-5, 0, 10), 0);
        assert_eq!(clamp(15, 0, 10), 10);
    }

    #[test]
    fn test_clamp_inverted_bounds_prefers_min() {
        assert_eq!(clamp(5, 10, 0), 10);
    }

    #[test]
    fn test_move_inside_viewport() {
        let frame = Frame::new(200, 200, 600, 300);
        let moved = moved_frame(frame, 50, -20, Viewport::new(1920, 1080), &config());
        assert_eq!(moved, Frame::new(250, 180, 600, 300));
    }

    #[test]
    fn test_move_clamps_right_and_bottom() {
        let frame = Frame::new(200, 200, 600, 300);
        let moved = moved_frame(frame, 5000, 5000, Viewport::new(1024, 768), &config());
        assert_eq!(moved.x, 1024 - 30);
        assert_eq!(moved.y, 768 - 30);
    }

    #[test]
    fn test_move_clamps_left_keeps_strip_visible() {
        let frame = Frame::new(200, 200, 600, 300);
        let moved = moved_frame(frame, -5000, -5000, Viewport::new(1024, 768), &config());
        assert_eq!(moved.x, -600 + 70);
        assert_eq!(moved.y, 0);
    }

    #[test]
    fn test_move_keeps_size() {
        let frame = Frame::new(0, 0, 321, 123);
        let moved = moved_frame(frame, 10, 10, Viewport::new(1024, 768), &config());
        assert_eq!((moved.width, moved.height), (321, 123));
    }

    #[test]
    fn test_resize_grows() {
        let frame = Frame::new(200, 200, 600, 300);
        let resized = resized_frame(frame, 100, 50, &config());
        assert_eq!((resized.width, resized.height), (700, 350));
        assert_eq!((resized.x, resized.y), (200, 200));
    }

    #[test]
    fn test_resize_minimums() {
        let frame = Frame::new(200, 200, 600, 300);
        let resized = resized_frame(frame, -1000, -1000, &config());
        assert_eq!((resized.width, resized.height), (70, 50));
    }

    #[test]
    fn test_resize_keeps_visible_width_past_left_edge() {
        let frame = Frame::new(-400, 0, 600, 300);
        let resized = resized_frame(frame, -550, 0, &config());
        assert_eq!(resized.width, 70 + 400);
    }

    #[test]
    fn test_reflow_within_bounds_is_none() {
        let frame = Frame::new(100, 100, 600, 300);
        assert_eq!(reflowed_frame(frame, Viewport::new(400, 400), &config()), None);
    }

    #[test]
    fn test_reflow_on_edge_is_none() {
        let frame = Frame::new(370, 370, 600, 300);
        assert_eq!(reflowed_frame(frame, Viewport::new(400, 400), &config()), None);
    }

    #[test]
    fn test_reflow_clamps_offending_axis() {
        let frame = Frame::new(500, 100, 600, 300);
        let reflowed = reflowed_frame(frame, Viewport::new(400, 800), &config()).unwrap();
        assert_eq!(reflowed, Frame::new(370, 100, 600, 300));
    }

    #[test]
    fn test_reflow_clamps_both_axes() {
        let frame = Frame::new(900, 900, 600, 300);
        let reflowed = reflowed_frame(frame, Viewport::new(400, 300), &config()).unwrap();
        assert_eq!((reflowed.x, reflowed.y), (370, 270));
    }
}
