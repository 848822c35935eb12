//! Handler modules for the window reducer.
//!
//! Each module implements the transitions for one category of operations,
//! working on a private copy of the state:
//! - `window` - Open, close, remove and clone
//! - `modal` - Maximize and restore
//! - `geometry` - Move, resize and viewport reflow
//! - `chat` - Chat payload edits

pub mod chat;
pub mod geometry;
pub mod modal;
pub mod window;

pub use chat::{on_append_chat_input, on_set_chat_channel, on_set_chat_input};
pub use geometry::{
    moved_frame_of, on_move, on_resize, on_viewport_resize, reflow_updates, resized_frame_of,
};
pub use modal::{on_maximize, on_restore};
pub use window::{on_clone, on_close, on_close_all, on_open_modal, on_open_window, on_remove};
