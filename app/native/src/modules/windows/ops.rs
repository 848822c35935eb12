//! Operation types for the window state machine.
//!
//! Every change to the window state is described by one [`WindowOp`]. The
//! serialized form is the frontend's action protocol: a `type` tag carrying
//! the action name plus camelCase fields, e.g.
//!
//! ```json
//! { "type": "MOVE_WINDOW", "windowId": 42, "xDiff": 10, "yDiff": -5,
//!   "viewport": { "width": 1280, "height": 720 } }
//! ```

use serde::{Deserialize, Serialize};

use crate::modules::windows::state::{ChannelId, Payload, Viewport, WindowId};

/// Operations accepted by the window reducer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WindowOp {
    // ════════════════════════════════════════════════════════════════════════
    // Window Lifecycle
    // ════════════════════════════════════════════════════════════════════════
    /// Open a window. Full-screen opens replace the modal, others append a
    /// floating window under a fresh id.
    #[serde(rename = "OPEN_WINDOW", rename_all = "camelCase")]
    Open {
        window_type: String,
        title: String,
        #[serde(default)]
        fullscreen: bool,
        #[serde(default)]
        cloneable: bool,
        #[serde(default)]
        args: Payload,
    },

    /// Delete a window and its payload. Id `0` clears the modal.
    #[serde(rename = "REMOVE_WINDOW", rename_all = "camelCase")]
    Remove { window_id: WindowId },

    /// Close a window. Id `0` hides the modal but keeps its payload.
    #[serde(rename = "CLOSE_WINDOW", rename_all = "camelCase")]
    Close { window_id: WindowId },

    /// Duplicate a floating window, offset from the original.
    #[serde(rename = "CLONE_WINDOW", rename_all = "camelCase")]
    Clone { window_id: WindowId },

    /// Turn a floating window into the modal.
    #[serde(rename = "MAXIMIZE_WINDOW", rename_all = "camelCase")]
    Maximize { window_id: WindowId },

    /// Turn the modal back into a floating window.
    #[serde(rename = "RESTORE_WINDOW")]
    Restore,

    /// Close every window and forget the modal.
    #[serde(rename = "CLOSE_ALL_WINDOWS")]
    CloseAll,

    // ════════════════════════════════════════════════════════════════════════
    // Geometry
    // ════════════════════════════════════════════════════════════════════════
    /// Drag a floating window. The viewport bounds the result.
    #[serde(rename = "MOVE_WINDOW", rename_all = "camelCase")]
    Move {
        window_id: WindowId,
        x_diff: i32,
        y_diff: i32,
        viewport: Viewport,
    },

    /// Drag the corner of a floating window.
    #[serde(rename = "RESIZE_WINDOW", rename_all = "camelCase")]
    Resize {
        window_id: WindowId,
        x_diff: i32,
        y_diff: i32,
    },

    /// The host viewport changed size.
    #[serde(rename = "WINDOW_RESIZE")]
    ViewportResize { width: i32, height: i32 },

    // ════════════════════════════════════════════════════════════════════════
    // Chat Payload
    // ════════════════════════════════════════════════════════════════════════
    /// Append text to the chat input message, space-separated.
    #[serde(rename = "ADD_CHAT_INPUT_MSG", rename_all = "camelCase")]
    AppendChatInput { window_id: WindowId, msg: String },

    /// Select the chat channel.
    #[serde(rename = "SET_CHAT_CHANNEL", rename_all = "camelCase")]
    SetChatChannel { window_id: WindowId, cid: ChannelId },

    /// Replace the chat input message.
    #[serde(rename = "SET_CHAT_INPUT_MSG", rename_all = "camelCase")]
    SetChatInput { window_id: WindowId, msg: String },
}

impl WindowOp {
    /// Returns the protocol name of this operation.
    ///
    /// Used for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Open { .. } => "OPEN_WINDOW",
            Self::Remove { .. } => "REMOVE_WINDOW",
            Self::Close { .. } => "CLOSE_WINDOW",
            Self::Clone { .. } => "CLONE_WINDOW",
            Self::Maximize { .. } => "MAXIMIZE_WINDOW",
            Self::Restore => "RESTORE_WINDOW",
            Self::CloseAll => "CLOSE_ALL_WINDOWS",
            Self::Move { .. } => "MOVE_WINDOW",
            Self::Resize { .. } => "RESIZE_WINDOW",
            Self::ViewportResize { .. } => "WINDOW_RESIZE",
            Self::AppendChatInput { .. } => "ADD_CHAT_INPUT_MSG",
            Self::SetChatChannel { .. } => "SET_CHAT_CHANNEL",
            Self::SetChatInput { .. } => "SET_CHAT_INPUT_MSG",
        }
    }

    /// The window this operation targets, if it targets one.
    #[must_use]
    pub const fn window_id(&self) -> Option<WindowId> {
        match self {
            Self::Remove { window_id }
            | Self::Close { window_id }
            | Self::Clone { window_id }
            | Self::Maximize { window_id }
            | Self::Move { window_id, .. }
            | Self::Resize { window_id, .. }
            | Self::AppendChatInput { window_id, .. }
            | Self::SetChatChannel { window_id, .. }
            | Self::SetChatInput { window_id, .. } => Some(*window_id),
            Self::Open { .. } | Self::Restore | Self::CloseAll | Self::ViewportResize { .. } => {
                None
            }
        }
    }
}
