//! Core state types for the window container.
//!
//! Every window, floating or full-screen, is a single [`Window`] entity:
//! - `Window.id` is the primary key (`0` is reserved for the modal)
//! - `Window.kind` tells the modal apart from floating panels
//! - `Window.payload` is the opaque content the UI renders for it
//!
//! The UI-facing shapes ([`ModalState`], [`WindowRecord`]) are derived views,
//! serialized in the camelCase form the frontend expects.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Identifiers
// ============================================================================

/// Identifier of a window.
///
/// `0` ([`WindowId::MODAL`]) always names the full-screen modal; floating
/// windows carry ids from the allocator, which never hands out `0`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct WindowId(u32);

impl WindowId {
    /// The reserved identifier of the modal.
    pub const MODAL: Self = Self(0);

    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: u32) -> Self { Self(id) }

    /// The raw identifier.
    #[must_use]
    pub const fn get(self) -> u32 { self.0 }

    /// Whether this id routes to the modal.
    #[must_use]
    pub const fn is_modal(self) -> bool { self.0 == 0 }
}

impl From<u32> for WindowId {
    fn from(id: u32) -> Self { Self(id) }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

/// Identifier of a chat channel stored in a chat payload.
pub type ChannelId = u32;

// ============================================================================
// Geometry Types
// ============================================================================

/// Position and size of a floating window, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Frame {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Frame {
    /// Create a new frame.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// The same frame shifted by `dx`/`dy`.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..self
        }
    }
}

/// Dimensions of the host viewport the windows live in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    /// Create a new viewport.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self { Self { width, height } }
}

// ============================================================================
// Payload
// ============================================================================

/// Opaque content attached to a window.
///
/// Its shape depends on the window type and is never interpreted by the
/// state machine, except for the chat fields touched by the chat operations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(Map<String, Value>);

impl Payload {
    /// Key of the pending chat input message.
    pub const INPUT_MESSAGE: &'static str = "inputMessage";

    /// Key of the selected chat channel.
    pub const CHAT_CHANNEL: &'static str = "chatChannel";

    /// Create an empty payload.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Look up a field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> { self.0.get(key) }

    /// Set a field, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder-style [`Self::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// The chat input message, if present and a string.
    #[must_use]
    pub fn input_message(&self) -> Option<&str> {
        self.get(Self::INPUT_MESSAGE).and_then(Value::as_str)
    }

    /// The chat channel, if present and numeric.
    #[must_use]
    pub fn chat_channel(&self) -> Option<ChannelId> {
        self.get(Self::CHAT_CHANNEL)
            .and_then(Value::as_u64)
            .and_then(|cid| ChannelId::try_from(cid).ok())
    }
}

// ============================================================================
// Window Entity
// ============================================================================

/// What kind of window an entity is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WindowKind {
    /// The singleton full-screen window (id `0`).
    ///
    /// A closed modal keeps its payload so it can be reopened or restored.
    Modal { open: bool },

    /// A movable, resizable panel.
    Floating {
        frame: Frame,
        cloneable: bool,
        window_open: bool,
    },
}

/// A window entity: identity, labels, kind and payload in one place.
///
/// Entities are only built by the state module, which keeps the modal at id
/// `0` and every floating window at a non-zero id.
#[derive(Clone, Debug, PartialEq)]
pub struct Window {
    pub(super) id: WindowId,
    pub(super) window_type: String,
    pub(super) title: String,
    pub(super) kind: WindowKind,
    pub(super) payload: Payload,
}

impl Window {
    /// Build the open modal entity.
    pub(crate) fn modal(window_type: String, title: String, payload: Payload) -> Self {
        Self {
            id: WindowId::MODAL,
            window_type,
            title,
            kind: WindowKind::Modal { open: true },
            payload,
        }
    }

    /// Build a floating window entity.
    pub(crate) fn floating(
        id: WindowId,
        window_type: String,
        title: String,
        frame: Frame,
        cloneable: bool,
        payload: Payload,
    ) -> Self {
        debug_assert!(!id.is_modal(), "floating windows never use the modal id");
        Self {
            id,
            window_type,
            title,
            kind: WindowKind::Floating { frame, cloneable, window_open: true },
            payload,
        }
    }

    /// Consume the entity, keeping its labels and payload.
    pub(crate) fn into_content(self) -> (String, String, Payload) {
        (self.window_type, self.title, self.payload)
    }

    #[must_use]
    pub const fn id(&self) -> WindowId { self.id }

    #[must_use]
    pub fn window_type(&self) -> &str { &self.window_type }

    #[must_use]
    pub fn title(&self) -> &str { &self.title }

    #[must_use]
    pub const fn kind(&self) -> WindowKind { self.kind }

    #[must_use]
    pub const fn payload(&self) -> &Payload { &self.payload }

    /// Whether this entity is the modal.
    #[must_use]
    pub const fn is_modal(&self) -> bool { matches!(self.kind, WindowKind::Modal { .. }) }

    /// Frame of a floating window; `None` for the modal.
    #[must_use]
    pub const fn frame(&self) -> Option<Frame> {
        match self.kind {
            WindowKind::Floating { frame, .. } => Some(frame),
            WindowKind::Modal { .. } => None,
        }
    }

    /// Whether a floating window may be cloned. Always `false` for the modal.
    #[must_use]
    pub const fn is_cloneable(&self) -> bool {
        matches!(self.kind, WindowKind::Floating { cloneable: true, .. })
    }

    /// UI record of a floating window; `None` for the modal.
    #[must_use]
    pub fn record(&self) -> Option<WindowRecord> {
        match self.kind {
            WindowKind::Floating { frame, cloneable, window_open } => Some(WindowRecord {
                window_id: self.id,
                window_type: self.window_type.clone(),
                window_open,
                title: self.title.clone(),
                width: frame.width,
                height: frame.height,
                x_pos: frame.x,
                y_pos: frame.y,
                cloneable,
            }),
            WindowKind::Modal { .. } => None,
        }
    }
}

// ============================================================================
// UI Views
// ============================================================================

/// The modal as the UI layer sees it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalState {
    pub window_type: Option<String>,
    pub title: Option<String>,
    pub open: bool,
}

/// A floating window as the UI layer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowRecord {
    pub window_id: WindowId,
    pub window_type: String,
    pub window_open: bool,
    pub title: String,
    pub width: i32,
    pub height: i32,
    pub x_pos: i32,
    pub y_pos: i32,
    pub cloneable: bool,
}
