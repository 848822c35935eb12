//! The `WindowsState` snapshot: one ordered arena of window entities.
//!
//! Snapshots are immutable once published and shared as `Arc<WindowsState>`.
//! Transitions clone the arena, edit the copy through the crate-private
//! mutators below and wrap the result in a new `Arc`.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::types::{Frame, ModalState, Payload, Window, WindowId, WindowKind, WindowRecord};

/// Root state container for all windows.
///
/// The arena holds at most one modal entity (id `0`) and any number of
/// floating windows, in the order they were created. Since each entity owns
/// its payload there is no separate args table to keep in sync.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WindowsState {
    entities: Vec<Window>,
}

impl WindowsState {
    /// The empty initial state.
    #[must_use]
    pub fn initial() -> Arc<Self> { Arc::new(Self::default()) }

    // ========================================================================
    // Lookups
    // ========================================================================

    /// Get any entity (modal or floating) by id.
    #[must_use]
    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.entities.iter().find(|w| w.id == id)
    }

    /// Whether an entity with this id is live.
    #[must_use]
    pub fn contains(&self, id: WindowId) -> bool { self.get(id).is_some() }

    /// Get a floating window by id.
    #[must_use]
    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.get(id).filter(|w| !w.is_modal())
    }

    /// The modal entity, if a modal payload exists.
    #[must_use]
    pub fn modal_window(&self) -> Option<&Window> { self.entities.iter().find(|w| w.is_modal()) }

    /// Whether a modal exists and is shown.
    #[must_use]
    pub fn modal_open(&self) -> bool {
        self.modal_window().is_some_and(|w| matches!(w.kind, WindowKind::Modal { open: true }))
    }

    /// Floating windows in creation order.
    pub fn windows(&self) -> impl Iterator<Item = &Window> {
        self.entities.iter().filter(|w| !w.is_modal())
    }

    /// Number of floating windows.
    #[must_use]
    pub fn window_count(&self) -> usize { self.windows().count() }

    /// Payload of any entity by id (`0` for the modal).
    #[must_use]
    pub fn args(&self, id: WindowId) -> Option<&Payload> { self.get(id).map(Window::payload) }

    /// Ids of every entity that carries a payload, modal included.
    pub fn ids(&self) -> impl Iterator<Item = WindowId> + '_ { self.entities.iter().map(|w| w.id) }

    /// Check if there is nothing at all: no modal payload and no windows.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.entities.is_empty() }

    // ========================================================================
    // UI Views
    // ========================================================================

    /// The modal view. Empty and closed when no modal payload exists.
    #[must_use]
    pub fn modal(&self) -> ModalState {
        self.modal_window().map_or_else(ModalState::default, |w| ModalState {
            window_type: Some(w.window_type.clone()),
            title: Some(w.title.clone()),
            open: matches!(w.kind, WindowKind::Modal { open: true }),
        })
    }

    /// Records of all floating windows in creation order.
    #[must_use]
    pub fn window_records(&self) -> Vec<WindowRecord> {
        self.windows().filter_map(Window::record).collect()
    }

    /// Serializable `{ modal, windows, args }` view of this state.
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            modal: self.modal(),
            windows: self.window_records(),
            args: self.entities.iter().map(|w| (w.id, w.payload.clone())).collect(),
        }
    }

    // ========================================================================
    // Mutators (used by transition handlers on a private copy)
    // ========================================================================

    /// Append a floating window.
    pub(crate) fn push_window(&mut self, window: Window) {
        debug_assert!(!window.is_modal());
        debug_assert!(!self.contains(window.id), "window id {} already live", window.id);
        self.entities.push(window);
    }

    /// Install an open modal, replacing any existing one.
    pub(crate) fn set_modal(&mut self, window_type: String, title: String, payload: Payload) {
        let modal = Window::modal(window_type, title, payload);
        if let Some(existing) = self.entities.iter_mut().find(|w| w.is_modal()) {
            *existing = modal;
        } else {
            self.entities.insert(0, modal);
        }
    }

    /// Open or close the modal without touching its payload.
    ///
    /// Returns `false` if there is no modal.
    pub(crate) fn set_modal_open(&mut self, open: bool) -> bool {
        self.entities
            .iter_mut()
            .find(|w| w.is_modal())
            .map(|w| w.kind = WindowKind::Modal { open })
            .is_some()
    }

    /// Remove an entity by id.
    pub(crate) fn remove(&mut self, id: WindowId) -> Option<Window> {
        let idx = self.entities.iter().position(|w| w.id == id)?;
        Some(self.entities.remove(idx))
    }

    /// Update a floating window's kind data in place.
    pub(crate) fn update_kind<F>(&mut self, id: WindowId, f: F) -> bool
    where F: FnOnce(&mut WindowKind) {
        if let Some(window) = self.entities.iter_mut().find(|w| w.id == id) {
            f(&mut window.kind);
            true
        } else {
            false
        }
    }

    /// Replace the frame of a floating window.
    ///
    /// Returns `false` if `id` is not a floating window.
    pub(crate) fn set_frame(&mut self, id: WindowId, frame: Frame) -> bool {
        let mut updated = false;
        self.update_kind(id, |kind| {
            if let WindowKind::Floating { frame: current, .. } = kind {
                *current = frame;
                updated = true;
            }
        });
        updated
    }

    /// Drop every entity.
    pub(crate) fn clear(&mut self) { self.entities.clear(); }

    /// Mutable access to any entity's payload.
    pub(crate) fn payload_mut(&mut self, id: WindowId) -> Option<&mut Payload> {
        self.entities.iter_mut().find(|w| w.id == id).map(|w| &mut w.payload)
    }
}

/// Serializable view of a [`WindowsState`] in the frontend's wire shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub modal: ModalState,
    pub windows: Vec<WindowRecord>,
    pub args: BTreeMap<WindowId, Payload>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn floating(id: u32) -> Window {
        Window::floating(
            WindowId::new(id),
            "CHAT".to_string(),
            format!("Window {id}"),
            Frame::new(200, 200, 600, 300),
            true,
            Payload::new().with("n", id),
        )
    }

    #[test]
    fn test_initial_state_is_empty() {
        let state = WindowsState::initial();
        assert!(state.is_empty());
        assert_eq!(state.modal(), ModalState::default());
        assert_eq!(state.window_count(), 0);
    }

    #[test]
    fn test_push_and_lookup() {
        let mut state = WindowsState::default();
        state.push_window(floating(3));
        state.push_window(floating(1));

        assert!(state.contains(WindowId::new(3)));
        assert!(state.window(WindowId::new(1)).is_some());
        assert_eq!(state.args(WindowId::new(3)).and_then(|p| p.get("n")), Some(&serde_json::json!(3)));

        let order: Vec<u32> = state.windows().map(|w| w.id().get()).collect();
        assert_eq!(order, vec![3, 1]);
    }

    #[test]
    fn test_modal_is_not_a_floating_window() {
        let mut state = WindowsState::default();
        state.push_window(floating(4));
        state.set_modal("HELP".to_string(), "Help".to_string(), Payload::new());

        assert!(state.window(WindowId::MODAL).is_none());
        assert!(state.modal_window().is_some());
        assert_eq!(state.window_count(), 1);
        assert!(state.window_records().iter().all(|r| !r.window_id.is_modal()));
    }

    #[test]
    fn test_set_modal_replaces_existing() {
        let mut state = WindowsState::default();
        state.set_modal("A".to_string(), "a".to_string(), Payload::new().with("v", 1));
        state.set_modal("B".to_string(), "b".to_string(), Payload::new().with("v", 2));

        assert_eq!(state.ids().filter(|id| id.is_modal()).count(), 1);
        assert_eq!(state.modal().window_type.as_deref(), Some("B"));
        assert_eq!(state.args(WindowId::MODAL).and_then(|p| p.get("v")), Some(&serde_json::json!(2)));
    }

    #[test]
    fn test_set_modal_open_keeps_payload() {
        let mut state = WindowsState::default();
        state.set_modal("A".to_string(), "a".to_string(), Payload::new().with("v", 1));

        assert!(state.modal_open());
        assert!(state.set_modal_open(false));
        assert!(!state.modal_open());
        assert!(!state.modal().open);
        assert!(state.args(WindowId::MODAL).is_some());
    }

    #[test]
    fn test_set_modal_open_without_modal() {
        let mut state = WindowsState::default();
        assert!(!state.set_modal_open(false));
    }

    #[test]
    fn test_remove() {
        let mut state = WindowsState::default();
        state.push_window(floating(2));

        assert!(state.remove(WindowId::new(2)).is_some());
        assert!(state.remove(WindowId::new(2)).is_none());
        assert!(state.is_empty());
    }

    #[test]
    fn test_set_frame_only_touches_floating() {
        let mut state = WindowsState::default();
        state.push_window(floating(5));
        state.set_modal("HELP".to_string(), "Help".to_string(), Payload::new());

        assert!(state.set_frame(WindowId::new(5), Frame::new(1, 2, 3, 4)));
        assert_eq!(state.window(WindowId::new(5)).and_then(Window::frame), Some(Frame::new(1, 2, 3, 4)));
        assert!(!state.set_frame(WindowId::MODAL, Frame::default()));
        assert!(!state.set_frame(WindowId::new(6), Frame::default()));
    }

    #[test]
    fn test_snapshot_shape() {
        let mut state = WindowsState::default();
        state.push_window(floating(12));
        state.set_modal("HELP".to_string(), "Help".to_string(), Payload::new());

        let value = serde_json::to_value(state.snapshot()).unwrap();
        assert_eq!(value["modal"]["open"], true);
        assert_eq!(value["modal"]["windowType"], "HELP");
        assert_eq!(value["windows"][0]["windowId"], 12);
        assert!(value["args"]["0"].is_object());
        assert_eq!(value["args"]["12"]["n"], 12);
    }
}
