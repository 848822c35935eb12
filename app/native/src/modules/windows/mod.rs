//! Window Container - Reducer Architecture
//!
//! This module provides the state machine behind the client's floating
//! windows and its single full-screen modal:
//! - Immutable `Arc` snapshots with copy-on-write transitions
//! - A reducer that maps `(snapshot, WindowOp)` to the next snapshot
//! - `eyeball` observables for change notifications
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       UI / Replay                            │
//! │  (serialized WindowOp values: OPEN_WINDOW, MOVE_WINDOW, ...) │
//! └─────────────────────────┬───────────────────────────────────┘
//!                           │ WindowStore::dispatch
//!                           ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Reducer                               │
//! │  - Handlers per category (window, modal, geometry, chat)    │
//! │  - Geometry engine and id allocator                         │
//! │  - Returns the same Arc when nothing changed                │
//! └─────────────────────────┬───────────────────────────────────┘
//!                           │ Observable<Arc<WindowsState>>
//!                           ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Subscribers                             │
//! │  (render ModalState, WindowRecord list and payloads)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod geometry;
pub mod ids;
pub mod ops;
pub mod reducer;
pub mod state;
pub mod store;

pub use error::{WindowError, WindowResult};
pub use ids::IdAllocator;
pub use ops::WindowOp;
pub use reducer::Reducer;
pub use state::{
    ChannelId, Frame, ModalState, Payload, StateSnapshot, Viewport, Window, WindowId, WindowKind,
    WindowRecord, WindowsState,
};
pub use store::WindowStore;
