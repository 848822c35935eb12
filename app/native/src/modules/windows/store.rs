//! Window store: dispatch loop and change notifications.
//!
//! The store owns the current snapshot in an [`eyeball::Observable`] and runs
//! every operation through its [`Reducer`]. Subscribers are only woken when a
//! dispatch publishes a new snapshot; no-ops and failures stay silent.
//!
//! ```text
//! ┌──────────┐  dispatch(op)  ┌─────────┐  apply  ┌──────────────┐
//! │  Caller  │ ─────────────▶ │  Store  │ ──────▶ │   Reducer    │
//! └──────────┘                └────┬────┘         └──────────────┘
//!                                  │ set (only if changed)
//!                                  ▼
//!                         Observable<Arc<WindowsState>> ──▶ subscribers
//! ```

use std::sync::Arc;

use eyeball::{Observable, Subscriber};

use crate::config::WindowsConfig;
use crate::modules::windows::error::{WindowError, WindowResult};
use crate::modules::windows::ops::WindowOp;
use crate::modules::windows::reducer::Reducer;
use crate::modules::windows::state::WindowsState;

/// Owner of the live window state.
#[derive(Debug)]
pub struct WindowStore {
    state: Observable<Arc<WindowsState>>,
    reducer: Reducer,
}

impl WindowStore {
    /// Create a store holding the empty initial state.
    #[must_use]
    pub fn new(reducer: Reducer) -> Self {
        Self {
            state: Observable::new(WindowsState::initial()),
            reducer,
        }
    }

    /// Create a store with a randomly seeded reducer for `config`.
    #[must_use]
    pub fn from_config(config: WindowsConfig) -> Self { Self::new(Reducer::new(config)) }

    /// The current snapshot.
    #[must_use]
    pub fn state(&self) -> Arc<WindowsState> { Arc::clone(Observable::get(&self.state)) }

    /// Subscribe to published snapshots.
    #[must_use]
    pub fn subscribe(&self) -> Subscriber<Arc<WindowsState>> { Observable::subscribe(&self.state) }

    /// Apply `op` to the current snapshot.
    ///
    /// Returns `true` if a new snapshot was published.
    ///
    /// # Errors
    ///
    /// Returns the reducer's error; the current snapshot is kept.
    pub fn dispatch(&mut self, op: WindowOp) -> WindowResult<bool> {
        let name = op.name();
        let target = op.window_id();
        tracing::debug!(op = name, window_id = ?target, "dispatching window operation");

        let current = self.state();
        let next = match self.reducer.apply(&current, op) {
            Ok(next) => next,
            Err(err) => {
                tracing::warn!(op = name, window_id = ?target, error = %err, "window operation failed");
                return Err(err);
            }
        };

        if Arc::ptr_eq(&current, &next) {
            tracing::trace!(op = name, "window operation was a no-op");
            return Ok(false);
        }

        Observable::set(&mut self.state, next);
        Ok(true)
    }

    /// Dispatch `ops` in order, stopping at the first failure.
    ///
    /// Returns the number of operations that published a new snapshot.
    ///
    /// # Errors
    ///
    /// Returns the index of the failed operation with its error.
    pub fn replay<I>(&mut self, ops: I) -> Result<usize, (usize, WindowError)>
    where I: IntoIterator<Item = WindowOp> {
        let mut published = 0;
        for (index, op) in ops.into_iter().enumerate() {
            if self.dispatch(op).map_err(|err| (index, err))? {
                published += 1;
            }
        }
        Ok(published)
    }
}

impl Default for WindowStore {
    fn default() -> Self { Self::new(Reducer::default()) }
}

// ============================================================================
// Tests
// ============================================================================
