//! Window identifier allocation.
//!
//! Ids are drawn uniformly from `1..=max_id` and, on collision, scanned
//! upwards with wrap-around. The scan is bounded by the size of the range,
//! so a full range fails with [`WindowError::AllocatorExhausted`] instead of
//! spinning. `0` is never produced because it belongs to the modal.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::modules::windows::error::{WindowError, WindowResult};
use crate::modules::windows::state::{WindowId, WindowsState};

/// Random, collision-free window id allocator.
#[derive(Clone)]
pub struct IdAllocator {
    rng: StdRng,
    max_id: u32,
}

impl IdAllocator {
    /// Create an allocator seeded from the thread-local generator.
    #[must_use]
    pub fn new(max_id: u32) -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
            max_id,
        }
    }

    /// Create a deterministic allocator, for replays and tests.
    #[must_use]
    pub fn seeded(seed: u64, max_id: u32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            max_id,
        }
    }

    /// Allocate an id that no entity in `state` currently uses.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::AllocatorExhausted`] if every id in
    /// `1..=max_id` is live (or the range is empty).
    pub fn allocate(&mut self, state: &WindowsState) -> WindowResult<WindowId> {
        if self.max_id == 0 {
            return Err(WindowError::AllocatorExhausted { max_id: 0 });
        }

        let range = u64::from(self.max_id);
        let start = u64::from(self.rng.random_range(1..=self.max_id));

        for step in 0..range {
            let raw = (start - 1 + step) % range + 1;
            // `raw` is in 1..=max_id, which fits in u32.
            let candidate = WindowId::new(u32::try_from(raw).unwrap_or(self.max_id));
            if !state.contains(candidate) {
                if step > 0 {
                    tracing::trace!(window_id = %candidate, steps = step, "window id collision resolved");
                }
                return Ok(candidate);
            }
        }

        tracing::warn!(max_id = self.max_id, "window id range exhausted");
        Err(WindowError::AllocatorExhausted { max_id: self.max_id })
    }
}

impl fmt::Debug for IdAllocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdAllocator").field("max_id", &self.max_id).finish_non_exhaustive()
    }
}
