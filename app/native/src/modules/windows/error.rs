//! Error types for the window state machine.
//!
//! Every transition either produces a complete new snapshot or fails with one
//! of these errors and leaves the caller's snapshot untouched.
//!
//! # Error Categories
//!
//! - **Lookup errors**: an operation names a window id that is not live
//! - **Payload errors**: a chat operation finds a payload of the wrong shape
//! - **Allocation errors**: the identifier range has no free slot left

use thiserror::Error;

use super::state::WindowId;

/// Result type alias for window operations.
pub type WindowResult<T> = Result<T, WindowError>;

/// Errors that can occur while applying a window operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    /// No live window carries this id.
    ///
    /// For id `0` this means no modal payload exists.
    #[error("Unknown window id: {0}")]
    UnknownWindow(WindowId),

    /// The payload of a window lacks a field, or the field has the wrong type.
    #[error("Window {window_id}: payload field `{field}` is missing or not a string")]
    InvalidPayload {
        /// Window whose payload was inspected.
        window_id: WindowId,
        /// Name of the offending field.
        field: &'static str,
    },

    /// Every identifier in `1..=max_id` is taken.
    #[error("No free window id left in 1..={max_id}")]
    AllocatorExhausted {
        /// Upper bound of the identifier range.
        max_id: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_window_display() {
        let err = WindowError::UnknownWindow(WindowId::new(42));
        assert_eq!(err.to_string(), "Unknown window id: 42");
    }

    #[test]
    fn test_invalid_payload_display() {
        let err = WindowError::InvalidPayload {
            window_id: WindowId::new(7),
            field: "inputMessage",
        };
        let msg = err.to_string();
        assert!(msg.contains("Window 7"));
        assert!(msg.contains("inputMessage"));
    }

    #[test]
    fn test_allocator_exhausted_display() {
        let err = WindowError::AllocatorExhausted { max_id: 3 };
        assert!(err.to_string().contains("1..=3"));
    }
}
