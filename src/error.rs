//! # Error Types Module
//!
//! This module defines the error types used throughout the crate.
//!
//! ## Plain English Explanation
//!
//! There are only two ways to misuse a queue:
//!
//! - "EmptyQueue: you asked for an element but there are none"
//! - "IndexOutOfRange: you asked for position 7 but only 3 exist"
//!
//! The window layer adds configuration problems on top of that. Keeping
//! the kinds separate lets callers decide which ones they can shrug off.

use thiserror::Error;

use crate::config::ConfigError;

// ============================================
// QUEUE ERRORS
// ============================================

/// Errors returned by positional access on a [`StaticQueue`](crate::StaticQueue).
///
/// Both indicate caller misuse. Nothing is mutated when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// `front`, `back` or `get_clamped` was called on an empty queue.
    #[error("queue is empty")]
    EmptyQueue,

    /// A normalized index fell outside `[0, len)`.
    ///
    /// `index` is the index as the caller passed it, before negative
    /// indices were shifted by `len`.
    #[error("queue index {index} out of range for length {len}")]
    IndexOutOfRange { index: isize, len: usize },
}

/// Result alias for queue operations.
pub type QueueResult<T> = Result<T, QueueError>;

// ============================================
// MAIN WINDOW ERROR
// ============================================

/// The top-level error for the window layer.
///
/// ## Plain English
///
/// A filing cabinet with one drawer per department: queue problems go in
/// one drawer, configuration problems in the other.
#[derive(Debug, Error)]
pub enum WindowError {
    /// Something went wrong reading from the underlying queue
    #[error("queue error: {0}")]
    Queue(#[from] QueueError),

    /// The window configuration was rejected
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// A Result type that uses [`WindowError`].
pub type WindowResult<T> = Result<T, WindowError>;

// ============================================
// TESTS
// ============================================
