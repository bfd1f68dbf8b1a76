//! # Static Queue
//!
//! A fixed-capacity, overwrite-on-full ring buffer with signed indexing,
//! and a rolling window of timestamped samples built on top of it.
//!
//! ## Architecture Overview
//!
//! The crate is structured into independent modules:
//!
//! - `queue`: The bounded circular queue ([`StaticQueue`])
//! - `window`: Time-sized sliding window of samples ([`SampleWindow`])
//! - `config`: Window configuration and environment overrides
//! - `error`: Error types
//!
//! ## Quick Look
//!
//! ```
//! use static_queue::{QueueError, StaticQueue};
//!
//! let mut queue = StaticQueue::with_capacity(3);
//! for i in 1..=5 {
//!     queue.push_back(i);
//! }
//!
//! assert_eq!(queue.front(), Ok(&3));
//! assert_eq!(queue.at(-1), Ok(&5));
//! assert_eq!(queue.get(5, -1), -1);
//! assert_eq!(queue.get_clamped(10), Ok(&5));
//! assert!(matches!(queue.at(3), Err(QueueError::IndexOutOfRange { .. })));
//! ```

// ============================================
// MODULE DECLARATIONS
// ============================================

pub mod config;
pub mod error;
pub mod queue;
pub mod window;

// ============================================
// RE-EXPORTS
// ============================================

pub use config::{ConfigError, WindowConfig};
pub use error::{QueueError, QueueResult, WindowError, WindowResult};
pub use queue::StaticQueue;
pub use window::{Sample, SampleWindow};

// ============================================
// LOGGING
// ============================================

/// Initialize logging for the platform.
///
/// Defaults to Info level; `RUST_LOG` overrides it. Safe to call more
/// than once.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .try_init();
}

// ============================================
// TESTS
// ============================================
