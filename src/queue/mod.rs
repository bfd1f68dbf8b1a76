//! # Queue Module
//!
//! This module provides the bounded circular queue everything else is
//! built on.
//!
//! ## Plain English Explanation
//!
//! Imagine a circular conveyor belt at a sushi restaurant with exactly N spots.
//! Every time a new plate comes out of the kitchen:
//! 1. It goes on the belt at the next empty spot
//! 2. If the belt is full, the oldest plate gets taken off first
//! 3. Customers can look at any plate by counting from the oldest one,
//!    or backwards from the newest one
//!
//! This keeps a fixed-length history of the most recent items without
//! using unbounded memory.
//!
//! The queue is single-owner. Share it across threads only behind your own
//! lock.

mod iter;
mod static_queue;

pub use iter::{Iter, IterMut};
pub use static_queue::StaticQueue;

// ============================================
// PROPERTY TESTS
// ============================================
