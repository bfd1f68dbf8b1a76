//! # Sample Types
//!
//! A value paired with the moment it was recorded.

use chrono::{DateTime, Utc};

/// A single timestamped entry in a [`SampleWindow`](crate::SampleWindow).
#[derive(Clone, Debug, PartialEq)]
pub struct Sample<T> {
    /// The recorded value
    pub value: T,

    /// When the value was recorded (wall clock, UTC)
    pub timestamp: DateTime<Utc>,
}

impl<T> Sample<T> {
    /// Creates a sample stamped with the current time.
    pub fn new(value: T) -> Self {
        Self {
            value,
            timestamp: Utc::now(),
        }
    }

    /// Creates a sample with a specific timestamp.
    pub fn with_timestamp(value: T, timestamp: DateTime<Utc>) -> Self {
        Self { value, timestamp }
    }

    /// Time elapsed from this sample to `later`. Negative if `later` is older.
    pub fn age_at(&self, later: DateTime<Utc>) -> chrono::Duration {
        later - self.timestamp
    }
}
