//! # Sample Window Module
//!
//! A rolling history of recent samples, sized by time rather than count.
//!
//! ## Plain English Explanation
//!
//! "Keep the last 10 seconds of readings" is easier to reason about than
//! "keep the last 1000 readings". This module does the conversion once
//! (duration × sample rate) and then lets the [`StaticQueue`] do the work:
//! new samples push the oldest ones out, and looking back in time is just
//! a negative index.

mod sample;

pub use sample::Sample;

use chrono::{DateTime, Utc};

use crate::config::WindowConfig;
use crate::error::{WindowError, WindowResult};
use crate::queue::StaticQueue;

// ============================================
// SAMPLE WINDOW
// ============================================

/// A fixed-length sliding window of timestamped samples.
///
/// Single-owner, like the queue underneath it.
///
/// ## Example
/// ```
/// # use static_queue::{SampleWindow, WindowConfig};
/// let mut window = SampleWindow::new(WindowConfig::new(1.0, 3.0)).unwrap();
/// for reading in [10, 20, 30, 40] {
///     window.push(reading);
/// }
/// assert_eq!(window.capacity(), 3);
/// assert_eq!(window.snapshot(), vec![20, 30, 40]);
/// ```
#[derive(Debug, Clone)]
pub struct SampleWindow<T> {
    samples: StaticQueue<Sample<T>>,
    config: WindowConfig,
}

impl<T> SampleWindow<T> {
    /// Creates an empty window for the given configuration.
    ///
    /// Fails with the first validation problem if the configuration is
    /// rejected.
    pub fn new(config: WindowConfig) -> WindowResult<Self> {
        check(&config)?;

        let capacity = config.capacity();
        log::info!(
            "Creating sample window: {} seconds at {} Hz = {} slot capacity",
            config.duration_seconds,
            config.sample_rate_hz,
            capacity
        );

        Ok(Self {
            samples: StaticQueue::with_capacity(capacity),
            config,
        })
    }

    /// Records `value` stamped with the current time.
    pub fn push(&mut self, value: T) {
        self.samples.push_back(Sample::new(value));
    }

    /// Records `value` with an explicit timestamp.
    ///
    /// Timestamps are not required to be monotonic; the window keeps
    /// arrival order.
    pub fn push_at(&mut self, value: T, timestamp: DateTime<Utc>) {
        self.samples.push_back(Sample::with_timestamp(value, timestamp));
    }

    /// The most recent sample.
    pub fn latest(&self) -> WindowResult<&Sample<T>> {
        Ok(self.samples.back()?)
    }

    /// The oldest sample still in the window.
    pub fn oldest(&self) -> WindowResult<&Sample<T>> {
        Ok(self.samples.front()?)
    }

    /// The sample at `index`; negative indices count back from the latest.
    pub fn sample(&self, index: isize) -> WindowResult<&Sample<T>> {
        Ok(self.samples.at(index)?)
    }

    /// The value at `index`, clamped to the oldest/latest sample when out
    /// of range.
    pub fn value_clamped(&self, index: isize) -> WindowResult<&T> {
        Ok(&self.samples.get_clamped(index)?.value)
    }

    /// Time between the oldest and latest sample.
    ///
    /// Zero when the window holds fewer than two samples.
    pub fn span(&self) -> chrono::Duration {
        match (self.samples.front(), self.samples.back()) {
            (Ok(oldest), Ok(latest)) => oldest.age_at(latest.timestamp),
            _ => chrono::Duration::zero(),
        }
    }

    /// How full the window is (0.0 = empty, 1.0 = full).
    pub fn fill_ratio(&self) -> f32 {
        match self.samples.capacity() {
            0 => 0.0,
            capacity => self.samples.len() as f32 / capacity as f32,
        }
    }

    /// Applies a new configuration, keeping the newest samples that fit.
    ///
    /// The window is left untouched if the configuration is rejected.
    pub fn reconfigure(&mut self, config: WindowConfig) -> WindowResult<()> {
        check(&config)?;

        let capacity = config.capacity();
        let dropped = self.samples.len().saturating_sub(capacity);
        if dropped > 0 {
            log::warn!(
                "Shrinking window to {} slots discards {} oldest samples",
                capacity,
                dropped
            );
        }

        self.samples.set_capacity(capacity);
        log::debug!(
            "Window reconfigured: {}s at {} Hz ({} slots, {} held)",
            config.duration_seconds,
            config.sample_rate_hz,
            capacity,
            self.samples.len()
        );

        self.config = config;
        Ok(())
    }

    /// Iterates over the values, oldest first.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        self.samples.iter().map(|sample| &sample.value)
    }

    /// Iterates over the full samples, oldest first.
    pub fn samples(&self) -> crate::queue::Iter<'_, Sample<T>> {
        self.samples.iter()
    }

    /// Forgets all samples, keeping the configured capacity.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Returns the number of samples currently held.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if no samples are held.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns true if the next push evicts the oldest sample.
    pub fn is_full(&self) -> bool {
        self.samples.is_full()
    }

    /// Returns the maximum number of samples held.
    pub fn capacity(&self) -> usize {
        self.samples.capacity()
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &WindowConfig {
        &self.config
    }
}

impl<T: Clone> SampleWindow<T> {
    /// The value at `index`, or `default` when out of range.
    pub fn value_or(&self, index: isize, default: T) -> T {
        match self.samples.at(index) {
            Ok(sample) => sample.value.clone(),
            Err(_) => default,
        }
    }

    /// Returns cloned copies of all values (oldest first).
    pub fn snapshot(&self) -> Vec<T> {
        self.values().cloned().collect()
    }
}

fn check(config: &WindowConfig) -> WindowResult<()> {
    match config.validate().into_iter().next() {
        Some(error) => Err(WindowError::Config(error)),
        None => Ok(()),
    }
}

// ============================================
// TESTS
// ============================================
