//! # Configuration Module
//!
//! This module handles the configurable settings of a [`SampleWindow`].
//!
//! ## Plain English Explanation
//!
//! A window remembers "the last N seconds" of samples. How many slots that
//! takes depends on how often samples arrive:
//!
//! ```text
//! 10 seconds × 100 Hz = 1000 slots
//! ```
//!
//! Settings can come from code, from one of the presets, or from the
//! environment (`STATIC_QUEUE_WINDOW_SECONDS`, `STATIC_QUEUE_SAMPLE_RATE_HZ`).
//!
//! [`SampleWindow`]: crate::SampleWindow

use std::env;
use std::str::FromStr;

use thiserror::Error;

/// Environment variable overriding [`WindowConfig::duration_seconds`].
pub const ENV_WINDOW_SECONDS: &str = "STATIC_QUEUE_WINDOW_SECONDS";

/// Environment variable overriding [`WindowConfig::sample_rate_hz`].
pub const ENV_SAMPLE_RATE_HZ: &str = "STATIC_QUEUE_SAMPLE_RATE_HZ";

/// Longest window accepted by [`WindowConfig::validate`], in seconds.
pub const MAX_DURATION_SECONDS: f32 = 3600.0;

/// Highest sample rate accepted by [`WindowConfig::validate`], in Hz.
pub const MAX_SAMPLE_RATE_HZ: f32 = 10_000.0;

/// Largest derived capacity accepted by [`WindowConfig::validate`].
pub const MAX_CAPACITY: usize = 1_000_000;

// ============================================
// MAIN CONFIGURATION
// ============================================

/// All configuration options for a sample window
#[derive(Clone, Debug, PartialEq)]
pub struct WindowConfig {
    /// How many seconds of history to keep
    ///
    /// ## Limits
    /// - Must be greater than 0
    /// - Maximum: 3600 seconds (one hour)
    /// - Default: 10 seconds
    pub duration_seconds: f32,

    /// How many samples arrive per second
    ///
    /// ## Plain English
    /// Together with the duration this decides how many slots the window
    /// needs. Higher rate = more slots = more memory.
    pub sample_rate_hz: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            // 10 seconds at 100 Hz
            duration_seconds: 10.0,
            sample_rate_hz: 100.0,
        }
    }
}

impl WindowConfig {
    /// Creates a configuration from explicit values.
    pub fn new(duration_seconds: f32, sample_rate_hz: f32) -> Self {
        Self {
            duration_seconds,
            sample_rate_hz,
        }
    }

    /// One second of fast samples, e.g. for smoothing a control loop.
    pub fn short_history() -> Self {
        Self {
            duration_seconds: 1.0,
            ..Self::default()
        }
    }

    /// A minute of slow samples, e.g. for trend display.
    pub fn long_history() -> Self {
        Self {
            duration_seconds: 60.0,
            sample_rate_hz: 10.0,
        }
    }

    /// Builds the default configuration, then applies any overrides found
    /// in the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(seconds) = env_var::<f32>(ENV_WINDOW_SECONDS)? {
            config.duration_seconds = seconds;
        }
        if let Some(rate) = env_var::<f32>(ENV_SAMPLE_RATE_HZ)? {
            config.sample_rate_hz = rate;
        }

        log::debug!(
            "Window config from environment: {}s at {} Hz",
            config.duration_seconds,
            config.sample_rate_hz
        );
        Ok(config)
    }

    /// Number of queue slots this window needs (`ceil(duration × rate)`).
    ///
    /// Invalid values saturate instead of panicking; [`validate`](Self::validate)
    /// reports them.
    pub fn capacity(&self) -> usize {
        let slots = (self.duration_seconds * self.sample_rate_hz).ceil();
        if slots.is_nan() || slots <= 0.0 {
            0
        } else {
            // `as` saturates at usize::MAX
            slots as usize
        }
    }

    /// Validates the configuration and returns errors if invalid
    ///
    /// ## Plain English
    /// Makes sure all settings are within reasonable bounds.
    /// Returns a list of problems, or empty if all is well.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let duration = self.duration_seconds;
        if !duration.is_finite() || duration <= 0.0 || duration > MAX_DURATION_SECONDS {
            errors.push(ConfigError::DurationOutOfRange(duration));
        }

        let rate = self.sample_rate_hz;
        if !rate.is_finite() || rate <= 0.0 || rate > MAX_SAMPLE_RATE_HZ {
            errors.push(ConfigError::SampleRateOutOfRange(rate));
        }

        // Only meaningful once both inputs are sane
        if errors.is_empty() && self.capacity() > MAX_CAPACITY {
            errors.push(ConfigError::CapacityTooLarge(self.capacity()));
        }

        errors
    }
}

// ============================================
// ENVIRONMENT HELPERS
// ============================================

/// Reads and parses an environment variable.
///
/// Returns `Ok(None)` when the variable is unset, and
/// [`ConfigError::InvalidEnvVar`] when it is set but does not parse.
/// Surrounding whitespace is ignored.
pub fn env_var<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    let Some(raw) = read_env(name)? else {
        return Ok(None);
    };

    let parsed = raw.trim().parse::<T>();
    parsed.map(Some).map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: raw,
    })
}

/// Reads a boolean flag from the environment.
///
/// Accepts `1/true/yes/on` and `0/false/no/off`, case-insensitively.
pub fn env_flag(name: &str) -> Result<Option<bool>, ConfigError> {
    let Some(raw) = read_env(name)? else {
        return Ok(None);
    };

    let lowered = raw.trim().to_lowercase();
    match lowered.as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: raw,
        }),
    }
}

fn read_env(name: &str) -> Result<Option<String>, ConfigError> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(value)) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string_lossy().into_owned(),
        }),
    }
}

// ============================================
// CONFIGURATION ERRORS
// ============================================

/// Errors that can occur with configuration values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Window duration is not positive, not finite, or too long
    #[error("window duration {0} seconds is outside valid range (0-{}]", MAX_DURATION_SECONDS)]
    DurationOutOfRange(f32),

    /// Sample rate is not positive, not finite, or too high
    #[error("sample rate {0} Hz is outside valid range (0-{}]", MAX_SAMPLE_RATE_HZ)]
    SampleRateOutOfRange(f32),

    /// Duration × rate would need too many slots
    #[error("window needs {0} slots (maximum {})", MAX_CAPACITY)]
    CapacityTooLarge(usize),

    /// An environment variable is set but cannot be parsed
    #[error("environment variable '{name}' ({value}) cannot be parsed")]
    InvalidEnvVar { name: String, value: String },
}

// ============================================
// TESTS
// ============================================
