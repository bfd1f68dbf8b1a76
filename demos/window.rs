//! # Sample Window Demo
//!
//! This demo feeds a simulated sensor into a two-second window, then
//! shrinks the window and shows which samples survive.
//!
//! Run with: `cargo run --example window`
//! Override the window with `STATIC_QUEUE_WINDOW_SECONDS` and
//! `STATIC_QUEUE_SAMPLE_RATE_HZ`.

use anyhow::{Context, Result};
use chrono::{Duration, Utc};

use static_queue::{SampleWindow, WindowConfig};

fn main() -> Result<()> {
    // Initialize logging so we can see what's happening
    static_queue::init_logging();

    let config = match WindowConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Ignoring environment overrides: {}", err);
            WindowConfig::new(2.0, 5.0)
        }
    };

    let mut window = SampleWindow::new(config).context("invalid window configuration")?;

    println!("Window configuration:");
    println!("   Duration: {} seconds", window.config().duration_seconds);
    println!("   Sample rate: {} Hz", window.config().sample_rate_hz);
    println!("   Slots: {}", window.capacity());
    println!();

    // Simulated readings, spaced by the sample period
    let start = Utc::now();
    let period_ms = (1000.0 / window.config().sample_rate_hz) as i64;
    let total = window.capacity() + window.capacity() / 2;

    for i in 0..total {
        let reading = simulated_reading(i);
        let timestamp = start + Duration::milliseconds(period_ms * i as i64);
        window.push_at(reading, timestamp);

        if window.is_full() && i + 1 == window.capacity() {
            println!("   Window full after {} samples", i + 1);
        }
    }

    let oldest = window.oldest().context("window is empty")?;
    let latest = window.latest().context("window is empty")?;
    println!();
    println!("After {} samples:", total);
    println!("   Held: {} ({:.0}% full)", window.len(), window.fill_ratio() * 100.0);
    println!("   Oldest: {:.2} at {}", oldest.value, oldest.timestamp);
    println!("   Latest: {:.2} at {}", latest.value, latest.timestamp);
    println!("   Span: {} ms", window.span().num_milliseconds());
    println!("   Three back: {:.2}", window.value_or(-3, f64::NAN));
    println!("   Mean: {:.2}", mean(&window));
    println!();

    // Halve the window and keep the newest samples
    let halved = WindowConfig::new(
        window.config().duration_seconds / 2.0,
        window.config().sample_rate_hz,
    );
    window.reconfigure(halved).context("could not shrink window")?;

    println!("After halving the window:");
    println!("   Slots: {}", window.capacity());
    println!("   Held: {}", window.len());
    let newest: Vec<f64> = window.values().rev().take(5).copied().collect();
    println!("   Newest five: {:.2?}", newest);

    Ok(())
}

/// A slow sine wave with a little deterministic wobble.
fn simulated_reading(i: usize) -> f64 {
    let x = i as f64;
    (x / 5.0).sin() * 10.0 + ((i * 7919) % 13) as f64 / 10.0
}

fn mean(window: &SampleWindow<f64>) -> f64 {
    if window.is_empty() {
        return 0.0;
    }
    window.values().sum::<f64>() / window.len() as f64
}
