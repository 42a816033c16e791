//! Integration tests for Layer 2: Timer
//!
//! Drives schedulers with a manual clock so ordering is deterministic.


use std::time::Duration;

/// Milliseconds as a `Duration`.
pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}
