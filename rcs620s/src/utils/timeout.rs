//! Timeout helpers.
//!
//! Deadlines flow through the crate as `Instant`s so that a single command
//! budget covers both the ACK and the response read. These helpers keep the
//! millisecond conversions in one place.

use std::time::{Duration, Instant};

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// A deadline `timeout_ms` from now.
pub fn deadline_in(timeout_ms: u64) -> Instant {
    Instant::now() + ms(timeout_ms)
}
