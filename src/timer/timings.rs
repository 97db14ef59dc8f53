//! Fixed delays and ranges used by the session.

use std::ops::RangeInclusive;
use std::time::Duration;

/// How many excuses a normal start shows.
pub const DELAY_COUNT_RANGE: RangeInclusive<u32> = 2..=5;

/// How long each excuse stays up, in milliseconds.
pub const EXCUSE_DELAY_MS: RangeInclusive<u64> = 2_000..=7_000;

/// Pause between the last excuse and the first tick.
pub const SETTLE_DELAY: Duration = Duration::from_millis(700);

/// Seconds added by a snooze.
pub const SNOOZE_SECONDS: RangeInclusive<u64> = 30..=120;

/// Period of the countdown tick.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// The ranges a [`Session`](super::Session) draws from.
///
/// Built from the constants above; tests swap in narrower ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timings {
    /// Number of excuses before counting starts.
    pub delay_count: RangeInclusive<u32>,
    /// Per-excuse pause in milliseconds.
    pub excuse_delay_ms: RangeInclusive<u64>,
    /// Pause before the countdown begins.
    pub settle_delay: Duration,
    /// Seconds added per snooze.
    pub snooze_seconds: RangeInclusive<u64>,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            delay_count: DELAY_COUNT_RANGE,
            excuse_delay_ms: EXCUSE_DELAY_MS,
            settle_delay: SETTLE_DELAY,
            snooze_seconds: SNOOZE_SECONDS,
        }
    }
}
