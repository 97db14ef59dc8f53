//! Minute-count input coercion.
//!
//! Whatever the user typed becomes a whole number of minutes, at least one.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Upper bound on a single countdown, in minutes.
pub const MAX_MINUTES: u64 = 100_000;

/// A normalized minute count in `1..=MAX_MINUTES`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u64", into = "u64")]
pub struct Minutes(u64);

impl Minutes {
    /// The fallback for anything unusable.
    pub const MIN: Self = Self(1);

    /// Clamp a whole minute count into range.
    #[must_use]
    pub fn new(minutes: u64) -> Self {
        Self(minutes.clamp(1, MAX_MINUTES))
    }

    /// Floor a real number and clamp it; NaN and infinities give one minute.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn from_f64(value: f64) -> Self {
        if !value.is_finite() {
            return Self::MIN;
        }
        let floored = value.floor();
        if floored < 1.0 {
            Self::MIN
        } else if floored >= MAX_MINUTES as f64 {
            Self(MAX_MINUTES)
        } else {
            Self(floored as u64)
        }
    }

    /// Parse free-form input such as `"5"`, `" 2.9 "`, `"-3"` or `"soon"`.
    ///
    /// Never fails: non-numeric input is one minute.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        input.trim().parse::<f64>().map_or(Self::MIN, Self::from_f64)
    }

    /// The minute count.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The duration in seconds.
    #[must_use]
    pub const fn as_seconds(self) -> u64 {
        self.0 * 60
    }
}

impl Default for Minutes {
    fn default() -> Self {
        Self::MIN
    }
}

impl From<u64> for Minutes {
    fn from(minutes: u64) -> Self {
        Self::new(minutes)
    }
}

impl From<Minutes> for u64 {
    fn from(minutes: Minutes) -> Self {
        minutes.0
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
