//! Session modes, status messages, and control availability.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::format::format_mmss;

/// Mode of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Waiting for a start.
    #[default]
    Idle,
    /// Showing excuses before the countdown.
    Procrastinating,
    /// The one-second tick is running.
    Counting,
    /// Time is up.
    Finished,
}

impl Mode {
    /// Whether Start and Beg are accepted in this mode.
    #[must_use]
    pub const fn accepts_start(self) -> bool {
        matches!(self, Self::Idle | Self::Finished)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Procrastinating => write!(f, "Procrastinating"),
            Self::Counting => write!(f, "Counting"),
            Self::Finished => write!(f, "Finished"),
        }
    }
}

/// Status line content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Nothing running.
    Ready,
    /// One of the built-in excuses.
    Excuse(&'static str),
    /// Shown when the user begs to skip the excuses.
    Begged,
    /// Shown during the settle pause.
    Starting,
    /// Remaining time while counting.
    TimeLeft(u64),
    /// A snooze added this many seconds.
    Snoozed(u64),
    /// The countdown reached zero.
    Done,
    /// The user reset the session.
    Reset,
}

impl Status {
    /// Whether this status is an excuse (some presenters animate these).
    #[must_use]
    pub const fn is_excuse(&self) -> bool {
        matches!(self, Self::Excuse(_))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => write!(f, "Ready to procrastinate."),
            Self::Excuse(excuse) => write!(f, "{excuse}"),
            Self::Begged => write!(f, "Okay okay okay — starting now. (You begged.)"),
            Self::Starting => write!(f, "...Fine. Starting now."),
            Self::TimeLeft(seconds) => write!(f, "Time left: {}", format_mmss(*seconds)),
            Self::Snoozed(seconds) => {
                write!(f, "Snoozed +{seconds}s. Back to procrastinating (kinda).")
            }
            Self::Done => write!(f, "Done — time is up!"),
            Self::Reset => write!(f, "Reset. You can try again when ready."),
        }
    }
}

/// Which inputs are currently usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Controls {
    /// The minute-count input.
    pub minutes: bool,
    /// Start.
    pub start: bool,
    /// Beg to start.
    pub beg: bool,
    /// Snooze.
    pub snooze: bool,
    /// Reset.
    pub reset: bool,
    /// Restart from the completion screen.
    pub restart: bool,
}

impl Controls {
    /// Control availability for a mode.
    #[must_use]
    pub const fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Idle => Self {
                minutes: true,
                start: true,
                beg: true,
                snooze: false,
                reset: false,
                restart: false,
            },
            Mode::Procrastinating => Self {
                minutes: false,
                start: false,
                beg: false,
                snooze: false,
                reset: true,
                restart: false,
            },
            Mode::Counting => Self {
                minutes: false,
                start: false,
                beg: false,
                snooze: true,
                reset: true,
                restart: false,
            },
            Mode::Finished => Self {
                minutes: true,
                start: true,
                beg: true,
                snooze: false,
                reset: true,
                restart: true,
            },
        }
    }
}
