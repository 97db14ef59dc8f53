//! The procrastinating countdown.
//!
//! A [`Session`] walks through four modes:
//! - `Idle`: waiting for a start
//! - `Procrastinating`: showing random excuses with random pauses
//! - `Counting`: ticking down once per second
//! - `Finished`: time is up, waiting for a restart or reset
//!
//! All mutation happens on one event loop. Pauses and the tick are spawned
//! tasks that only send [`Wake`] events back to that loop.

pub mod excuses;
pub mod format;
pub mod minutes;
pub mod schedule;
pub mod session;
pub mod sink;
pub mod status;
pub mod timings;

#[cfg(test)]
pub(crate) mod test_support;

pub use excuses::EXCUSES;
pub use format::{display_digits, format_mmss};
pub use minutes::{Minutes, MAX_MINUTES};
pub use schedule::{Scheduler, TickHandle, Wake};
pub use session::{Command, RestartBehavior, Session};
pub use sink::{sanitize, LogEntry, LogSink, MemoryLog, Presenter};
pub use status::{Controls, Mode, Status};
pub use timings::Timings;
