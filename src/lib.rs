//! dawdle - a countdown timer that procrastinates before it starts
//!
//! Ask for N minutes and the timer first offers a few excuses, pausing after
//! each, before it finally counts down. Begging skips the excuses.
//!
//! The session logic lives in [`timer`] and is shared by the full-screen
//! [`tui`] and the line-mode `start` command.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod timer;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::DawdleError;
