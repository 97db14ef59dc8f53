//! Command-line interface for dawdle.

pub mod args;
pub mod commands;
