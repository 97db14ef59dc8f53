//! Configuration management for dawdle.
//!
//! This module handles loading and saving configuration from `~/.dawdle/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, PresenterStyle, RestartMode, TimerConfig};
