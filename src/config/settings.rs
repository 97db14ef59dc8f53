//! Configuration settings for dawdle.
//!
//! Settings are loaded from `~/.dawdle/config.yaml`. The excuse list and the
//! delay ranges are compiled in; only presentation and restart behaviour
//! are configurable.

use serde::{Deserialize, Serialize};

use crate::config::Paths;
use crate::error::DawdleError;
use crate::timer::{Minutes, RestartBehavior};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Timer settings.
    pub timer: TimerConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply this setting to `colored` output.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// How the TUI draws the clock and excuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PresenterStyle {
    /// Highlight changed digits and ring the bell on each change.
    #[default]
    Flip,
    /// Type excuses out one character at a time.
    Typewriter,
    /// No effects.
    Plain,
}

/// What the restart key does on the completion screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RestartMode {
    /// Go back to idle.
    #[default]
    Idle,
    /// Immediately count down `restart_minutes`.
    Countdown,
}

/// Timer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Minutes pre-filled in the input.
    #[serde(default = "default_minutes")]
    pub default_minutes: u32,
    /// Clock and excuse effects.
    #[serde(default)]
    pub style: PresenterStyle,
    /// Ring the terminal bell on digit changes and completion.
    #[serde(default = "default_true")]
    pub sound: bool,
    /// Restart behaviour.
    #[serde(default)]
    pub restart: RestartMode,
    /// Countdown length used by `restart: countdown`.
    #[serde(default = "default_restart_minutes")]
    pub restart_minutes: u32,
}

impl TimerConfig {
    /// The default minutes, normalized.
    #[must_use]
    pub fn default_minutes(&self) -> Minutes {
        Minutes::new(u64::from(self.default_minutes))
    }

    /// The session's restart behaviour.
    #[must_use]
    pub fn restart_behavior(&self) -> RestartBehavior {
        match self.restart {
            RestartMode::Idle => RestartBehavior::Idle,
            RestartMode::Countdown => {
                RestartBehavior::Countdown(Minutes::new(u64::from(self.restart_minutes)))
            }
        }
    }
}

// Default value functions for serde
const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_minutes() -> u32 {
    5
}

const fn default_restart_minutes() -> u32 {
    1
}

const fn default_true() -> bool {
    true
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            default_minutes: default_minutes(),
            style: PresenterStyle::default(),
            sound: default_true(),
            restart: RestartMode::default(),
            restart_minutes: default_restart_minutes(),
        }
    }
}

impl Config {
    /// Load the configuration file `paths` points at.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load(paths: &Paths) -> Result<Self, DawdleError> {
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, DawdleError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            DawdleError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            DawdleError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), DawdleError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| DawdleError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            DawdleError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.general.color, ColorSetting::Auto);
        assert_eq!(config.timer.default_minutes, 5);
        assert_eq!(config.timer.style, PresenterStyle::Flip);
        assert!(config.timer.sound);
        assert_eq!(config.timer.restart, RestartMode::Idle);
        assert_eq!(config.timer.restart_behavior(), RestartBehavior::Idle);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        // Should return defaults when file doesn't exist
        assert_eq!(config.timer.default_minutes, 5);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut config = Config::default();
        config.timer.default_minutes = 30;
        config.timer.style = PresenterStyle::Typewriter;

        config.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();

        assert_eq!(loaded.timer.default_minutes, 30);
        assert_eq!(loaded.timer.style, PresenterStyle::Typewriter);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        // Write a partial config (only some fields)
        let partial_yaml = r#"
timer:
  restart: countdown
  restart_minutes: 3
"#;
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        // Custom value should be loaded
        assert_eq!(
            config.timer.restart_behavior(),
            RestartBehavior::Countdown(Minutes::new(3))
        );
        // Defaults should be used for missing fields
        assert_eq!(config.timer.default_minutes, 5);
        assert!(config.timer.sound);
        assert_eq!(config.general.color, ColorSetting::Auto);
    }

    #[test]
    fn test_invalid_config_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "timer:\n  style: sparkly\n").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_zero_minutes_are_clamped() {
        let config = TimerConfig {
            default_minutes: 0,
            restart: RestartMode::Countdown,
            restart_minutes: 0,
            ..TimerConfig::default()
        };

        assert_eq!(config.default_minutes(), Minutes::MIN);
        assert_eq!(
            config.restart_behavior(),
            RestartBehavior::Countdown(Minutes::MIN)
        );
    }

    #[test]
    fn test_load_through_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());
        std::fs::write(&paths.config_file, "timer:\n  sound: false\n").unwrap();

        let config = Config::load(&paths).unwrap();
        assert!(!config.timer.sound);
    }
}
