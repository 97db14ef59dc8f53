//! Path resolution for dawdle configuration and log files.
//!
//! All dawdle files live in `~/.dawdle/`:
//! - `config.yaml` - Main configuration file
//! - `dawdle.log` - Diagnostics written while the TUI owns the terminal

use std::path::{Path, PathBuf};

use crate::error::DawdleError;

/// Paths to dawdle configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.dawdle/`
    pub root: PathBuf,
    /// Config file: `~/.dawdle/config.yaml`
    pub config_file: PathBuf,
    /// Diagnostics log: `~/.dawdle/dawdle.log`
    pub log_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, DawdleError> {
        let home = std::env::var("HOME")
            .map_err(|_| DawdleError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".dawdle")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            log_file: root.join("dawdle.log"),
            root,
        }
    }

    /// Use an explicit config file instead of the default one.
    #[must_use]
    pub fn with_config_file(mut self, path: &Path) -> Self {
        self.config_file = path.to_path_buf();
        self
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), DawdleError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                DawdleError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".dawdle"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-dawdle");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.log_file, root.join("dawdle.log"));
    }

    #[test]
    fn test_with_config_file_keeps_root() {
        let root = PathBuf::from("/tmp/test-dawdle");
        let paths = Paths::with_root(root.clone()).with_config_file(Path::new("/etc/dawdle.yaml"));

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, PathBuf::from("/etc/dawdle.yaml"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("nested").join(".dawdle"));

        paths.ensure_dirs().unwrap();

        assert!(paths.root.exists());
    }
}
