//! Front-end settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings file looked up when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "strictly_timetravel.toml";

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Logging output.
    log: LogSettings,

    /// Terminal front end.
    ui: UiSettings,
}

/// Where and how much the front end logs.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Log file for the terminal UI (the screen belongs to the game).
    file: PathBuf,

    /// Filter directive used when `RUST_LOG` is unset.
    filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            file: PathBuf::from("strictly_timetravel.log"),
            filter: "info".to_string(),
        }
    }
}

/// Terminal UI tuning.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// How long to wait for a key press before redrawing.
    poll_interval_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            poll_interval_ms: 100,
        }
    }
}

impl UiSettings {
    /// Poll interval as a [`Duration`].
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if settings.ui.poll_interval_ms == 0 {
            return Err(ConfigError::new(
                "ui.poll_interval_ms must be greater than zero".to_string(),
            ));
        }

        info!(log_file = %settings.log.file.display(), "Settings loaded successfully");
        Ok(settings)
    }

    /// Resolves settings for a run.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read when present and defaults are used otherwise.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No settings file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, log_file: Option<PathBuf>, log_filter: Option<String>) -> Self {
        if let Some(file) = log_file {
            self.log.file = file;
        }
        if let Some(filter) = log_filter {
            self.log.filter = filter;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.log().filter(), "info");
        assert_eq!(settings.ui().poll_interval(), Duration::from_millis(100));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config("[log]\nfilter = \"debug\"\n");
        let settings = Settings::from_file(file.path()).expect("valid config");
        assert_eq!(settings.log().filter(), "debug");
        assert_eq!(settings.log().file(), &PathBuf::from("strictly_timetravel.log"));
        assert_eq!(*settings.ui().poll_interval_ms(), 100);
    }

    #[test]
    fn test_zero_poll_interval_rejected() {
        let file = write_config("[ui]\npoll_interval_ms = 0\n");
        let err = Settings::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("poll_interval_ms"));
    }

    #[test]
    fn test_malformed_file_rejected() {
        let file = write_config("[log\nfilter = ");
        assert!(Settings::from_file(file.path()).is_err());
    }

    #[test]
    fn test_explicit_missing_path_rejected() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("nope.toml");
        assert!(Settings::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::default()
            .with_overrides(Some(PathBuf::from("other.log")), Some("trace".to_string()));
        assert_eq!(settings.log().file(), &PathBuf::from("other.log"));
        assert_eq!(settings.log().filter(), "trace");
    }
}
