//! Application configuration
//!
//! Defaults, optionally overridden by a JSON config file, optionally
//! overridden again by command-line flags.

use crate::error::{HiliteError, Result};
use crate::logging::HiliteLogger;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Quiet period before a typed query is applied
pub const DEFAULT_DEBOUNCE_MS: u64 = 400;

/// UI event loop tick
pub const DEFAULT_TICK_MS: u64 = 50;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Debounce delay in milliseconds (0 disables debouncing)
    pub debounce_ms: u64,
    /// UI redraw/poll interval in milliseconds
    pub tick_ms: u64,
    /// Highlight with the trimmed query instead of the raw input
    pub trim_highlight: bool,
    /// JSON catalog to load instead of the built-in sample
    pub catalog: Option<PathBuf>,
    /// Log file path (defaults to the temp dir)
    pub log_file: Option<PathBuf>,
    /// Write a log file at all
    pub logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            tick_ms: DEFAULT_TICK_MS,
            trim_highlight: true,
            catalog: None,
            log_file: None,
            logging: true,
        }
    }
}

impl AppConfig {
    /// Read a JSON config file; missing keys keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| HiliteError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })?;
        serde_json::from_str(&contents).map_err(|source| HiliteError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Poll interval, never zero so the event loop cannot spin
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(HiliteLogger::default_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_reference_behaviour() {
        let config = AppConfig::default();
        assert_eq!(config.debounce_delay(), Duration::from_millis(400));
        assert!(config.trim_highlight);
        assert!(config.catalog.is_none());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"debounce_ms": 150, "catalog": "posts.json"}}"#).unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.debounce_ms, 150);
        assert_eq!(config.catalog, Some(PathBuf::from("posts.json")));
        assert_eq!(config.tick_ms, DEFAULT_TICK_MS);
        assert!(config.logging);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"debounce": 150}}"#).unwrap();

        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, HiliteError::ConfigParse { .. }));
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, HiliteError::ConfigRead { .. }));
        assert!(err.is_input_error());
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn tick_rate_is_never_zero() {
        let config = AppConfig {
            tick_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.tick_rate(), Duration::from_millis(1));
    }
}
