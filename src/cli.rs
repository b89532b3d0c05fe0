//! Command-line options shared by the `hilite` and `hilite-gui` binaries

use crate::config::AppConfig;
use crate::logging::{self, LogLevel};
use crate::Result;
use clap::Args;
use std::path::PathBuf;

/// Options that shape the configuration, accepted by every binary
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// JSON config file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// JSON catalog file (array of {"title", "description"})
    #[arg(long, global = true, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Debounce delay in milliseconds (0 disables debouncing)
    #[arg(long, global = true, value_name = "MS")]
    pub debounce_ms: Option<u64>,

    /// Highlight with the raw query instead of the trimmed one
    #[arg(long, global = true)]
    pub raw_highlight: bool,

    /// Log file path
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Disable the log file
    #[arg(long, global = true)]
    pub no_log: bool,

    /// Include debug-level lines in the log
    #[arg(long, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    /// Defaults, then the config file, then explicit flags
    pub fn resolve_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };

        if let Some(catalog) = &self.catalog {
            config.catalog = Some(catalog.clone());
        }
        if let Some(ms) = self.debounce_ms {
            config.debounce_ms = ms;
        }
        if self.raw_highlight {
            config.trim_highlight = false;
        }
        if let Some(log_file) = &self.log_file {
            config.log_file = Some(log_file.clone());
        }
        if self.no_log {
            config.logging = false;
        }

        Ok(config)
    }

    pub fn log_level(&self) -> LogLevel {
        if self.verbose {
            LogLevel::Debug
        } else {
            LogLevel::Info
        }
    }
}

/// Start file logging if the config asks for it
pub fn init_logging(config: &AppConfig, level: LogLevel) {
    if !config.logging {
        return;
    }
    if logging::init(&config.log_path(), level) {
        logging::info("MAIN", &format!("Hilite {} starting up", crate::VERSION));
        logging::debug("MAIN", &format!("Config: {:?}", config));
    }
}
