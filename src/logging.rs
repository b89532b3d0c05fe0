//! File logging for Hilite
//!
//! One process-wide logger writing plain text lines to a file. Nothing is
//! written until [`init`] has been called, so library users and tests stay
//! silent.

use chrono::Local;
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Global logger instance
static LOGGER: OnceLock<Mutex<HiliteLogger>> = OnceLock::new();

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        };
        f.pad(label)
    }
}

/// Main logger struct
pub struct HiliteLogger {
    file: Option<File>,
    min_level: LogLevel,
}

impl HiliteLogger {
    fn new(path: &Path, min_level: LogLevel) -> Self {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true) // Start fresh each run
            .open(path)
            .ok();

        Self { file, min_level }
    }

    /// Default log file location
    pub fn default_path() -> PathBuf {
        std::env::temp_dir().join("hilite.log")
    }

    fn log(&mut self, level: LogLevel, module: &str, message: &str) {
        if level < self.min_level {
            return;
        }

        let entry = format_entry(
            &Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
            level,
            module,
            message,
        );

        if let Some(ref mut file) = self.file {
            let _ = file.write_all(entry.as_bytes());
            let _ = file.flush();
        }
    }
}

fn format_entry(timestamp: &str, level: LogLevel, module: &str, message: &str) -> String {
    format!("[{}] [{:5}] [{}] {}\n", timestamp, level, module, message)
}

/// Initialize the global logger.
///
/// Returns false if the file could not be opened or a logger was already
/// installed; logging then stays disabled (or unchanged).
pub fn init(path: &Path, min_level: LogLevel) -> bool {
    let logger = HiliteLogger::new(path, min_level);
    let opened = logger.file.is_some();
    LOGGER.set(Mutex::new(logger)).is_ok() && opened
}

fn log(level: LogLevel, module: &str, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.lock().log(level, module, message);
    }
}

/// Log debug message
pub fn debug(module: &str, message: &str) {
    log(LogLevel::Debug, module, message);
}

/// Log info message
pub fn info(module: &str, message: &str) {
    log(LogLevel::Info, module, message);
}

/// Log warning message
pub fn warn(module: &str, message: &str) {
    log(LogLevel::Warn, module, message);
}

/// Log error message
pub fn error(module: &str, message: &str) {
    log(LogLevel::Error, module, message);
}

// ============================================================================
// Pipeline-specific helpers
// ============================================================================

/// Log a raw query edit (before debouncing)
pub fn log_query_change(query: &str, pending: bool) {
    let msg = format!("Query changed: '{}' (pending={})", query, pending);
    debug("DEBOUNCE", &msg);
}

/// Log a debounced value reaching the filter
pub fn log_debounce_emit(query: &str, waited_ms: u128) {
    let msg = format!("Debounced emit: '{}' after {}ms", query, waited_ms);
    info("DEBOUNCE", &msg);
}

/// Log the outcome of a filter pass
pub fn log_search_result(query: &str, matched: usize, total: usize) {
    let msg = format!("Filter '{}': {}/{} records", query, matched, total);
    info("SEARCH", &msg);
}

/// Log catalog construction
pub fn log_catalog_loaded(source: &str, records: usize, duplicate_titles: &[String]) {
    info(
        "CATALOG",
        &format!("Loaded {} records from {}", records, source),
    );
    for title in duplicate_titles {
        warn("CATALOG", &format!("Duplicate title '{}'", title));
    }
}

/// Flush the log file
pub fn flush() {
    if let Some(logger) = LOGGER.get() {
        if let Some(ref mut file) = logger.lock().file {
            let _ = file.flush();
        }
    }
}

/// Write a separator line for readability
pub fn separator(label: &str) {
    let msg = format!("========== {} ==========", label);
    info("---", &msg);
}
