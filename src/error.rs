//! Error types for Hilite
//!
//! The search pipeline itself is total; these cover the layers around it
//! (configuration, catalog files, terminal and window setup).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Hilite operations
#[derive(Error, Debug)]
pub enum HiliteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot read config file '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file '{}': {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Cannot read catalog file '{}': {source}", path.display())]
    CatalogRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid catalog file '{}': {source}", path.display())]
    CatalogParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Catalog must contain at least one record")]
    EmptyCatalog,

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("GUI error: {0}")]
    Gui(String),
}

/// Result type alias for Hilite operations
pub type Result<T> = std::result::Result<T, HiliteError>;

impl HiliteError {
    /// Errors caused by user-supplied files rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            HiliteError::ConfigRead { .. }
                | HiliteError::ConfigParse { .. }
                | HiliteError::CatalogRead { .. }
                | HiliteError::CatalogParse { .. }
                | HiliteError::EmptyCatalog
        )
    }

    /// Process exit status: 2 for bad input files, 1 for everything else
    pub fn exit_code(&self) -> i32 {
        if self.is_input_error() {
            2
        } else {
            1
        }
    }
}
