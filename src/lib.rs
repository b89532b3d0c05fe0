//! Hilite - debounced search-as-you-type with match highlighting
//!
//! A small catalog of records is filtered by a case-insensitive substring
//! query, and each displayed field is split into plain and matched spans for
//! rendering. Keystrokes pass through a debouncer first, so the filter only
//! runs once typing pauses.
//!
//! # Features
//!
//! - **Debouncing**: deadline-based, clock-injected, one pending value at a time
//! - **Filtering**: title or description contains the query, ignoring case
//! - **Highlighting**: lossless span decomposition that borrows from the text
//! - **Front ends**: terminal UI, one-shot CLI, optional desktop window
//!
//! # Example
//!
//! ```
//! use hilite::{highlight_parts, AppConfig, Catalog, SearchSession, Span};
//! use std::time::{Duration, Instant};
//!
//! let mut session = SearchSession::new(Catalog::sample(), &AppConfig::default());
//!
//! let t0 = Instant::now();
//! session.set_query("Test 3", t0);
//! assert_eq!(session.result_count(), 5); // still debouncing
//!
//! session.tick(t0 + Duration::from_millis(400));
//! assert_eq!(session.summary(), "1 post were found.");
//!
//! assert_eq!(
//!     highlight_parts("Test 3. Enim", "test 3"),
//!     vec![Span::Match("Test 3"), Span::Plain(". Enim")]
//! );
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod debounce;
pub mod error;
#[cfg(feature = "gui")]
pub mod gui;
pub mod highlight;
pub mod logging;
pub mod search;
pub mod session;
pub mod tui;

// Re-export main types
pub use catalog::{Catalog, Record};
pub use config::AppConfig;
pub use debounce::Debouncer;
pub use error::{HiliteError, Result};
pub use highlight::{concat, highlight_parts, Span};
pub use search::{contains_ignore_case, filter_indices, filter_records, find_ignore_case, Needle};
pub use session::{summary_line, ResultRow, SearchSession, EMPTY_MESSAGE};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Resolve the catalog named by the config, falling back to the sample
pub fn load_catalog(config: &AppConfig) -> Result<Catalog> {
    match &config.catalog {
        Some(path) => Catalog::from_json_file(path),
        None => {
            let catalog = Catalog::sample();
            logging::log_catalog_loaded("built-in sample", catalog.len(), &[]);
            Ok(catalog)
        }
    }
}
