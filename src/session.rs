//! Search session: query, debounced query and the derived result set
//!
//! Front ends feed raw input through [`SearchSession::set_query`] and call
//! [`SearchSession::tick`] from their event loop. Results are recomputed by
//! an explicit call after the debounced query changes, never implicitly.

use crate::catalog::{Catalog, Record};
use crate::config::AppConfig;
use crate::debounce::Debouncer;
use crate::highlight::{highlight_with, Span};
use crate::logging;
use crate::search::{filter_indices, Needle};
use serde::Serialize;
use std::time::{Duration, Instant};

/// Shown when nothing matches
pub const EMPTY_MESSAGE: &str = "Not data found.";

/// Count line shown above the results
pub fn summary_line(count: usize) -> String {
    format!("{} post were found.", count)
}

/// A result record with both fields decomposed into spans
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub title_spans: Vec<Span<'a>>,
    pub description_spans: Vec<Span<'a>>,
}

pub struct SearchSession {
    catalog: Catalog,
    query: String,
    debounced: String,
    debouncer: Debouncer<String>,
    highlight_needle: Needle,
    trim_highlight: bool,
    results: Vec<usize>,
}

impl SearchSession {
    pub fn new(catalog: Catalog, config: &AppConfig) -> Self {
        let results = (0..catalog.len()).collect();
        Self {
            catalog,
            query: String::new(),
            debounced: String::new(),
            debouncer: Debouncer::new(config.debounce_delay()),
            highlight_needle: Needle::new(""),
            trim_highlight: config.trim_highlight,
            results,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Raw query as typed
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Query currently driving the results
    pub fn debounced_query(&self) -> &str {
        &self.debounced
    }

    /// Record an edit to the query.
    ///
    /// Returns true if the results were recomputed right away (zero delay).
    pub fn set_query(&mut self, query: impl Into<String>, now: Instant) -> bool {
        let query = query.into();
        self.query.clone_from(&query);

        let ready = self.debouncer.update(query, now);
        logging::log_query_change(&self.query, self.debouncer.is_pending());
        match ready {
            Some(value) => {
                self.apply(value);
                true
            }
            None => false,
        }
    }

    /// Apply a due debounced query. Returns true when results changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.debouncer.poll_timed(now) {
            Some((value, waited)) => {
                logging::log_debounce_emit(&value, waited.as_millis());
                self.apply(value);
                true
            }
            None => false,
        }
    }

    /// Apply any pending query immediately
    pub fn flush(&mut self) -> bool {
        match self.debouncer.cancel() {
            Some(value) => {
                self.apply(value);
                true
            }
            None => false,
        }
    }

    pub fn is_debouncing(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn time_remaining(&self, now: Instant) -> Option<Duration> {
        self.debouncer.time_remaining(now)
    }

    /// Tear down; nothing pending will be applied afterwards
    pub fn close(&mut self) {
        self.debouncer.close();
    }

    pub fn is_closed(&self) -> bool {
        self.debouncer.is_closed()
    }

    /// Derive the result set from the debounced query
    fn apply(&mut self, debounced: String) {
        self.results = filter_indices(self.catalog.records(), &debounced);
        // A blank query never highlights, raw mode included
        let highlight_query = if self.trim_highlight || debounced.trim().is_empty() {
            debounced.trim()
        } else {
            debounced.as_str()
        };
        self.highlight_needle = Needle::new(highlight_query);
        logging::log_search_result(&debounced, self.results.len(), self.catalog.len());
        self.debounced = debounced;
    }

    pub fn results(&self) -> impl Iterator<Item = &Record> + '_ {
        self.results
            .iter()
            .filter_map(move |&idx| self.catalog.get(idx))
    }

    /// Catalog indices of the current results
    pub fn result_indices(&self) -> &[usize] {
        &self.results
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    pub fn summary(&self) -> String {
        summary_line(self.result_count())
    }

    /// Spans for a field under the current debounced query
    pub fn highlight<'a>(&self, text: &'a str) -> Vec<Span<'a>> {
        highlight_with(text, &self.highlight_needle)
    }

    pub fn row<'a>(&self, record: &'a Record) -> ResultRow<'a> {
        ResultRow {
            title: &record.title,
            description: &record.description,
            title_spans: self.highlight(&record.title),
            description_spans: self.highlight(&record.description),
        }
    }

    pub fn rows(&self) -> Vec<ResultRow<'_>> {
        self.results().map(|record| self.row(record)).collect()
    }
}
