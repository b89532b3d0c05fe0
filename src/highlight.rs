//! Highlight span decomposition
//!
//! Splits a field into alternating plain and matched runs that borrow from
//! the original text. Concatenating the runs always yields the text back.

use crate::search::Needle;
use serde::Serialize;

/// A run of field text, tagged as matched or not
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Span<'a> {
    Plain(&'a str),
    Match(&'a str),
}

impl<'a> Span<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Span::Plain(text) | Span::Match(text) => *text,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Span::Match(_))
    }
}

/// Decompose `text` into spans for `query`.
///
/// Scans left to right; each search resumes where the previous match ended,
/// so matches never overlap. An empty query returns the whole text as one
/// plain span and never enters the scan loop.
pub fn highlight_parts<'a>(text: &'a str, query: &str) -> Vec<Span<'a>> {
    let needle = Needle::new(query);
    highlight_with(text, &needle)
}

/// [`highlight_parts`] with a prepared needle
pub fn highlight_with<'a>(text: &'a str, needle: &Needle) -> Vec<Span<'a>> {
    if needle.is_empty() {
        return vec![Span::Plain(text)];
    }

    let mut spans = Vec::new();
    let mut pos = 0;

    while let Some(found) = needle.find_in(text, pos) {
        if found.start > pos {
            spans.push(Span::Plain(&text[pos..found.start]));
        }
        spans.push(Span::Match(&text[found.clone()]));
        pos = found.end;
    }

    if pos < text.len() || spans.is_empty() {
        spans.push(Span::Plain(&text[pos..]));
    }

    spans
}

/// Reassemble the original text from its spans
pub fn concat(spans: &[Span<'_>]) -> String {
    spans.iter().map(Span::text).collect()
}
