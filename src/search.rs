//! Case-insensitive substring matching and record filtering
//!
//! Matching compares characters after simple per-character lowercasing. A
//! match always starts and ends on character boundaries of the original
//! text, so the returned byte ranges can be used to slice it directly even
//! when lowercasing changes a character's length.

use crate::catalog::Record;
use std::ops::Range;

/// A query prepared for repeated matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Needle {
    lowered: Vec<char>,
}

impl Needle {
    pub fn new(query: &str) -> Self {
        Self {
            lowered: query.chars().flat_map(char::to_lowercase).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lowered.is_empty()
    }

    /// Byte end of a match starting at `start`, if the needle matches there
    fn match_at(&self, haystack: &str, start: usize) -> Option<usize> {
        let mut expected = self.lowered.iter();
        let mut remaining = self.lowered.len();

        for (offset, ch) in haystack[start..].char_indices() {
            for lower in ch.to_lowercase() {
                match expected.next() {
                    Some(&want) if want == lower => remaining -= 1,
                    // Mismatch, or the needle ends inside this char's lowercase form
                    _ => return None,
                }
            }
            if remaining == 0 {
                return Some(start + offset + ch.len_utf8());
            }
        }

        None
    }

    /// First match at or after byte offset `from`.
    ///
    /// `from` must lie on a char boundary. An empty needle matches
    /// immediately with an empty range.
    pub fn find_in(&self, haystack: &str, from: usize) -> Option<Range<usize>> {
        if from > haystack.len() {
            return None;
        }
        if self.is_empty() {
            return Some(from..from);
        }

        haystack[from..]
            .char_indices()
            .map(|(offset, _)| from + offset)
            .find_map(|start| self.match_at(haystack, start).map(|end| start..end))
    }

    pub fn is_in(&self, haystack: &str) -> bool {
        self.find_in(haystack, 0).is_some()
    }
}

/// Find `needle` in `haystack` ignoring case, starting at byte offset `from`
pub fn find_ignore_case(haystack: &str, needle: &str, from: usize) -> Option<Range<usize>> {
    Needle::new(needle).find_in(haystack, from)
}

/// Whether `haystack` contains `query` ignoring case
pub fn contains_ignore_case(haystack: &str, query: &str) -> bool {
    Needle::new(query).is_in(haystack)
}

/// Whether either field of the record contains the needle
pub fn record_matches(record: &Record, needle: &Needle) -> bool {
    needle.is_in(&record.title) || needle.is_in(&record.description)
}

/// Indices of the records matching `query`, in catalog order.
///
/// The query is trimmed first; a blank query selects every record.
pub fn filter_indices(records: &[Record], query: &str) -> Vec<usize> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return (0..records.len()).collect();
    }

    let needle = Needle::new(trimmed);
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record_matches(record, &needle))
        .map(|(idx, _)| idx)
        .collect()
}

/// The records matching `query`, in catalog order
pub fn filter_records<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
    filter_indices(records, query)
        .into_iter()
        .map(|idx| &records[idx])
        .collect()
}
