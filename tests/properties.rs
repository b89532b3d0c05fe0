//! Property-based tests for the search pipeline.
//!
//! These use proptest to check the filter, highlighter and debouncer
//! invariants across randomly generated inputs.

use std::time::{Duration, Instant};

use hilite::{
    concat, filter_indices, highlight_parts, AppConfig, Catalog, Debouncer, Record, SearchSession,
    Span,
};
use proptest::prelude::*;

/// Short strings over a small alphabet so matches actually happen
fn arb_text() -> impl Strategy<Value = String> {
    "[aAbB é.İ]{0,24}"
}

fn arb_query() -> impl Strategy<Value = String> {
    "[aAbB é.İ]{0,4}"
}

fn arb_records() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(
        (arb_text(), arb_text()).prop_map(|(title, description)| Record::new(title, description)),
        1..8,
    )
}

proptest! {
    #[test]
    fn spans_reassemble_the_text(text in arb_text(), query in arb_query()) {
        let spans = highlight_parts(&text, &query);
        prop_assert_eq!(concat(&spans), text.clone());
        prop_assert!(!spans.is_empty());
    }

    #[test]
    fn text_highlighted_by_itself_is_lossless(text in arb_text()) {
        let spans = highlight_parts(&text, &text);
        prop_assert_eq!(concat(&spans), text.clone());
        if !text.is_empty() {
            prop_assert_eq!(spans, vec![Span::Match(text.as_str())]);
        }
    }

    #[test]
    fn matched_spans_equal_query_ignoring_case(text in arb_text(), query in "[aAbB]{1,3}") {
        for span in highlight_parts(&text, &query) {
            if let Span::Match(m) = span {
                prop_assert_eq!(m.to_lowercase(), query.to_lowercase());
            }
        }
    }

    #[test]
    fn filtering_never_adds_results(records in arb_records(), query in arb_query()) {
        let all = filter_indices(&records, "");
        let some = filter_indices(&records, &query);
        prop_assert_eq!(all.len(), records.len());
        prop_assert!(some.iter().all(|idx| all.contains(idx)));
        // Catalog order is preserved
        prop_assert!(some.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn filtering_ignores_case(records in arb_records(), query in "[abAB]{1,3}") {
        prop_assert_eq!(
            filter_indices(&records, &query.to_lowercase()),
            filter_indices(&records, &query.to_uppercase())
        );
    }

    #[test]
    fn burst_emits_once_with_last_value(
        values in prop::collection::vec(any::<u32>(), 1..20),
        gap_ms in 0u64..399,
    ) {
        let delay = Duration::from_millis(400);
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(delay);
        let mut emitted = Vec::new();

        let mut now = t0;
        for value in &values {
            prop_assert_eq!(debouncer.update(*value, now), None);
            emitted.extend(debouncer.poll(now));
            now += Duration::from_millis(gap_ms);
        }

        let last_update = now - Duration::from_millis(gap_ms);
        for step in 0..10u32 {
            emitted.extend(debouncer.poll(last_update + delay * step / 2));
        }

        prop_assert_eq!(emitted, vec![*values.last().unwrap()]);
    }
}

#[test]
fn every_sample_result_has_a_highlight() {
    let config = AppConfig {
        debounce_ms: 0,
        ..Default::default()
    };
    for query in ["test", "  Lorem", "DESERUNT", "o"] {
        let mut session = SearchSession::new(Catalog::sample(), &config);
        session.set_query(query, Instant::now());
        for row in session.rows() {
            let highlighted = row
                .title_spans
                .iter()
                .chain(&row.description_spans)
                .any(Span::is_match);
            assert!(highlighted, "no highlight for {:?} in {:?}", query, row.title);
        }
    }
}

#[test]
fn test_and_upper_test_select_the_same_records() {
    let catalog = Catalog::sample();
    assert_eq!(
        filter_indices(catalog.records(), "test"),
        filter_indices(catalog.records(), "TEST")
    );
}
