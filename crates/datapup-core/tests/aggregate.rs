//! Aggregator behavior: accumulation, isolation, and error reports.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use datapup_core::error::ParseErrorKind;
use datapup_core::Aggregator;

#[test]
fn totals_are_sums_of_applied_deltas() {
    let mut agg = Aggregator::new();
    for d in [3, -1, 10, 0, -2] {
        agg.parse_and_apply(&format!("req:{d}")).unwrap();
    }
    assert_eq!(agg.get("req"), Some(10));
    assert_eq!(agg.len(), 1);
}

#[test]
fn failed_line_does_not_touch_counters() {
    let mut agg = Aggregator::new();
    agg.parse_and_apply("a:4").unwrap();

    let err = agg.parse_and_apply("a:four").unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::InvalidValue);
    assert_eq!(agg.get("a"), Some(4));

    let err = agg.parse_and_apply("bogus").unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::MissingValue);
    assert_eq!(agg.get("bogus"), None);
}

#[test]
fn batch_error_text_is_joined_in_line_order() {
    let mut agg = Aggregator::new();
    let err = agg.handle_datagram("bogus\na:1\na:x").unwrap_err();

    assert_eq!(err.len(), 2);
    assert_eq!(
        err.to_string(),
        "error processing metric: \"bogus\", invalid name/value pair: \"bogus\"\n\
         error processing metric: \"a:x\", can not convert value to int: \"a:x\", invalid digit found in string"
    );
    assert_eq!(agg.get("a"), Some(1));
}

#[test]
fn trailing_newline_reports_empty_line() {
    let mut agg = Aggregator::new();
    let err = agg.handle_datagram("a:1\n").unwrap_err();

    assert_eq!(agg.get("a"), Some(1));
    assert_eq!(err.len(), 1);
    assert_eq!(
        err.to_string(),
        "error processing metric: \"\", invalid name/value pair: \"\""
    );
}

#[test]
fn order_of_distinct_names_does_not_matter() {
    let mut left = Aggregator::new();
    let mut right = Aggregator::new();
    left.handle_datagram("a:1\nb:2\nc:3").unwrap();
    right.handle_datagram("c:3\na:1\nb:2").unwrap();
    assert_eq!(left.snapshot(), right.snapshot());
}

#[test]
fn instances_are_independent() {
    let mut a = Aggregator::new();
    let b = Aggregator::default();
    a.handle_datagram("x:1").unwrap();
    assert_eq!(a.get("x"), Some(1));
    assert!(b.is_empty());
}
