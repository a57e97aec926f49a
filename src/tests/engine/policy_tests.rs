//! Tests for ErrorPolicy behavior in the Splitter.

use std::sync::Arc;

use crate::config::SplitOptions;
use crate::engine::Splitter;
use crate::error::{ErrorPolicy, SplitError};
use crate::io::InMemorySink;

fn splitter(policy: ErrorPolicy) -> (Splitter, Arc<InMemorySink>) {
    let sink = Arc::new(InMemorySink::new("out"));
    let splitter = Splitter::new(SplitOptions::default().with_error_policy(policy))
        .with_output(sink.clone())
        .with_log(Box::new(std::io::sink()));
    (splitter, sink)
}

const MIXED: &str = "\
kind: Pod
metadata:
  name: a
---
metadata:
  name: nokind
---
kind: Pod
---
kind: Pod
metadata:
  name: b
";

#[test]
fn error_policy_default_is_fast_fail() {
    assert_eq!(ErrorPolicy::default(), ErrorPolicy::FastFail);
    assert_eq!(SplitOptions::default().error_policy, ErrorPolicy::FastFail);
}

#[test]
fn fast_fail_returns_the_first_error_alone() {
    let (mut splitter, sink) = splitter(ErrorPolicy::FastFail);

    let err = splitter.split_bytes(MIXED.as_bytes()).unwrap_err();

    assert!(matches!(err, SplitError::Schema { index: 1, .. }));
    assert_eq!(sink.names(), vec!["pod-a.yaml"]);
}

#[test]
fn accumulate_keeps_going_and_reports_every_failure() {
    let (mut splitter, sink) = splitter(ErrorPolicy::Accumulate);

    let err = splitter.split_bytes(MIXED.as_bytes()).unwrap_err();

    let SplitError::Aggregate(agg) = err else {
        panic!("expected aggregate error");
    };
    assert_eq!(agg.len(), 2);
    let indices: Vec<_> = agg.errors.iter().map(SplitError::document_index).collect();
    assert_eq!(indices, vec![Some(1), Some(2)]);
    assert_eq!(sink.names(), vec!["pod-a.yaml", "pod-b.yaml"]);
}

#[test]
fn accumulate_still_stops_on_decode_errors() {
    let (mut splitter, sink) = splitter(ErrorPolicy::Accumulate);
    let input = "kind: Pod\n---\nkind: Pod\nmetadata:\n  name: a\n---\nkind: [oops\n---\nkind: Pod\nmetadata:\n  name: b\n";

    let err = splitter.split_bytes(input.as_bytes()).unwrap_err();

    let SplitError::Aggregate(agg) = err else {
        panic!("expected aggregate error");
    };
    assert_eq!(agg.len(), 2);
    assert!(matches!(agg.errors[0], SplitError::Schema { index: 0, .. }));
    assert!(matches!(agg.errors[1], SplitError::Decode { index: 2, .. }));
    assert_eq!(sink.names(), vec!["pod-a.yaml"]);
}

#[test]
fn accumulate_with_no_failures_succeeds() {
    let (mut splitter, _) = splitter(ErrorPolicy::Accumulate);

    let report = splitter
        .split_bytes(b"kind: Pod\nmetadata:\n  name: a\n")
        .expect("clean input");

    assert_eq!(report.written, vec!["pod-a.yaml"]);
}

#[test]
fn splitter_keeps_its_options() {
    let options = SplitOptions::new("out")
        .with_error_policy(ErrorPolicy::Accumulate)
        .with_file_mode(0o600);
    let splitter = Splitter::new(options.clone());

    assert_eq!(splitter.options(), &options);
    assert_eq!(splitter.options().out_dir(), std::path::Path::new("out"));
    assert_eq!(splitter.options().file_mode, 0o600);
}
