use serde_yaml::Value;

use crate::format::{Decoded, Document, FormatError, deserialize_yaml_stream, serialize_document};

fn records(input: &str) -> Vec<Document> {
    deserialize_yaml_stream(input.as_bytes())
        .filter_map(|item| match item.expect("documents should parse") {
            Decoded::Record(doc) => Some(doc),
            Decoded::Empty => None,
        })
        .collect()
}

#[test]
fn yaml_stream_reads_multiple_documents() {
    let input = "---\nkind: Pod\nmetadata:\n  name: a\n---\nkind: Service\nmetadata:\n  name: b\n";

    let docs = records(input);
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].get("kind"), Some(&Value::from("Pod")));
    assert_eq!(docs[1].get("kind"), Some(&Value::from("Service")));
}

#[test]
fn yaml_stream_without_leading_separator() {
    let docs = records("kind: Pod\n---\nkind: Service\n");
    assert_eq!(docs.len(), 2);
}

#[test]
fn yaml_stream_marks_empty_documents() {
    let input = "---\n# only a comment\n---\nkind: Pod\n---\n{}\n";

    let items: Vec<Decoded> = deserialize_yaml_stream(input.as_bytes())
        .collect::<Result<_, _>>()
        .expect("documents should parse");

    assert_eq!(items.len(), 3);
    assert_eq!(items[0], Decoded::Empty);
    assert!(matches!(items[1], Decoded::Record(_)));
    assert_eq!(items[2], Decoded::Empty);
}

#[test]
fn yaml_stream_of_nothing_yields_no_records() {
    assert!(records("").is_empty());
}

#[test]
fn yaml_stream_rejects_scalar_document() {
    let mut iter = deserialize_yaml_stream(b"just a string\n");
    let err = iter.next().expect("one document").unwrap_err();
    assert!(matches!(err, FormatError::NotAMapping("string")));
}

#[test]
fn yaml_stream_rejects_sequence_document() {
    let mut iter = deserialize_yaml_stream(b"- a\n- b\n");
    let err = iter.next().expect("one document").unwrap_err();
    assert!(matches!(err, FormatError::NotAMapping("sequence")));
}

#[test]
fn yaml_stream_reports_syntax_error_at_the_broken_document() {
    let input = "kind: Pod\nmetadata:\n  name: ok\n---\nkind: [unclosed\n";

    let mut iter = deserialize_yaml_stream(input.as_bytes());
    assert!(matches!(iter.next(), Some(Ok(Decoded::Record(_)))));
    assert!(matches!(iter.next(), Some(Err(FormatError::Serde(_)))));
}

#[test]
fn serialize_document_keeps_every_field_and_order() {
    let input = "kind: Deployment\napiVersion: apps/v1\nmetadata:\n  name: web\n  labels:\n    app: web\nspec:\n  replicas: 3\n  paused: false\n  ports:\n  - 80\n  - 443\n";
    let original = records(input).remove(0);

    let text = serialize_document(&original).expect("serialize yaml");
    let reparsed: Document = serde_yaml::from_str(&text).expect("output must be valid yaml");

    assert_eq!(reparsed, original);
    let keys: Vec<&str> = reparsed.keys().filter_map(Value::as_str).collect();
    assert_eq!(keys, ["kind", "apiVersion", "metadata", "spec"]);
}

#[test]
fn yaml_stream_resolves_merge_keys() {
    let input = "defaults: &defaults\n  name: foo\n  namespace: bar\nkind: Pod\nmetadata:\n  <<: *defaults\n  namespace: prod\n";

    let docs = records(input);
    let metadata = docs[0]
        .get("metadata")
        .and_then(Value::as_mapping)
        .expect("metadata mapping");

    assert_eq!(metadata.get("name"), Some(&Value::from("foo")));
    assert_eq!(metadata.get("namespace"), Some(&Value::from("prod")));
    assert!(metadata.get("<<").is_none());
}
