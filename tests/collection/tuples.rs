//! Integration tests for tuple-shaped collections

use fluent::{Collection, ErrorKind, Key, Value};

fn record(id: impl Into<Value>, name: &str) -> Value {
    Value::Map(Collection::of([("id", id.into()), ("name", Value::from(name))]))
}

#[test]
fn col_returns_values_from_specified_column() {
    let c = Collection::from(vec![
        record(1, "John"),
        record(2, "Jane"),
        record(3, "Alice"),
    ]);
    let names = c.col("name").unwrap();
    assert_eq!(names.implode(","), "John,Jane,Alice");
    assert_eq!(names.keys().implode(","), "0,1,2");
}

#[test]
fn col_fails_on_missing_field() {
    let c = Collection::from(vec![record(1, "John"), Value::Map(Collection::of([("id", Value::Int(2))]))]);
    let err = c.col("name").unwrap_err();
    match err.kind {
        ErrorKind::MissingField { field, key } => {
            assert_eq!(field, "name");
            assert_eq!(key, Key::Int(1));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(err.context.unwrap().operation, Some("col"));
}

#[test]
fn tuples_skips_scalars() {
    let c = Collection::from(vec![record(1, "a"), Value::Int(2), Value::Nil]);
    assert_eq!(c.tuples().count(), 1);
}

#[test]
fn tuples_identity_requires_non_empty_id() {
    let c = Collection::from(vec![record("", "blank"), record("x", "named"), Value::from("scalar")]);
    let named = c.tuples_identity("id");
    assert_eq!(named.col("name").unwrap().implode(""), "named");
}

#[test]
fn tuples_unique_last_occurrence_replaces_earlier() {
    let c = Collection::from(vec![
        Value::Map(Collection::of([("id", Value::from("a")), ("v", Value::Int(1))])),
        Value::Map(Collection::of([("id", Value::from("a")), ("v", Value::Int(2))])),
        Value::Map(Collection::of([("id", Value::from("b")), ("v", Value::Int(3))])),
    ]);
    let unique = c.tuples_unique("id").unwrap();
    assert_eq!(unique.count(), 2);
    assert_eq!(unique.col("v").unwrap().implode(","), "2,3");
    assert_eq!(unique.keys().implode(","), "0,1");
}

#[test]
fn flat_one_level() {
    let c = Collection::from(vec![
        Value::from(vec![1, 2]),
        Value::from(vec![3]),
        Value::from(vec![4, 5]),
    ]);
    assert_eq!(c.flat().unwrap().implode(","), "1,2,3,4,5");
}

#[test]
fn flat_keeps_nested_tuples_intact() {
    let inner = Value::from(vec![record(1, "a")]);
    let c = Collection::from(vec![inner, Value::from(vec![record(2, "b")])]);
    let flat = c.flat().unwrap();
    assert_eq!(flat.count(), 2);
    assert!(flat.values_iter().all(Value::is_tuple));
}

#[test]
fn flat_fails_on_scalar_element() {
    let c = Collection::of([("list", Value::from(vec![1])), ("oops", Value::from("x"))]);
    let err = c.flat().unwrap_err();
    match err.kind {
        ErrorKind::NotASequence { key, .. } => assert_eq!(key, Key::from("oops")),
        other => panic!("unexpected error: {other}"),
    }
}
