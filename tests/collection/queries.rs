//! Integration tests for membership and selection queries

use fluent::{Collection, ErrorKind, Key, Value};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn any_returns_true_when_collection_is_not_empty() {
    assert!(Collection::from(vec![1, 2, 3]).any());
}

#[test]
fn any_returns_false_when_collection_is_empty() {
    assert!(!Collection::<i32>::of_empty().any());
}

#[test]
fn none_returns_true_when_collection_is_empty() {
    assert!(Collection::<i32>::of_empty().none());
}

#[test]
fn none_returns_false_when_collection_is_not_empty() {
    assert!(!Collection::from(vec![1, 2, 3]).none());
}

#[test]
fn contains_returns_true_when_collection_contains_item() {
    assert!(Collection::from(vec![1, 2, 3]).contains(&2));
}

#[test]
fn contains_returns_false_when_collection_does_not_contain_item() {
    assert!(!Collection::from(vec![1, 2, 3]).contains(&4));
}

#[test]
fn contains_does_not_coerce() {
    let c = Collection::from(vec![Value::from("2")]);
    assert!(!c.contains(&Value::Int(2)));
    assert!(!c.contains(&Value::Float(2.0)));

    let c = Collection::from(vec![Value::Int(0)]);
    assert!(!c.contains(&Value::Bool(false)));
    assert!(!c.contains(&Value::Nil));
}

#[test]
fn contains_treats_signed_zeros_as_identical() {
    let c = Collection::from(vec![Value::Float(-0.0)]);
    assert!(c.contains(&Value::Float(0.0)));
}

#[test]
fn contains_never_matches_nan() {
    let c = Collection::from(vec![Value::Float(f64::NAN), Value::Int(1)]);
    assert!(!c.contains(&Value::Float(f64::NAN)));
    assert_eq!(c.variant(Value::Float(f64::NAN), Some(Value::Int(9))), Some(Value::Int(9)));
}

#[test]
fn count_returns_number_of_items() {
    assert_eq!(Collection::from(vec![1, 2, 3]).count(), 3);
}

#[test]
fn first_returns_first_item() {
    assert_eq!(Collection::from(vec![1, 2, 3]).first(), Some(&1));
}

#[test]
fn first_returns_none_when_empty() {
    assert_eq!(Collection::<i32>::of_empty().first(), None);
}

#[test]
fn first_follows_insertion_order_not_key_order() {
    let c = Collection::of([(Key::Int(9), "nine"), (Key::Int(1), "one")]);
    assert_eq!(c.first(), Some(&"nine"));
}

#[test]
fn min_and_max() {
    let c = Collection::of([("a", 4.5), ("b", -1.0), ("c", 2.0)]);
    assert_eq!(c.min().unwrap(), &-1.0);
    assert_eq!(c.max().unwrap(), &4.5);
}

#[test]
fn min_on_empty_is_a_precondition_failure() {
    let err = Collection::<Value>::of_empty().min().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::EmptyCollection { operation: "min" }));
}

#[test]
fn variant_examples() {
    let c = Collection::from(vec![1, 2, 3]);
    assert_eq!(c.variant(5, Some(9)), Some(9));
    assert_eq!(c.variant(2, Some(9)), Some(2));
    assert_eq!(c.variant(5, None), Some(1));
}

#[test]
fn variant_key_examples() {
    let c = Collection::of([("small", 1), ("large", 3)]);
    assert_eq!(c.variant_key(Some(Key::from("large")), Some(Key::from("small"))), Some(&3));
    assert_eq!(c.variant_key(Some(Key::from("huge")), Some(Key::from("small"))), Some(&1));
    assert_eq!(c.variant_key(Some(Key::from("huge")), Some(Key::from("tiny"))), None);
    assert_eq!(c.variant_key(None, None), Some(&1));
}

#[test]
fn random_covers_every_element() {
    let c = Collection::from(vec!['a', 'b', 'c']);
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        seen.insert(*c.random_with(&mut rng).unwrap());
    }
    assert_eq!(seen.len(), 3);
}
