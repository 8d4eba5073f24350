//! Integration tests for construction, export and indexable access

use fluent::{Collection, Key, Value};

// =============================================================================
// Construction & Export
// =============================================================================

#[test]
fn of_round_trips_to_array() {
    let pairs = vec![
        (Key::from("b"), Value::Int(2)),
        (Key::Int(4), Value::from("x")),
        (Key::from("a"), Value::Nil),
    ];
    let c = Collection::of(pairs.clone());
    assert_eq!(c.to_array(), pairs);
    assert_eq!(c.all(), pairs);
}

#[test]
fn of_empty_has_nothing() {
    let c: Collection<Value> = Collection::of_empty();
    assert!(c.none());
    assert_eq!(c.count(), 0);
    assert!(c.to_array().is_empty());
}

#[test]
fn from_vec_is_a_list() {
    let c = Collection::from(vec!["a", "b"]);
    assert_eq!(c.to_array(), vec![(Key::Int(0), "a"), (Key::Int(1), "b")]);
}

#[test]
fn collect_builds_a_list() {
    let c: Collection<i64> = (10..13).collect();
    assert_eq!(c.keys().to_array(), vec![
        (Key::Int(0), Key::Int(0)),
        (Key::Int(1), Key::Int(1)),
        (Key::Int(2), Key::Int(2)),
    ]);
}

#[test]
fn iteration_follows_insertion_order() {
    let c = Collection::of([("z", 1), ("a", 2), ("m", 3)]);
    let seen: Vec<String> = c.iter().map(|(k, v)| format!("{k}={v}")).collect();
    assert_eq!(seen, vec!["z=1", "a=2", "m=3"]);

    let owned: Vec<(Key, i32)> = c.into_iter().collect();
    assert_eq!(owned[2], (Key::from("m"), 3));
}

// =============================================================================
// Indexable Access
// =============================================================================

#[test]
fn read_missing_key_is_absent() {
    let c = Collection::from(vec![1]);
    assert_eq!(c.get(1), None);
    assert_eq!(c.get("missing"), None);
}

#[test]
fn existence_check_counts_nil_values() {
    let c = Collection::of([("a", Value::Nil)]);
    assert!(c.contains_key("a"));
    assert!(!c.contains_key("b"));
}

#[test]
fn write_with_key_sets_or_overwrites() {
    let mut c = Collection::from(vec![1, 2]);
    c.set(0, 10);
    c.set("x", 3);
    assert_eq!(c.to_array(), vec![
        (Key::Int(0), 10),
        (Key::Int(1), 2),
        (Key::from("x"), 3),
    ]);
}

#[test]
fn append_does_not_disturb_existing_keys() {
    let mut c = Collection::of([(Key::Int(3), 'a'), (Key::from("s"), 'b')]);
    let key = c.push('c').unwrap();
    assert_eq!(key, Key::Int(4));
    assert_eq!(c.get(3), Some(&'a'));
    assert_eq!(c.get("s"), Some(&'b'));
    assert_eq!(c.get(4), Some(&'c'));
}

#[test]
fn delete_is_a_no_op_for_missing_keys() {
    let mut c = Collection::of([("a", 1)]);
    assert_eq!(c.remove("zzz"), None);
    assert_eq!(c.remove("a"), Some(1));
    assert!(c.none());
}

#[test]
fn derived_collections_do_not_alias() {
    let mut source = Collection::from(vec![1, 2, 3]);
    let filtered = source.filter(|v, _| *v > 1);
    let mapped = source.map(|v, _| v * 2);

    source.set(1, 100);
    source.remove(2);
    source.push(7).unwrap();

    assert_eq!(filtered.values_iter().copied().collect::<Vec<_>>(), vec![2, 3]);
    assert_eq!(mapped.values_iter().copied().collect::<Vec<_>>(), vec![2, 4, 6]);

    let mut derived = filtered.clone();
    derived.set(1, -1);
    assert_eq!(filtered.get(1), Some(&2));
}
