//! Integration tests for persistent collections
//!
//! Tests Seq, Set and Dict: persistence of the original after an insert,
//! union precedence and equality.

use sundry_foundation::{Dict, Seq, Set, Value};

// =============================================================================
// Seq
// =============================================================================

#[test]
fn seq_from_vec_keeps_order() {
    let seq: Seq<i64> = vec![1, 2, 3].into();
    assert_eq!(seq.len(), 3);
    assert_eq!(seq.get(0), Some(&1));
    assert_eq!(seq.get(3), None);
    assert_eq!(seq.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn seq_iterates_in_reverse() {
    let seq: Seq<i64> = (1..=3).collect();
    let reversed: Seq<i64> = seq.iter().rev().copied().collect();
    assert_eq!(reversed, Seq::from(vec![3, 2, 1]));
    assert_eq!(seq.first(), Some(&1));
}

#[test]
fn seq_first_last_on_empty() {
    let empty: Seq<i64> = Seq::new();
    assert!(empty.is_empty());
    assert_eq!(empty.first(), None);
    assert_eq!(empty.last(), None);
}

#[test]
fn seq_take_and_skip_clamp() {
    let seq: Seq<i64> = (1..=5).collect();
    assert_eq!(seq.take(2), Seq::from(vec![1, 2]));
    assert_eq!(seq.take(10), seq);
    assert_eq!(seq.skip(3), Seq::from(vec![4, 5]));
    assert!(seq.skip(10).is_empty());
}

#[test]
fn seq_iterates_by_reference_and_by_value() {
    let seq: Seq<Value> = vec![Value::Int(1), Value::Int(2)].into();
    let borrowed: Vec<&Value> = (&seq).into_iter().collect();
    assert_eq!(borrowed.len(), 2);
    let owned: Vec<Value> = seq.into_iter().collect();
    assert_eq!(owned, vec![Value::Int(1), Value::Int(2)]);
}

#[test]
fn seq_equality_is_elementwise() {
    let a: Seq<Value> = vec![Value::Int(1), Value::from("x")].into();
    let b: Seq<Value> = vec![Value::Int(1), Value::from("x")].into();
    let c: Seq<Value> = vec![Value::Float(1.0), Value::from("x")].into();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

// =============================================================================
// Set
// =============================================================================

#[test]
fn set_insert_is_persistent() {
    let empty: Set<Value> = Set::new();
    let one = empty.insert(Value::Int(1));
    let again = one.insert(Value::Int(1));

    assert!(empty.is_empty());
    assert_eq!(one.len(), 1);
    assert_eq!(again.len(), 1);
    assert!(one.contains(&Value::Int(1)));
    assert!(!one.contains(&Value::Float(1.0)));
}

#[test]
fn set_from_iterator_dedupes() {
    let set: Set<&str> = ["a", "b", "a", "c", "b"].into_iter().collect();
    assert_eq!(set.len(), 3);
    let other: Set<&str> = ["c", "b", "a"].into_iter().collect();
    assert_eq!(set, other);
}

// =============================================================================
// Dict
// =============================================================================

fn dict(pairs: &[(&str, i64)]) -> Dict<Value, Value> {
    pairs
        .iter()
        .map(|(k, v)| (Value::from(*k), Value::Int(*v)))
        .collect()
}

#[test]
fn dict_insert_replaces_and_keeps_original() {
    let base = dict(&[("a", 1)]);
    let replaced = base.insert(Value::from("a"), Value::Int(2));
    let added = base.insert(Value::from("b"), Value::Int(3));

    assert_eq!(base.get(&Value::from("a")), Some(&Value::Int(1)));
    assert_eq!(replaced.get(&Value::from("a")), Some(&Value::Int(2)));
    assert_eq!(replaced.len(), 1);
    assert_eq!(added.len(), 2);
}

#[test]
fn dict_keys_and_values() {
    let d = dict(&[("a", 1), ("b", 2)]);
    let mut keys: Vec<String> = d.keys().map(ToString::to_string).collect();
    keys.sort();
    assert_eq!(keys, vec!["a", "b"]);

    let total: i64 = d.values().filter_map(Value::as_int).sum();
    assert_eq!(total, 3);
}

#[test]
fn dict_union_prefers_other() {
    let left = dict(&[("a", 1), ("b", 2)]);
    let right = dict(&[("b", 20), ("c", 30)]);
    let merged = left.union(&right);
    assert_eq!(merged, dict(&[("a", 1), ("b", 20), ("c", 30)]));
    assert_eq!(left.len(), 2);
}

#[test]
fn dict_union_prefers_other_whatever_the_sizes() {
    let small = dict(&[("k", 1)]);
    let large = dict(&[("k", 2), ("x", 3), ("y", 4), ("z", 5)]);

    assert_eq!(small.union(&large).get(&Value::from("k")), Some(&Value::Int(2)));
    assert_eq!(large.union(&small).get(&Value::from("k")), Some(&Value::Int(1)));
    assert_eq!(large.union(&small).len(), 4);
}

#[test]
fn dict_contains_key_is_strict() {
    let d: Dict<Value, Value> = [(Value::Int(1), Value::Nil)].into_iter().collect();
    assert!(d.contains_key(&Value::Int(1)));
    assert!(!d.contains_key(&Value::Float(1.0)));
    assert!(!d.contains_key(&Value::from("1")));
}
