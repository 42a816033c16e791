//! Integration tests for extend and defaults

use sundry_foundation::{Dict, Value};
use sundry_stdlib::{defaults, extend};

fn dict(pairs: &[(&str, Value)]) -> Dict<Value, Value> {
    pairs
        .iter()
        .map(|(k, v)| (Value::from(*k), v.clone()))
        .collect()
}

#[test]
fn extend_copies_source_fields() {
    let target = dict(&[("name", Value::from("moe"))]);
    let merged = extend(&target, &[dict(&[("age", Value::Int(50))])]);
    assert_eq!(
        merged,
        dict(&[("name", Value::from("moe")), ("age", Value::Int(50))])
    );
}

#[test]
fn extend_overwrites_in_source_order() {
    let target = dict(&[("x", Value::Int(1))]);
    let merged = extend(
        &target,
        &[dict(&[("x", Value::Int(2))]), dict(&[("x", Value::Int(3))])],
    );
    assert_eq!(merged.get(&Value::from("x")), Some(&Value::Int(3)));
}

#[test]
fn extend_copies_absent_and_nil_values() {
    let merged = extend(
        &dict(&[("a", Value::Int(1))]),
        &[dict(&[("a", Value::Nil), ("b", Value::Absent)])],
    );
    assert_eq!(merged.get(&Value::from("a")), Some(&Value::Nil));
    assert!(merged.contains_key(&Value::from("b")));
}

#[test]
fn defaults_fill_only_missing_keys() {
    let ice_cream = dict(&[("flavor", Value::from("chocolate"))]);
    let filled = defaults(
        &ice_cream,
        &[dict(&[("flavor", Value::from("vanilla")), ("sprinkles", Value::from("lots"))])],
    );
    assert_eq!(
        filled,
        dict(&[("flavor", Value::from("chocolate")), ("sprinkles", Value::from("lots"))])
    );
}

#[test]
fn defaults_earlier_source_wins() {
    let filled = defaults(
        &Dict::new(),
        &[dict(&[("k", Value::Int(1))]), dict(&[("k", Value::Int(2))])],
    );
    assert_eq!(filled.get(&Value::from("k")), Some(&Value::Int(1)));
}

#[test]
fn defaults_keep_falsy_existing_values() {
    let target = dict(&[("count", Value::Int(0)), ("label", Value::from(""))]);
    let source = dict(&[("count", Value::Int(5)), ("label", Value::from("x"))]);
    let filled = defaults(&target, &[source]);
    assert_eq!(filled, target);
}

#[test]
fn defaults_target_wins_against_a_larger_source() {
    let target = dict(&[("flavor", Value::from("chocolate"))]);
    let source = dict(&[
        ("flavor", Value::from("vanilla")),
        ("sprinkles", Value::from("lots")),
        ("cone", Value::Bool(true)),
        ("scoops", Value::Int(2)),
    ]);
    let filled = defaults(&target, &[source]);
    assert_eq!(filled.get(&Value::from("flavor")), Some(&Value::from("chocolate")));
    assert_eq!(filled.len(), 4);
}

#[test]
fn extend_source_wins_against_a_larger_target() {
    let target = dict(&[
        ("name", Value::from("moe")),
        ("age", Value::Int(40)),
        ("hair", Value::from("bowl")),
    ]);
    let merged = extend(&target, &[dict(&[("age", Value::Int(41))])]);
    assert_eq!(merged.get(&Value::from("age")), Some(&Value::Int(41)));
    assert_eq!(merged.len(), 3);
}
