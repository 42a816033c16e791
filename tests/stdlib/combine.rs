//! Integration tests for zip, flatten, intersection and difference

use sundry_foundation::{Seq, Value};
use sundry_stdlib::{difference, flatten, intersection, zip};

use crate::ints;

fn strs(items: &[&str]) -> Seq<Value> {
    items.iter().copied().map(Value::from).collect()
}

fn seq(items: Vec<Value>) -> Value {
    Value::Seq(items.into())
}

// =============================================================================
// zip
// =============================================================================

#[test]
fn zip_groups_by_position() {
    let names = strs(&["moe", "larry", "curly"]);
    let ages = ints(&[30, 40, 50]);
    let flags: Seq<Value> = vec![Value::Bool(true), Value::Bool(false), Value::Bool(false)].into();

    let zipped = zip(&[names, ages, flags]);
    assert_eq!(zipped.len(), 3);
    assert_eq!(
        zipped.get(0),
        Some(&seq(vec![Value::from("moe"), Value::Int(30), Value::Bool(true)]))
    );
    assert_eq!(
        zipped.get(2),
        Some(&seq(vec![Value::from("curly"), Value::Int(50), Value::Bool(false)]))
    );
}

#[test]
fn zip_uneven_letters_and_numbers() {
    let zipped = zip(&[strs(&["a", "b", "c", "d"]), ints(&[1, 2, 3])]);
    let expected: Seq<Value> = vec![
        seq(vec![Value::from("a"), Value::Int(1)]),
        seq(vec![Value::from("b"), Value::Int(2)]),
        seq(vec![Value::from("c"), Value::Int(3)]),
        seq(vec![Value::from("d"), Value::Absent]),
    ]
    .into();
    assert_eq!(zipped, expected);
}

#[test]
fn zip_pads_short_inputs_with_absent() {
    let zipped = zip(&[ints(&[1, 2, 3]), ints(&[4])]);
    assert_eq!(zipped.get(1), Some(&seq(vec![Value::Int(2), Value::Absent])));
    assert_eq!(zipped.get(2), Some(&seq(vec![Value::Int(3), Value::Absent])));
}

#[test]
fn zip_nothing() {
    assert!(zip(&[]).is_empty());
    assert!(zip(&[Seq::new(), Seq::new()]).is_empty());
}

// =============================================================================
// flatten
// =============================================================================

fn nested() -> Seq<Value> {
    vec![
        Value::Int(1),
        seq(vec![Value::Int(2)]),
        seq(vec![Value::Int(3), seq(vec![seq(vec![seq(vec![Value::Int(4)])])])]),
    ]
    .into()
}

#[test]
fn flatten_deep() {
    assert_eq!(flatten(&nested(), false), ints(&[1, 2, 3, 4]));
}

#[test]
fn flatten_shallow() {
    let expected: Seq<Value> = vec![
        Value::Int(1),
        Value::Int(2),
        Value::Int(3),
        seq(vec![seq(vec![seq(vec![Value::Int(4)])])]),
    ]
    .into();
    assert_eq!(flatten(&nested(), true), expected);
}

#[test]
fn flatten_shallow_two_levels() {
    let input: Seq<Value> = vec![
        Value::Int(1),
        seq(vec![Value::Int(2), seq(vec![Value::Int(3)])]),
    ]
    .into();
    let expected: Seq<Value> = vec![Value::Int(1), Value::Int(2), seq(vec![Value::Int(3)])].into();
    assert_eq!(flatten(&input, true), expected);
}

#[test]
fn flatten_leaves_mappings_alone() {
    let record = Value::Dict([(Value::from("a"), Value::Int(1))].into_iter().collect());
    let input: Seq<Value> = vec![seq(vec![record.clone()]), Value::Nil].into();
    let expected: Seq<Value> = vec![record, Value::Nil].into();
    assert_eq!(flatten(&input, false), expected);
}

// =============================================================================
// intersection / difference
// =============================================================================

#[test]
fn intersection_of_three() {
    let common = intersection(&[ints(&[1, 2, 3]), ints(&[101, 2, 1, 10]), ints(&[2, 1])]);
    assert_eq!(common, ints(&[1, 2]));
}

#[test]
fn intersection_keeps_first_order_and_dedupes() {
    let common = intersection(&[ints(&[1, 2, 3]), ints(&[2, 3, 4]), ints(&[2, 5])]);
    assert_eq!(common, ints(&[2]));

    let doubled = intersection(&[ints(&[3, 3, 1, 1]), ints(&[1, 3])]);
    assert_eq!(doubled, ints(&[3, 1]));
}

#[test]
fn intersection_single_input_is_uniq() {
    assert_eq!(intersection(&[ints(&[1, 1, 2])]), ints(&[1, 2]));
    assert!(intersection(&[]).is_empty());
}

#[test]
fn difference_removes_others() {
    assert_eq!(difference(&ints(&[1, 2, 3, 4]), &[ints(&[2, 4])]), ints(&[1, 3]));
    assert_eq!(
        difference(&ints(&[1, 2, 3, 4, 5]), &[ints(&[5, 2, 10]), ints(&[1])]),
        ints(&[3, 4])
    );
}

#[test]
fn difference_without_others_dedupes() {
    assert_eq!(difference(&ints(&[1, 1, 2]), &[]), ints(&[1, 2]));
}
