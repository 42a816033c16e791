//! Single-pass iteration and query primitives.

use sundry_foundation::{Collection, Seq, Set, Value};

/// Calls `f(value, key, collection)` once per element or pair.
///
/// Sequence keys are `Value::Int(index)`; mapping order is unspecified.
pub fn each<'a, F>(collection: impl Into<Collection<'a>>, mut f: F)
where
    F: FnMut(&Value, &Value, Collection<'a>),
{
    let collection: Collection<'a> = collection.into();
    for (key, value) in collection.entries() {
        f(value, &key, collection);
    }
}

/// Returns `f(element)` for every element, same length and order.
#[must_use]
pub fn map<F>(seq: &Seq<Value>, f: F) -> Seq<Value>
where
    F: FnMut(&Value) -> Value,
{
    seq.iter().map(f).collect()
}

/// Keeps the elements for which `predicate` holds.
#[must_use]
pub fn filter<F>(seq: &Seq<Value>, mut predicate: F) -> Seq<Value>
where
    F: FnMut(&Value) -> bool,
{
    seq.iter().filter(|v| predicate(v)).cloned().collect()
}

/// Keeps the elements for which `predicate` does not hold.
#[must_use]
pub fn reject<F>(seq: &Seq<Value>, mut predicate: F) -> Seq<Value>
where
    F: FnMut(&Value) -> bool,
{
    seq.iter().filter(|v| !predicate(v)).cloned().collect()
}

/// True iff every value passes `predicate`, or is truthy when no predicate
/// is given. Vacuously true for an empty collection.
#[must_use]
pub fn every<'a>(
    collection: impl Into<Collection<'a>>,
    predicate: Option<&dyn Fn(&Value) -> bool>,
) -> bool {
    let collection: Collection<'a> = collection.into();
    match predicate {
        Some(pred) => collection.values().all(pred),
        None => collection.values().all(Value::is_truthy),
    }
}

/// True iff at least one value passes `predicate`, or is truthy when no
/// predicate is given. False for an empty collection.
#[must_use]
pub fn some<'a>(
    collection: impl Into<Collection<'a>>,
    predicate: Option<&dyn Fn(&Value) -> bool>,
) -> bool {
    let collection: Collection<'a> = collection.into();
    match predicate {
        Some(pred) => collection.values().any(pred),
        None => collection.values().any(Value::is_truthy),
    }
}

/// True iff some value is strictly equal to `target`.
#[must_use]
pub fn contains<'a>(collection: impl Into<Collection<'a>>, target: &Value) -> bool {
    let collection: Collection<'a> = collection.into();
    collection.values().any(|v| v == target)
}

/// Index of the first element strictly equal to `target`.
///
/// `None` means not found.
#[must_use]
pub fn index_of(seq: &Seq<Value>, target: &Value) -> Option<usize> {
    seq.iter().position(|v| v == target)
}

/// Drops repeated values, keeping first occurrences in order.
#[must_use]
pub fn uniq(seq: &Seq<Value>) -> Seq<Value> {
    let mut seen = Set::new();
    let mut result = Vec::new();
    for item in seq {
        if !seen.contains(item) {
            seen = seen.insert(item.clone());
            result.push(item.clone());
        }
    }
    result.into()
}

/// Reads `property` off every element.
///
/// Elements without the property contribute [`Value::Absent`].
#[must_use]
pub fn pluck(seq: &Seq<Value>, property: &Value) -> Seq<Value> {
    seq.iter().map(|record| record.get(property)).collect()
}
