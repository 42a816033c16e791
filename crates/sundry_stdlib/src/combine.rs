//! Combinators over several sequences at once.

use sundry_foundation::{Seq, Set, Value};

use crate::query::uniq;

/// Groups elements by position.
///
/// Tuple `i` is a `Value::Seq` holding element `i` of every input. The result
/// is as long as the longest input; shorter inputs contribute
/// [`Value::Absent`].
#[must_use]
pub fn zip(seqs: &[Seq<Value>]) -> Seq<Value> {
    let len = seqs.iter().map(Seq::len).max().unwrap_or(0);
    (0..len)
        .map(|i| {
            Value::Seq(
                seqs.iter()
                    .map(|seq| seq.get(i).cloned().unwrap_or(Value::Absent))
                    .collect(),
            )
        })
        .collect()
}

/// Flattens nested sequences into their leaves, depth-first.
///
/// With `shallow` only one level of nesting is removed. Mappings are leaves.
#[must_use]
pub fn flatten(seq: &Seq<Value>, shallow: bool) -> Seq<Value> {
    let mut out = Vec::new();
    if shallow {
        for item in seq {
            match item {
                Value::Seq(inner) => out.extend(inner.iter().cloned()),
                leaf => out.push(leaf.clone()),
            }
        }
    } else {
        // Explicit stack so nesting depth is not bounded by the call stack.
        let mut stack = vec![seq.iter()];
        while let Some(top) = stack.last_mut() {
            match top.next() {
                Some(Value::Seq(inner)) => stack.push(inner.iter()),
                Some(leaf) => out.push(leaf.clone()),
                None => {
                    stack.pop();
                }
            }
        }
    }
    out.into()
}

/// Values present in every input, without duplicates.
///
/// Ordered by first occurrence in the first input. No inputs give an empty
/// result.
#[must_use]
pub fn intersection(seqs: &[Seq<Value>]) -> Seq<Value> {
    let Some((head, rest)) = seqs.split_first() else {
        return Seq::new();
    };
    let others: Vec<Set<Value>> = rest
        .iter()
        .map(|seq| seq.iter().cloned().collect())
        .collect();
    uniq(head)
        .into_iter()
        .filter(|value| others.iter().all(|set| set.contains(value)))
        .collect()
}

/// Values of `seq` found in none of `others`, without duplicates.
///
/// Keeps the relative order of `seq`.
#[must_use]
pub fn difference(seq: &Seq<Value>, others: &[Seq<Value>]) -> Seq<Value> {
    let excluded: Set<Value> = others.iter().flat_map(|other| other.iter().cloned()).collect();
    uniq(seq)
        .into_iter()
        .filter(|value| !excluded.contains(value))
        .collect()
}
