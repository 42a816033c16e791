//! Slicing from either end of a sequence.

use sundry_foundation::{Seq, Value};

/// Returns the head of a sequence.
///
/// With `n == None` this is the first element, or [`Value::Absent`] when the
/// sequence is empty. With `Some(n)` it is a new sequence of the first `n`
/// elements: the whole sequence when `n >= len`, empty when `n <= 0`.
#[must_use]
pub fn first(seq: &Seq<Value>, n: Option<i64>) -> Value {
    match n {
        None => seq.first().cloned().unwrap_or(Value::Absent),
        Some(n) => Value::Seq(seq.take(clamp_count(n))),
    }
}

/// Returns the tail of a sequence.
///
/// Mirrors [`first`]: the last element, or the last `n` elements in their
/// original order.
#[must_use]
pub fn last(seq: &Seq<Value>, n: Option<i64>) -> Value {
    match n {
        None => seq.last().cloned().unwrap_or(Value::Absent),
        Some(n) => {
            let count = clamp_count(n).min(seq.len());
            Value::Seq(seq.skip(seq.len() - count))
        }
    }
}

/// Negative counts behave like zero.
fn clamp_count(n: i64) -> usize {
    if n <= 0 {
        0
    } else {
        usize::try_from(n).unwrap_or(usize::MAX)
    }
}
