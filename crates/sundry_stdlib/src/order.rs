//! Folding, sorting and shuffling.

use rand::Rng;
use sundry_foundation::{Collection, Error, Result, Seq, Value};

/// Left fold over the values of a collection.
///
/// With `initial` the fold starts from it; without, the first value seeds the
/// accumulator and folding starts at the second.
///
/// # Errors
///
/// Returns `InvalidArgument` for an empty collection with no `initial`.
pub fn reduce<'a, F>(
    collection: impl Into<Collection<'a>>,
    mut f: F,
    initial: Option<Value>,
) -> Result<Value>
where
    F: FnMut(Value, &Value) -> Value,
{
    try_reduce(collection, |acc, value| Ok(f(acc, value)), initial)
}

/// [`reduce`] with a fallible reducer. The first error ends the fold.
///
/// # Errors
///
/// Returns the reducer's error, or `InvalidArgument` for an empty collection
/// with no `initial`.
pub fn try_reduce<'a, F>(
    collection: impl Into<Collection<'a>>,
    mut f: F,
    initial: Option<Value>,
) -> Result<Value>
where
    F: FnMut(Value, &Value) -> Result<Value>,
{
    let collection: Collection<'a> = collection.into();
    let mut values = collection.values();
    let mut acc = match initial {
        Some(seed) => seed,
        None => values.next().cloned().ok_or_else(Error::empty_reduce)?,
    };
    for value in values {
        acc = f(acc, value)?;
    }
    Ok(acc)
}

/// How [`sort_by`] computes each element's sort key.
#[derive(Clone)]
pub enum Criterion<'f> {
    /// Reads a property with [`Value::get`].
    Key(Value),
    /// Computes the key.
    Func(&'f dyn Fn(&Value) -> Value),
}

impl Criterion<'_> {
    fn key_of(&self, element: &Value) -> Value {
        match self {
            Self::Key(property) => element.get(property),
            Self::Func(f) => f(element),
        }
    }
}

impl From<&str> for Criterion<'_> {
    fn from(property: &str) -> Self {
        Self::Key(Value::from(property))
    }
}

impl From<Value> for Criterion<'_> {
    fn from(property: Value) -> Self {
        Self::Key(property)
    }
}

impl std::fmt::Debug for Criterion<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Key(property) => write!(f, "Criterion::Key({property:?})"),
            Self::Func(_) => write!(f, "Criterion::Func(..)"),
        }
    }
}

/// Sorts ascending by computed key.
///
/// The sort is stable. Keys compare with [`Value::sort_cmp`], which places
/// [`Value::Absent`] after everything else. Each key is computed once.
#[must_use]
pub fn sort_by(seq: &Seq<Value>, criterion: &Criterion<'_>) -> Seq<Value> {
    let mut keyed: Vec<(Value, &Value)> = seq
        .iter()
        .map(|element| (criterion.key_of(element), element))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| a.sort_cmp(b));
    keyed.into_iter().map(|(_, element)| element.clone()).collect()
}

/// Returns a uniformly random permutation using the thread-local RNG.
#[must_use]
pub fn shuffle(seq: &Seq<Value>) -> Seq<Value> {
    shuffle_with(seq, &mut rand::thread_rng())
}

/// Fisher–Yates over a copy of `seq`, drawing from `rng`.
///
/// A seeded generator gives a reproducible permutation.
#[must_use]
pub fn shuffle_with<R: Rng + ?Sized>(seq: &Seq<Value>, rng: &mut R) -> Seq<Value> {
    let mut items: Vec<Value> = seq.iter().cloned().collect();
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
    items.into()
}
