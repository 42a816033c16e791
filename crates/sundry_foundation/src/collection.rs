//! A borrowed view over either kind of collection.
//!
//! Polymorphic operations (`each`, `contains`, `every`, `some`, `reduce`)
//! take a [`Collection`] and dispatch on its tag once, then iterate
//! uniformly over `(key, value)` entries.

use crate::collections::{Dict, Seq};
use crate::error::Error;
use crate::types::Type;
use crate::value::Value;

/// Either an ordered sequence or a mapping.
#[derive(Clone, Copy, Debug)]
pub enum Collection<'a> {
    /// An ordered sequence; keys are indices.
    Sequence(&'a Seq<Value>),
    /// A mapping; iteration order is unspecified.
    Mapping(&'a Dict<Value, Value>),
}

impl<'a> Collection<'a> {
    /// Returns the number of elements or pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Sequence(v) => v.len(),
            Self::Mapping(m) => m.len(),
        }
    }

    /// Returns true if there are no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates `(key, value)` pairs.
    ///
    /// Sequence keys are `Value::Int(index)`.
    #[must_use]
    pub fn entries(&self) -> Entries<'a> {
        match *self {
            Self::Sequence(v) => Entries::Sequence(IntoIterator::into_iter(v).enumerate()),
            Self::Mapping(m) => Entries::Mapping(Box::new(m.iter())),
        }
    }

    /// Iterates values only.
    pub fn values(&self) -> impl Iterator<Item = &'a Value> + use<'a> {
        self.entries().map(|(_, value)| value)
    }

    /// Returns the collection as an owned value.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Sequence(v) => Value::Seq((*v).clone()),
            Self::Mapping(m) => Value::Dict((*m).clone()),
        }
    }
}

impl<'a> From<&'a Seq<Value>> for Collection<'a> {
    fn from(seq: &'a Seq<Value>) -> Self {
        Self::Sequence(seq)
    }
}

impl<'a> From<&'a Dict<Value, Value>> for Collection<'a> {
    fn from(dict: &'a Dict<Value, Value>) -> Self {
        Self::Mapping(dict)
    }
}

impl<'a> TryFrom<&'a Value> for Collection<'a> {
    type Error = Error;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        match value {
            Value::Seq(v) => Ok(Self::Sequence(v)),
            Value::Dict(m) => Ok(Self::Mapping(m)),
            other => Err(Error::type_mismatch(Type::seq(Type::Any), other.value_type())),
        }
    }
}

/// Iterator over the `(key, value)` entries of a [`Collection`].
pub enum Entries<'a> {
    /// Indexed sequence entries.
    Sequence(std::iter::Enumerate<im::vector::Iter<'a, Value>>),
    /// Mapping entries.
    Mapping(Box<dyn Iterator<Item = (&'a Value, &'a Value)> + 'a>),
}

impl<'a> Iterator for Entries<'a> {
    type Item = (Value, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Sequence(iter) => iter
                .next()
                .map(|(i, value)| (Value::Int(i64::try_from(i).unwrap_or(i64::MAX)), value)),
            Self::Mapping(iter) => iter.next().map(|(key, value)| (key.clone(), value)),
        }
    }
}
