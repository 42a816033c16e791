//! Type descriptors for values.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Type descriptor for a value.
///
/// Used in error messages and, through [`TypeTag`], as the key for
/// method lookup.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Type {
    /// The absent sentinel.
    Absent,
    /// The nil type (only value: nil).
    Nil,
    /// Boolean type.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// String type.
    String,
    /// Sequence type.
    Seq(Box<Type>),
    /// Mapping type.
    Dict(Box<Type>, Box<Type>),
    /// Native function type.
    Fn,
    /// Any type (accepts any value).
    Any,
}

/// The kind of a [`Type`] with element types erased.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TypeTag {
    /// See [`Type::Absent`].
    Absent,
    /// See [`Type::Nil`].
    Nil,
    /// See [`Type::Bool`].
    Bool,
    /// See [`Type::Int`].
    Int,
    /// See [`Type::Float`].
    Float,
    /// See [`Type::String`].
    String,
    /// See [`Type::Seq`].
    Seq,
    /// See [`Type::Dict`].
    Dict,
    /// See [`Type::Fn`].
    Fn,
    /// See [`Type::Any`].
    Any,
}

impl Type {
    /// Creates a sequence type with the given element type.
    #[must_use]
    pub fn seq(element: Type) -> Self {
        Self::Seq(Box::new(element))
    }

    /// Creates a mapping type with the given key and value types.
    #[must_use]
    pub fn dict(key: Type, value: Type) -> Self {
        Self::Dict(Box::new(key), Box::new(value))
    }

    /// Returns true if this type is `Any`.
    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Returns the kind of this type.
    #[must_use]
    pub const fn kind(&self) -> TypeTag {
        match self {
            Self::Absent => TypeTag::Absent,
            Self::Nil => TypeTag::Nil,
            Self::Bool => TypeTag::Bool,
            Self::Int => TypeTag::Int,
            Self::Float => TypeTag::Float,
            Self::String => TypeTag::String,
            Self::Seq(_) => TypeTag::Seq,
            Self::Dict(_, _) => TypeTag::Dict,
            Self::Fn => TypeTag::Fn,
            Self::Any => TypeTag::Any,
        }
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => write!(f, "absent"),
            Self::Nil => write!(f, "nil"),
            Self::Bool => write!(f, "bool"),
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::String => write!(f, "string"),
            Self::Seq(t) => write!(f, "seq<{t:?}>"),
            Self::Dict(k, v) => write!(f, "dict<{k:?}, {v:?}>"),
            Self::Fn => write!(f, "fn"),
            Self::Any => write!(f, "any"),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
