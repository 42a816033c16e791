//! Core value type for all data handled by the library.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::collections::{Dict, Seq};
use crate::types::{Type, TypeTag};

/// Core value type.
///
/// Values are immutable and cheaply cloneable (O(1) for most variants).
/// Sequences and mappings use structural sharing via persistent data structures.
#[derive(Clone)]
pub enum Value {
    /// No value present. Produced for missing properties and zip gaps.
    Absent,
    /// An explicit null.
    Nil,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(Arc<str>),
    /// Persistent ordered sequence.
    Seq(Seq<Value>),
    /// Persistent mapping.
    Dict(Dict<Value, Value>),
    /// Native function, e.g. a method stored on a record.
    Fn(NativeFn),
}

/// Native function callable on values.
///
/// When used as a method the receiver is passed as `args[0]`.
#[derive(Clone, Copy)]
pub struct NativeFn {
    /// Function name for debugging.
    pub name: &'static str,
    /// Function pointer.
    pub func: fn(&[Value]) -> crate::Result<Value>,
}

impl NativeFn {
    /// Creates a named native function.
    #[must_use]
    pub const fn new(name: &'static str, func: fn(&[Value]) -> crate::Result<Value>) -> Self {
        Self { name, func }
    }

    /// Calls the function.
    ///
    /// # Errors
    ///
    /// Returns whatever error the function itself raises.
    pub fn call(&self, args: &[Value]) -> crate::Result<Value> {
        (self.func)(args)
    }
}

impl Value {
    /// Returns the type of this value.
    #[must_use]
    pub fn value_type(&self) -> Type {
        match self {
            Self::Absent => Type::Absent,
            Self::Nil => Type::Nil,
            Self::Bool(_) => Type::Bool,
            Self::Int(_) => Type::Int,
            Self::Float(_) => Type::Float,
            Self::String(_) => Type::String,
            Self::Seq(_) => Type::seq(Type::Any),
            Self::Dict(_) => Type::dict(Type::Any, Type::Any),
            Self::Fn(_) => Type::Fn,
        }
    }

    /// Returns the type tag without building a full [`Type`].
    #[must_use]
    pub const fn type_tag(&self) -> TypeTag {
        match self {
            Self::Absent => TypeTag::Absent,
            Self::Nil => TypeTag::Nil,
            Self::Bool(_) => TypeTag::Bool,
            Self::Int(_) => TypeTag::Int,
            Self::Float(_) => TypeTag::Float,
            Self::String(_) => TypeTag::String,
            Self::Seq(_) => TypeTag::Seq,
            Self::Dict(_) => TypeTag::Dict,
            Self::Fn(_) => TypeTag::Fn,
        }
    }

    /// Returns true if this value is the absent sentinel.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns true if this value is nil.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns true if this value is truthy.
    ///
    /// Absent, nil, `false`, zero, NaN and the empty string are falsy.
    /// Everything else is truthy, including empty sequences and mappings.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Absent | Self::Nil => false,
            Self::Bool(b) => *b,
            Self::Int(n) => *n != 0,
            Self::Float(n) => *n != 0.0 && !n.is_nan(),
            Self::String(s) => !s.is_empty(),
            Self::Seq(_) | Self::Dict(_) | Self::Fn(_) => true,
        }
    }

    /// Attempts to extract a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract an integer value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a float value.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a sequence reference.
    #[must_use]
    pub const fn as_seq(&self) -> Option<&Seq<Value>> {
        match self {
            Self::Seq(v) => Some(v),
            _ => None,
        }
    }

    /// Attempts to extract a mapping reference.
    #[must_use]
    pub const fn as_dict(&self) -> Option<&Dict<Value, Value>> {
        match self {
            Self::Dict(m) => Some(m),
            _ => None,
        }
    }

    /// Attempts to extract a native function.
    #[must_use]
    pub const fn as_fn(&self) -> Option<&NativeFn> {
        match self {
            Self::Fn(f) => Some(f),
            _ => None,
        }
    }

    /// Property access.
    ///
    /// Looks `key` up in a mapping, or indexes a sequence with an integer key.
    /// Anything else, or a missing entry, yields [`Value::Absent`].
    #[must_use]
    pub fn get(&self, key: &Value) -> Value {
        match (self, key) {
            (Self::Dict(m), _) => m.get(key).cloned().unwrap_or(Self::Absent),
            (Self::Seq(v), Self::Int(idx)) => usize::try_from(*idx)
                .ok()
                .and_then(|i| v.get(i))
                .cloned()
                .unwrap_or(Self::Absent),
            _ => Self::Absent,
        }
    }

    /// Total order used for sorting.
    ///
    /// Numbers compare numerically across `Int` and `Float` (NaN last),
    /// strings lexicographically, booleans `false < true`. Different kinds
    /// order by rank `nil < bool < number < string < seq < dict < fn < absent`.
    #[must_use]
    pub fn sort_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => compare_floats(*a, *b),
            (Self::Int(a), Self::Float(b)) => compare_int_float(*a, *b),
            (Self::Float(a), Self::Int(b)) => compare_int_float(*b, *a).reverse(),
            (Self::String(a), Self::String(b)) => a.cmp(b),
            (Self::Seq(a), Self::Seq(b)) => a
                .iter()
                .zip(b.iter())
                .map(|(x, y)| x.sort_cmp(y))
                .find(|ord| ord.is_ne())
                .unwrap_or_else(|| a.len().cmp(&b.len())),
            (Self::Dict(a), Self::Dict(b)) => a.len().cmp(&b.len()),
            (Self::Fn(a), Self::Fn(b)) => a.name.cmp(b.name),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }

    const fn kind_rank(&self) -> u8 {
        match self {
            Self::Nil => 0,
            Self::Bool(_) => 1,
            Self::Int(_) | Self::Float(_) => 2,
            Self::String(_) => 3,
            Self::Seq(_) => 4,
            Self::Dict(_) => 5,
            Self::Fn(_) => 6,
            Self::Absent => 7,
        }
    }
}

fn compare_floats(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

// Exact: `i as f64` may round, so a tie there is settled in i128, where any
// float that ties with an i64 is integral and fits.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn compare_int_float(i: i64, f: f64) -> Ordering {
    if f.is_nan() {
        return Ordering::Less;
    }
    match (i as f64).partial_cmp(&f) {
        Some(Ordering::Equal) | None => i128::from(i).cmp(&(f as i128)),
        Some(ord) => ord,
    }
}

// Strict equality: same variant, same value, no numeric coercion.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Absent, Self::Absent) | (Self::Nil, Self::Nil) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Seq(a), Self::Seq(b)) => a == b,
            (Self::Dict(a), Self::Dict(b)) => a == b,
            (Self::Fn(a), Self::Fn(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Absent | Self::Nil => {}
            Self::Bool(b) => b.hash(state),
            Self::Int(n) => n.hash(state),
            Self::Float(n) => n.to_bits().hash(state),
            Self::String(s) => s.hash(state),
            Self::Seq(v) => v.hash(state),
            Self::Dict(m) => m.hash(state),
            Self::Fn(f) => f.hash(state),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => write!(f, "absent"),
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n:?}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Seq(v) => write!(f, "{v:?}"),
            Self::Dict(m) => write!(f, "{m:?}"),
            Self::Fn(func) => write!(f, "{func:?}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => write!(f, "absent"),
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Seq(v) => {
                write!(f, "[")?;
                for (i, item) in v.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Dict(m) => {
                write!(f, "{{")?;
                for (i, (k, v)) in m.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
            Self::Fn(func) => write!(f, "{func:?}"),
        }
    }
}

// NativeFn implementations

impl PartialEq for NativeFn {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::fn_addr_eq(self.func, other.func)
    }
}

impl Eq for NativeFn {}

impl Hash for NativeFn {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.func as usize).hash(state);
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<native fn {}>", self.name)
    }
}

// Convenience From implementations

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Self::String(s)
    }
}

impl From<Seq<Value>> for Value {
    fn from(v: Seq<Value>) -> Self {
        Self::Seq(v)
    }
}

impl From<Dict<Value, Value>> for Value {
    fn from(m: Dict<Value, Value>) -> Self {
        Self::Dict(m)
    }
}

impl From<NativeFn> for Value {
    fn from(f: NativeFn) -> Self {
        Self::Fn(f)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::Seq(v.into_iter().map(Into::into).collect())
    }
}
