//! Calling a method on every element of a sequence.
//!
//! A method is either a direct function or a name. Names are resolved per
//! element: a mapping receiver that stores a [`Value::Fn`] under the name
//! wins, otherwise the [`MethodTable`] entry for the receiver's type is used.

#![allow(clippy::unnecessary_wraps)]

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use sundry_foundation::{
    Error, ErrorContext, NativeFn, Result, Seq, Type, TypeTag, Value,
};

/// Built-in methods shared by [`invoke`].
static STANDARD: LazyLock<MethodTable> = LazyLock::new(MethodTable::standard);

/// What to call on each element.
#[derive(Clone)]
pub enum Method<'f> {
    /// Resolved against each receiver at call time.
    Name(Arc<str>),
    /// Called directly with the receiver and the extra arguments.
    Func(&'f dyn Fn(&Value, &[Value]) -> Result<Value>),
}

impl From<&str> for Method<'_> {
    fn from(name: &str) -> Self {
        Self::Name(name.into())
    }
}

impl std::fmt::Debug for Method<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name(name) => write!(f, "Method::Name({name:?})"),
            Self::Func(_) => write!(f, "Method::Func(..)"),
        }
    }
}

/// Methods available per receiver type.
///
/// Every entry is a [`NativeFn`] that takes the receiver as `args[0]`.
#[derive(Debug, Clone, Default)]
pub struct MethodTable {
    methods: HashMap<TypeTag, HashMap<Arc<str>, NativeFn>>,
}

impl MethodTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table holding the built-in methods.
    ///
    /// - sequences: `len`, `sort`, `reverse`, `first`, `last`, `join`
    /// - strings: `len`, `to_upper`, `to_lower`, `trim`, `split`
    /// - mappings: `len`, `keys`, `values`
    /// - numbers: `abs`, `to_string`
    #[must_use]
    pub fn standard() -> Self {
        let mut table = Self::new();

        table.register(TypeTag::Seq, "len", NativeFn::new("len", seq_len));
        table.register(TypeTag::Seq, "sort", NativeFn::new("sort", seq_sort));
        table.register(TypeTag::Seq, "reverse", NativeFn::new("reverse", seq_reverse));
        table.register(TypeTag::Seq, "first", NativeFn::new("first", seq_first));
        table.register(TypeTag::Seq, "last", NativeFn::new("last", seq_last));
        table.register(TypeTag::Seq, "join", NativeFn::new("join", seq_join));

        table.register(TypeTag::String, "len", NativeFn::new("len", str_len));
        table.register(TypeTag::String, "to_upper", NativeFn::new("to_upper", str_upper));
        table.register(TypeTag::String, "to_lower", NativeFn::new("to_lower", str_lower));
        table.register(TypeTag::String, "trim", NativeFn::new("trim", str_trim));
        table.register(TypeTag::String, "split", NativeFn::new("split", str_split));

        table.register(TypeTag::Dict, "len", NativeFn::new("len", dict_len));
        table.register(TypeTag::Dict, "keys", NativeFn::new("keys", dict_keys));
        table.register(TypeTag::Dict, "values", NativeFn::new("values", dict_values));

        for tag in [TypeTag::Int, TypeTag::Float] {
            table.register(tag, "abs", NativeFn::new("abs", num_abs));
            table.register(tag, "to_string", NativeFn::new("to_string", num_to_string));
        }

        table
    }

    /// Adds or replaces a method for receivers of type `tag`.
    pub fn register(&mut self, tag: TypeTag, name: impl Into<Arc<str>>, func: NativeFn) {
        self.methods
            .entry(tag)
            .or_default()
            .insert(name.into(), func);
    }

    /// Returns true if `name` is registered for `tag`.
    #[must_use]
    pub fn contains(&self, tag: TypeTag, name: &str) -> bool {
        self.methods
            .get(&tag)
            .is_some_and(|methods| methods.contains_key(name))
    }

    /// Finds the function `name` refers to on `receiver`.
    #[must_use]
    pub fn resolve(&self, receiver: &Value, name: &str) -> Option<NativeFn> {
        if let Value::Dict(fields) = receiver {
            if let Some(Value::Fn(func)) = fields.get(&Value::from(name)) {
                return Some(*func);
            }
        }
        self.methods
            .get(&receiver.type_tag())
            .and_then(|methods| methods.get(name))
            .copied()
    }

    /// Calls `method` on a single receiver.
    ///
    /// # Errors
    ///
    /// Returns `MethodNotFound` if a name resolves to nothing, or whatever
    /// the method itself raises.
    pub fn call(&self, receiver: &Value, method: &Method<'_>, args: &[Value]) -> Result<Value> {
        match method {
            Method::Func(func) => func(receiver, args),
            Method::Name(name) => {
                let func = self
                    .resolve(receiver, name)
                    .ok_or_else(|| Error::method_not_found(&**name, receiver.value_type()))?;
                let mut call_args = Vec::with_capacity(args.len() + 1);
                call_args.push(receiver.clone());
                call_args.extend_from_slice(args);
                func.call(&call_args)
            }
        }
    }
}

/// Calls `method` on every element of `seq`, with `args` after the receiver.
///
/// Names resolve through the built-in [`MethodTable::standard`] table.
///
/// # Errors
///
/// Stops at the first failing element. The error carries an `invoke`
/// context whose frame names the element index.
pub fn invoke(seq: &Seq<Value>, method: &Method<'_>, args: &[Value]) -> Result<Seq<Value>> {
    invoke_with(&STANDARD, seq, method, args)
}

/// Like [`invoke`], resolving names through a caller-supplied table.
///
/// # Errors
///
/// See [`invoke`].
pub fn invoke_with(
    table: &MethodTable,
    seq: &Seq<Value>,
    method: &Method<'_>,
    args: &[Value],
) -> Result<Seq<Value>> {
    seq.iter()
        .enumerate()
        .map(|(index, receiver)| {
            table.call(receiver, method, args).map_err(|err| {
                err.with_context(
                    ErrorContext::new()
                        .with_source("invoke")
                        .with_frame(format!("element {index}")),
                )
            })
        })
        .collect()
}

// =============================================================================
// Built-in methods
// =============================================================================

fn check_arity(args: &[Value], extra: usize) -> Result<()> {
    let given = args.len().saturating_sub(1);
    if given == extra {
        Ok(())
    } else {
        Err(Error::arity_mismatch(extra.to_string(), given))
    }
}

fn receiver_seq(args: &[Value]) -> Result<&Seq<Value>> {
    match args.first() {
        Some(Value::Seq(v)) => Ok(v),
        other => Err(Error::type_mismatch(
            Type::seq(Type::Any),
            other.map_or(Type::Absent, Value::value_type),
        )),
    }
}

fn receiver_str(args: &[Value]) -> Result<&str> {
    match args.first() {
        Some(Value::String(s)) => Ok(s),
        other => Err(Error::type_mismatch(
            Type::String,
            other.map_or(Type::Absent, Value::value_type),
        )),
    }
}

fn receiver_dict(args: &[Value]) -> Result<&sundry_foundation::Dict<Value, Value>> {
    match args.first() {
        Some(Value::Dict(m)) => Ok(m),
        other => Err(Error::type_mismatch(
            Type::dict(Type::Any, Type::Any),
            other.map_or(Type::Absent, Value::value_type),
        )),
    }
}

fn int_len(len: usize) -> Value {
    Value::Int(i64::try_from(len).unwrap_or(i64::MAX))
}

fn seq_len(args: &[Value]) -> Result<Value> {
    check_arity(args, 0)?;
    Ok(int_len(receiver_seq(args)?.len()))
}

fn seq_sort(args: &[Value]) -> Result<Value> {
    check_arity(args, 0)?;
    let mut items: Vec<Value> = receiver_seq(args)?.iter().cloned().collect();
    items.sort_by(Value::sort_cmp);
    Ok(Value::Seq(items.into()))
}

fn seq_reverse(args: &[Value]) -> Result<Value> {
    check_arity(args, 0)?;
    Ok(Value::Seq(receiver_seq(args)?.iter().rev().cloned().collect()))
}

fn seq_first(args: &[Value]) -> Result<Value> {
    check_arity(args, 0)?;
    Ok(receiver_seq(args)?.first().cloned().unwrap_or(Value::Absent))
}

fn seq_last(args: &[Value]) -> Result<Value> {
    check_arity(args, 0)?;
    Ok(receiver_seq(args)?.last().cloned().unwrap_or(Value::Absent))
}

/// Joins elements with a separator, `","` by default.
fn seq_join(args: &[Value]) -> Result<Value> {
    let items = receiver_seq(args)?;
    let separator = match args.get(1..) {
        Some([]) | None => ",",
        Some([Value::String(sep)]) => &**sep,
        Some([other]) => return Err(Error::type_mismatch(Type::String, other.value_type())),
        Some(rest) => return Err(Error::arity_mismatch("0 or 1", rest.len())),
    };
    let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
    Ok(Value::from(parts.join(separator)))
}

fn str_len(args: &[Value]) -> Result<Value> {
    check_arity(args, 0)?;
    Ok(int_len(receiver_str(args)?.chars().count()))
}

fn str_upper(args: &[Value]) -> Result<Value> {
    check_arity(args, 0)?;
    Ok(Value::from(receiver_str(args)?.to_uppercase()))
}

fn str_lower(args: &[Value]) -> Result<Value> {
    check_arity(args, 0)?;
    Ok(Value::from(receiver_str(args)?.to_lowercase()))
}

fn str_trim(args: &[Value]) -> Result<Value> {
    check_arity(args, 0)?;
    Ok(Value::from(receiver_str(args)?.trim()))
}

/// An empty separator splits into characters.
fn str_split(args: &[Value]) -> Result<Value> {
    check_arity(args, 1)?;
    let text = receiver_str(args)?;
    let separator = match &args[1] {
        Value::String(sep) => sep,
        other => return Err(Error::type_mismatch(Type::String, other.value_type())),
    };
    let parts: Seq<Value> = if separator.is_empty() {
        text.chars().map(|c| Value::from(c.to_string())).collect()
    } else {
        text.split(&**separator).map(Value::from).collect()
    };
    Ok(Value::Seq(parts))
}

fn dict_len(args: &[Value]) -> Result<Value> {
    check_arity(args, 0)?;
    Ok(int_len(receiver_dict(args)?.len()))
}

fn dict_keys(args: &[Value]) -> Result<Value> {
    check_arity(args, 0)?;
    Ok(Value::Seq(receiver_dict(args)?.keys().cloned().collect()))
}

fn dict_values(args: &[Value]) -> Result<Value> {
    check_arity(args, 0)?;
    Ok(Value::Seq(receiver_dict(args)?.values().cloned().collect()))
}

fn num_abs(args: &[Value]) -> Result<Value> {
    check_arity(args, 0)?;
    match &args[0] {
        Value::Int(n) => n
            .checked_abs()
            .map(Value::Int)
            .ok_or_else(|| Error::invalid_argument(format!("abs overflows for {n}"))),
        Value::Float(n) => Ok(Value::Float(n.abs())),
        other => Err(Error::type_mismatch(Type::Float, other.value_type())),
    }
}

fn num_to_string(args: &[Value]) -> Result<Value> {
    check_arity(args, 0)?;
    Ok(Value::from(args[0].to_string()))
}
