//! Core types, values, and persistent collections for Sundry.
//!
//! This crate provides:
//! - [`Value`] - The dynamic value every library function operates on
//! - [`Type`] - Type descriptors used in errors and method lookup
//! - [`Collection`] - A borrowed view over a sequence or a mapping
//! - [`Error`] - Rich error types with context
//! - Persistent collections ([`Seq`], [`Set`], [`Dict`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collection;
pub mod collections;
pub mod error;
pub mod types;
pub mod value;

pub use collection::{Collection, Entries};
pub use collections::{Dict, Seq, Set};
pub use error::{Error, ErrorContext, ErrorKind};
pub use types::{Type, TypeTag};
pub use value::{NativeFn, Value};

/// Result type for library operations.
pub type Result<T> = std::result::Result<T, Error>;
