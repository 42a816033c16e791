//! Collection and function utilities over [`sundry_foundation::Value`].
//!
//! Functions are grouped by what they do:
//! - [`slice`] - `first`, `last`
//! - [`query`] - single-pass iteration and lookup (`each`, `map`, `filter`, ...)
//! - [`invoke`] - calling a method on every element
//! - [`order`] - `reduce`, `sort_by`, `shuffle`
//! - [`combine`] - `zip`, `flatten`, `intersection`, `difference`
//! - [`merge`] - `extend`, `defaults`
//! - [`function`] - `once`, `memoize`
//!
//! Nothing here mutates its input. Every transform returns a new collection
//! that shares structure with the old one.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod combine;
pub mod function;
pub mod invoke;
pub mod merge;
pub mod order;
pub mod query;
pub mod slice;

pub use combine::{difference, flatten, intersection, zip};
pub use function::{Memoize, Once, memoize, once};
pub use invoke::{Method, MethodTable, invoke, invoke_with};
pub use merge::{defaults, extend};
pub use order::{Criterion, reduce, shuffle, shuffle_with, sort_by, try_reduce};
pub use query::{contains, each, every, filter, index_of, map, pluck, reject, some, uniq};
pub use slice::{first, last};
