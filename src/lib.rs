//! Sundry - collection and function utilities over dynamic values
//!
//! This crate re-exports all layers of Sundry for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: sundry_timer       - Cooperative timer queue, deferred calls
//! Layer 1: sundry_stdlib      - Collection and function utilities
//! Layer 0: sundry_foundation  - Core types (Value, Seq, Dict, Error)
//! ```

pub use sundry_foundation as foundation;
pub use sundry_stdlib as stdlib;
pub use sundry_timer as timer;
