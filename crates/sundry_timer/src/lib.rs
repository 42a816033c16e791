//! Deferred calls for Sundry.
//!
//! This crate provides:
//! - [`Scheduler`] - a cooperative timer queue driven by a [`Clock`]
//! - [`TimerHandle`] - cancellation for a scheduled call
//! - [`SystemClock`] and [`ManualClock`] - real and virtual time
//! - [`TimerTrace`] - an optional ring buffer of timer events
//! - [`delay`], [`run_pending`], [`run_until_idle`] - the per-thread default
//!   scheduler
//!
//! Nothing fires in the background. The owner of a scheduler drives it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod clock;
pub mod config;
pub mod scheduler;
pub mod trace;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::SchedulerConfig;
pub use scheduler::{
    Scheduler, TimerHandle, TimerId, default_scheduler, delay, run_pending, run_until_idle,
};
pub use trace::{TimerEvent, TimerRecord, TimerTrace, TimerTraceStats};
