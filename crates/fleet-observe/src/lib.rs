//! Subscriber setup for processes embedding the taint engine.
//!
//! `fleet-core` only emits `tracing` events; this crate turns them into text,
//! JSON or journald output.

mod logger;
pub use logger::*;
