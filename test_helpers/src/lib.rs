//! Test helpers shared across crates.
//!
//! This crate provides handlers that record how often an outcome reached
//! them, a capture of the `tracing` events a closure emits, sample faults
//! used throughout the test suites, and text helpers for behavioural step
//! arguments.

pub mod events;
pub mod faults;
pub mod recording;
pub mod text;

pub use events::{CapturedEvent, capture_events};
pub use recording::{CallLog, Calls, RecordingChain, RecordingFold};
