//! Watch loop driving the fetch → detect → notify → persist pipeline
//!
//! # Modules
//!
//! - [`scheduler`]: Startup pass, fixed-interval ticks, and the per-console
//!   check cycle

pub mod scheduler;

pub use scheduler::{CycleError, CycleOutcome, Watcher};
