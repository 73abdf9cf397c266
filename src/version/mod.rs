//! Version tracking layer for firmware monitoring
//!
//! This module provides the core functionality for fetching the published
//! firmware version of each tracked console, recording observed versions,
//! and deciding whether a fetched version has been seen before.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Source    │────▶│   Checker   │◀────│   History   │
//! │  (fetch)    │     │  (compare)  │     │  (storage)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`checker`]: Change detection against the observed history
//! - [`console`]: The closed set of tracked consoles
//! - [`error`]: Error types for fetching and persistence
//! - [`history`]: Observed-version record and its file-backed store
//! - [`source`]: Source trait for fetching published versions
//! - [`sources`]: Concrete source implementations (PlayStation support site)
//! - [`text`]: Plain-text extraction from HTML pages

pub mod checker;
pub mod console;
pub mod error;
pub mod history;
pub mod source;
pub mod sources;
pub mod text;
