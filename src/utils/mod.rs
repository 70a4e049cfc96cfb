//! Utility functions and helpers
//!
//! Shared helpers that are not part of the core matching and aggregation
//! logic: logging, console rendering and progress reporting.

pub mod logging;

pub use logging::{console, progress};
