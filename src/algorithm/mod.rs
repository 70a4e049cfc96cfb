//! Triage algorithms
//!
//! Aggregation of matches into per-report diagnoses and the sequential
//! batch pipeline that ties matcher, aggregator and statistics together.

pub mod pipeline;
pub mod triage;

pub use pipeline::{TriageRun, run_triage};
pub use triage::aggregate;
