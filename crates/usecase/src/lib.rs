//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: the report driver measuring one application after another
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod orchestrator;

pub use orchestrator::{MeasureApplications, RunSummary};
