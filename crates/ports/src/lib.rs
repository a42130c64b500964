//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: application discovery and subtree scanning
//! - [`report`]: report and raw metrics output
//!
//! These ports allow the report driver to stay independent of the
//! filesystem and of the output format.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod report;
