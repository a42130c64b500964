// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod applications;
pub mod config;
pub mod filesystem;
pub mod measurement;
pub mod persistence;
pub mod report;

pub use applications::{CommandFileApplications, DiscoveredApplications};
pub use filesystem::WalkingScanner;
pub use report::CsvReportSink;
