#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod config;
pub mod model;

pub use analytics::{Aggregator, ReportRow};
pub use config::{ColumnMapping, ScanProfile};
pub use model::{Accumulator, FileAction, RawTally, Route};
