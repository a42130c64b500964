pub mod aggregate;

pub use aggregate::{Aggregator, EMPTY_SENTINEL, ReportRow};
