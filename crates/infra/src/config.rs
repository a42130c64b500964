//! Loading of the run configuration: report columns and the scan profile.

pub mod defaults;
pub mod loader;
pub mod properties;

pub use loader::{DEFAULT_REPORT_CONFIG, load_column_mapping, load_scan_profile};
