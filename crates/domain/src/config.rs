pub mod column_mapping;
pub mod scan_profile;

pub use column_mapping::ColumnMapping;
pub use scan_profile::ScanProfile;
