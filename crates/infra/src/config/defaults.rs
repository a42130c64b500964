//! Configuration resources compiled into the binary.

pub const REPORT_MAPPING: &str = include_str!("../../resources/defaultReport.properties");
pub const MARKUP_EXTENSIONS: &str = include_str!("../../resources/xmlExtensions.properties");
pub const CODE_BEARING_TAGS: &str = include_str!("../../resources/LocTags.properties");
pub const KEYWORD_CATEGORIES: &str = include_str!("../../resources/SourceType.properties");

/// File names looked up in a user supplied configuration directory.
pub const MARKUP_EXTENSIONS_FILE: &str = "xmlExtensions.properties";
pub const CODE_BEARING_TAGS_FILE: &str = "LocTags.properties";
pub const KEYWORD_CATEGORIES_FILE: &str = "SourceType.properties";
