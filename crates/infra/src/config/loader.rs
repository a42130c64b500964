use std::{collections::BTreeMap, path::Path};

use cocomo_scan_domain::{ColumnMapping, ScanProfile, config::scan_profile::KeywordRule};
use tracing::{debug, info, warn};

use super::{defaults, properties};
use crate::persistence::{FileReader, FileWriter};

/// Report mapping file looked up in the working directory when none is given.
pub const DEFAULT_REPORT_CONFIG: &str = "cocomo_scan.properties";

const PERSISTED_HEADER: &str = "# ***** Default values ******\n";

/// Load the report columns from `path`.
///
/// When the file is missing or unreadable the bundled mapping is used and
/// written to `path` so it can be edited for the next run.
pub fn load_column_mapping(path: &Path) -> ColumnMapping {
    match FileReader::read_lossy(path) {
        Ok(text) => {
            debug!(path = %path.display(), "loaded report mapping");
            mapping_from_text(&text)
        }
        Err(err) => {
            info!(path = %path.display(), %err, "using default report definition");
            let persisted = format!("{PERSISTED_HEADER}{}", defaults::REPORT_MAPPING);
            if let Err(err) = FileWriter::atomic_write(path, persisted.as_bytes()) {
                warn!(path = %path.display(), %err, "could not persist default report definition");
            }
            mapping_from_text(defaults::REPORT_MAPPING)
        }
    }
}

fn mapping_from_text(text: &str) -> ColumnMapping {
    let pairs = properties::parse(text).into_iter().filter_map(|entry| match entry {
        Ok(pair) => Some(pair),
        Err(err) => {
            warn!(%err, "skipping report mapping entry");
            None
        }
    });
    ColumnMapping::from_pairs(pairs)
}

/// Build the scan profile from the bundled resources, each one replaced by the
/// file of the same name in `config_dir` when present.
pub fn load_scan_profile(config_dir: Option<&Path>) -> ScanProfile {
    let markup = resource(config_dir, defaults::MARKUP_EXTENSIONS_FILE, defaults::MARKUP_EXTENSIONS);
    let code_tags = resource(config_dir, defaults::CODE_BEARING_TAGS_FILE, defaults::CODE_BEARING_TAGS);
    let keywords = resource(config_dir, defaults::KEYWORD_CATEGORIES_FILE, defaults::KEYWORD_CATEGORIES);

    ScanProfile::new(
        properties::parse_line_list(&markup),
        properties::parse_line_list(&code_tags),
        keyword_rules(&keywords),
    )
}

/// Keyword rules of a properties text; a keyword listed twice keeps its last category.
fn keyword_rules(text: &str) -> Vec<KeywordRule> {
    let mut categories = BTreeMap::new();
    for entry in properties::parse(text) {
        match entry {
            Ok((keyword, category)) => {
                categories.insert(keyword, category);
            }
            Err(err) => warn!(%err, "skipping keyword entry"),
        }
    }
    categories.iter().map(|(keyword, category)| KeywordRule::new(keyword, category)).collect()
}

fn resource(config_dir: Option<&Path>, file_name: &str, bundled: &str) -> String {
    let Some(dir) = config_dir else {
        return bundled.to_string();
    };
    let path = dir.join(file_name);
    if !path.is_file() {
        return bundled.to_string();
    }
    match FileReader::read_lossy(&path) {
        Ok(text) => {
            debug!(path = %path.display(), "loaded configuration override");
            text
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "falling back to bundled configuration");
            bundled.to_string()
        }
    }
}
