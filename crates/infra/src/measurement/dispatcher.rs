// crates/infra/src/measurement/dispatcher.rs
use std::path::Path;

use cocomo_scan_domain::{
    Accumulator, ScanProfile,
    model::{FileAction, Route, classify, tags},
};
use cocomo_scan_shared_kernel::{FileName, InfraResult, InfrastructureError};
use tracing::trace;

use super::strategies::{StructuralCounter, parse_document, record_code, record_plain};
use crate::persistence::FileReader;

/// Routes one file to the counting strategy its name calls for.
pub struct FileDispatcher<'a> {
    profile: &'a ScanProfile,
}

impl<'a> FileDispatcher<'a> {
    pub fn new(profile: &'a ScanProfile) -> Self {
        Self { profile }
    }

    /// Count `path` into `acc`.
    ///
    /// `File-<ext>` is recorded before the file is opened, so a file that
    /// cannot be read or parsed still shows up with that count.
    pub fn measure(&self, path: &Path, acc: &mut dyn Accumulator) -> InfraResult<()> {
        let Some(name) = FileName::from_path(path) else {
            return Ok(());
        };
        let FileAction::Count { extension, route } = classify(&name, self.profile) else {
            trace!(path = %path.display(), "skipped");
            return Ok(());
        };

        acc.bump(&tags::file(extension.as_str()));
        trace!(path = %path.display(), ?route, "dispatching");

        match route {
            Route::Markup => self.measure_markup(path, extension.as_str(), acc),
            Route::Code => {
                let text = read(path)?;
                record_code(&text, extension.as_str(), acc);
                Ok(())
            }
            Route::Plain => {
                let text = read(path)?;
                record_plain(&text, acc);
                Ok(())
            }
            Route::Other => {
                acc.bump(tags::OTHER_FILES);
                Ok(())
            }
        }
    }

    fn measure_markup(&self, path: &Path, extension: &str, acc: &mut dyn Accumulator) -> InfraResult<()> {
        let text = read(path)?;
        let document = parse_document(&text).map_err(|err| InfrastructureError::MarkupParse {
            path: path.to_path_buf(),
            details: err.to_string(),
        })?;
        StructuralCounter::new(self.profile, extension).count_document(&document, acc);
        Ok(())
    }
}

fn read(path: &Path) -> InfraResult<String> {
    FileReader::read_lossy(path).map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use cocomo_scan_domain::RawTally;

    use super::*;

    fn profile() -> ScanProfile {
        ScanProfile::new(["form"], ["lotusscript"], [])
    }

    fn measure(name: &str, contents: &str) -> (RawTally, InfraResult<()>) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        let profile = profile();
        let mut tally = RawTally::new();
        let outcome = FileDispatcher::new(&profile).measure(&path, &mut tally);
        (tally, outcome)
    }

    #[test]
    fn no_extension_counts_nothing() {
        let (tally, outcome) = measure("LICENSE", "MIT\n");
        assert!(outcome.is_ok());
        assert!(tally.is_empty());
    }

    #[test]
    fn metadata_counts_nothing() {
        let (tally, _) = measure("Main.form-metadata", "<x/>");
        assert!(tally.is_empty());
    }

    #[test]
    fn other_files_only_get_two_counts() {
        let (tally, _) = measure("logo.GIF", "GIF89a");
        assert_eq!(tally.get("File-gif"), 1);
        assert_eq!(tally.get("otherFiles"), 1);
        assert_eq!(tally.len(), 2);
    }

    #[test]
    fn code_file_counts_lines_and_functions() {
        let (tally, _) = measure("util.lss", "Function Calc\nCalc = 1\nEnd Function\n");
        assert_eq!(tally.get("File-lss"), 1);
        assert_eq!(tally.get("LOC_lss"), 3);
        assert_eq!(tally.get("functions_lss"), 1);
    }

    #[test]
    fn properties_file_counts_as_other_language() {
        let (tally, _) = measure("plugin.properties", "a=1\n\nb=2\n");
        assert_eq!(tally.get("File-properties"), 1);
        assert_eq!(tally.get("LOC_other"), 2);
        assert!(!tally.contains("functions"));
    }

    #[test]
    fn database_properties_is_parsed_as_markup() {
        let (tally, outcome) = measure("database.properties", "<database><acl/></database>");
        assert!(outcome.is_ok());
        assert_eq!(tally.get("File-properties"), 1);
        assert_eq!(tally.get("acl"), 1);
        assert_eq!(tally.get("properties_acl"), 1);
        assert!(!tally.contains("LOC_other"));
    }

    #[test]
    fn broken_markup_keeps_file_count_and_reports() {
        let (tally, outcome) = measure("Main.form", "<form><field></form>");
        assert!(matches!(outcome, Err(InfrastructureError::MarkupParse { .. })));
        assert_eq!(tally.get("File-form"), 1);
        assert_eq!(tally.len(), 1);
    }

    #[test]
    fn measuring_twice_doubles_exactly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Main.form");
        fs::write(&path, "<form><field/><lotusscript>Sub A\nEnd Sub</lotusscript></form>").unwrap();
        let profile = profile();
        let dispatcher = FileDispatcher::new(&profile);

        let mut once = RawTally::new();
        dispatcher.measure(&path, &mut once).unwrap();
        let mut twice = RawTally::new();
        dispatcher.measure(&path, &mut twice).unwrap();
        assert_eq!(once, twice);

        dispatcher.measure(&path, &mut twice).unwrap();
        for (tag, amount) in once.iter() {
            assert_eq!(twice.get(tag), amount * 2, "{tag}");
        }
    }
}
