// crates/ports/src/filesystem.rs
use std::path::{Path, PathBuf};

use cocomo_scan_domain::Accumulator;
use cocomo_scan_shared_kernel::Result;

/// One application directory to be measured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationDir {
    /// Directory name, used as the first report column.
    pub name: String,
    pub path: PathBuf,
}

impl ApplicationDir {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self { name: name.into(), path: path.into() }
    }
}

/// Port for listing the applications of one run.
pub trait ApplicationSource {
    fn applications(&self) -> Result<Vec<ApplicationDir>>;
}

/// Port for counting everything below one directory.
pub trait TreeScanner: Send + Sync {
    /// Walk `root` and add the counts of every file into `sink`.
    ///
    /// Failures on individual files are not errors; only an unusable `root` is.
    fn scan(&self, root: &Path, sink: &mut dyn Accumulator) -> Result<()>;
}
