// crates/infra/src/filesystem.rs
use std::path::Path;

use cocomo_scan_domain::{Accumulator, ScanProfile};
use cocomo_scan_ports::filesystem::TreeScanner;
use cocomo_scan_shared_kernel::{InfrastructureError, Result};
use ignore::{DirEntry, Walk, WalkBuilder};
use tracing::{debug, warn};

use crate::measurement::FileDispatcher;

/// Filesystem adapter implementing the `TreeScanner` port.
///
/// Visits files in lexical order, never descends into directories whose name
/// starts with a dot, and ignores `.gitignore` and friends.
#[derive(Debug, Clone)]
pub struct WalkingScanner {
    profile: ScanProfile,
}

impl WalkingScanner {
    pub fn new(profile: ScanProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &ScanProfile {
        &self.profile
    }
}

impl TreeScanner for WalkingScanner {
    fn scan(&self, root: &Path, sink: &mut dyn Accumulator) -> Result<()> {
        if !root.is_dir() {
            return Err(InfrastructureError::WalkError {
                path: root.to_path_buf(),
                details: "not a directory".to_string(),
            }
            .into());
        }

        let dispatcher = FileDispatcher::new(&self.profile);
        let mut files = 0usize;
        let mut failures = 0usize;

        for entry in build_walker(root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(root = %root.display(), %err, "skipping unreadable entry");
                    failures += 1;
                    continue;
                }
            };
            if !is_countable_file(&entry) {
                continue;
            }
            files += 1;
            if let Err(err) = dispatcher.measure(entry.path(), sink) {
                warn!(%err, "file only partially counted");
                failures += 1;
            }
        }

        debug!(root = %root.display(), files, failures, "subtree scanned");
        Ok(())
    }
}

fn build_walker(root: &Path) -> Walk {
    WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(|entry| !is_hidden_dir(entry))
        .build()
}

fn is_hidden_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_some_and(|t| t.is_dir())
        && entry.file_name().to_string_lossy().starts_with('.')
}

// Symlinks are not followed, but one pointing at a file is still counted.
fn is_countable_file(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(t) if t.is_dir() => false,
        Some(t) if t.is_symlink() => entry.path().is_file(),
        Some(_) => true,
        None => false,
    }
}
