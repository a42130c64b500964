// crates/infra/src/applications.rs
use std::{
    fs,
    path::{Path, PathBuf},
};

use cocomo_scan_ports::filesystem::{ApplicationDir, ApplicationSource};
use cocomo_scan_shared_kernel::{FileName, InfrastructureError, Result};
use tracing::warn;

use crate::persistence::FileReader;

/// Every non-hidden immediate subdirectory of a root is one application.
#[derive(Debug, Clone)]
pub struct DiscoveredApplications {
    root: PathBuf,
}

impl DiscoveredApplications {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ApplicationSource for DiscoveredApplications {
    fn applications(&self) -> Result<Vec<ApplicationDir>> {
        let entries = fs::read_dir(&self.root).map_err(|source| InfrastructureError::FileSystemOperation {
            operation: "read_dir".to_string(),
            path: self.root.clone(),
            source,
        })?;

        let mut apps = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(root = %self.root.display(), %err, "skipping unreadable entry");
                    continue;
                }
            };
            let path = entry.path();
            let Some(name) = FileName::from_path(&path) else { continue };
            if name.is_hidden() || !path.is_dir() {
                continue;
            }
            apps.push(ApplicationDir::new(name.into_string(), path));
        }
        apps.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(apps)
    }
}

/// Applications listed one path per line in a command file.
///
/// Blank lines and `#` comments are ignored; entries that are not directories
/// are skipped with a warning.
#[derive(Debug, Clone)]
pub struct CommandFileApplications {
    file: PathBuf,
}

impl CommandFileApplications {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self { file: file.into() }
    }
}

impl ApplicationSource for CommandFileApplications {
    fn applications(&self) -> Result<Vec<ApplicationDir>> {
        let text = FileReader::read_lossy(&self.file)
            .map_err(|source| InfrastructureError::FileRead { path: self.file.clone(), source })?;
        Ok(parse_command_lines(&text))
    }
}

fn parse_command_lines(text: &str) -> Vec<ApplicationDir> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let path = Path::new(line);
            if !path.is_dir() {
                warn!(path = line, "listed application is not a directory, skipping");
                return None;
            }
            let path: PathBuf = path.components().collect();
            let name = FileName::from_path(&path).map_or_else(|| line.to_string(), FileName::into_string);
            Some(ApplicationDir::new(name, path))
        })
        .collect()
}
