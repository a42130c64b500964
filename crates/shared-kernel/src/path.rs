use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

/// Convert a potentially relative path into an absolute one without resolving symlinks.
pub fn logical_absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

/// Appends `suffix` to the absolute form of `path` verbatim, with no separator.
///
/// `/data/AppA` + `app.metrics` becomes `/data/AppAapp.metrics`, a sibling of the directory.
/// Trailing separators and `.` components are dropped first, so `/data/AppA/` lands there too.
pub fn with_raw_suffix(path: &Path, suffix: &str) -> PathBuf {
    let normalized: PathBuf = logical_absolute(path).components().collect();
    let mut raw: OsString = normalized.into_os_string();
    raw.push(suffix);
    PathBuf::from(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_suffix_lands_next_to_the_directory() {
        let path = with_raw_suffix(Path::new("/data/AppA"), "app.metrics");
        assert_eq!(path, PathBuf::from("/data/AppAapp.metrics"));
    }

    #[test]
    fn trailing_separator_does_not_move_the_file_inside() {
        let path = with_raw_suffix(Path::new("/data/AppA/"), "app.metrics");
        assert_eq!(path, PathBuf::from("/data/AppAapp.metrics"));

        let dotted = with_raw_suffix(Path::new("/data/./AppA/."), "app.metrics");
        assert_eq!(dotted, PathBuf::from("/data/AppAapp.metrics"));
    }

    #[test]
    fn relative_paths_are_anchored_at_cwd() {
        let abs = logical_absolute(Path::new("some/dir"));
        assert!(abs.is_absolute());
        assert!(abs.ends_with("some/dir"));
    }
}
