use cocomo_scan_shared_kernel::{FileExtension, FileName};

use crate::config::{ScanProfile, scan_profile::METADATA_SUFFIX};

/// Counting strategy chosen for a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Parse as a markup document and count its nodes.
    Markup,
    /// Count lines and functions, tagged with the file extension.
    Code,
    /// Count lines only, tagged with the plain language label.
    Plain,
    /// Only recorded as an other file.
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileAction {
    /// No extension or a metadata extension: contributes nothing.
    Skip,
    Count { extension: FileExtension, route: Route },
}

/// Decide how a file is counted from its name alone.
pub fn classify(name: &FileName, profile: &ScanProfile) -> FileAction {
    let Some(extension) = name.extension() else {
        return FileAction::Skip;
    };
    if extension.as_str().ends_with(METADATA_SUFFIX) {
        return FileAction::Skip;
    }

    let route = if profile.is_markup_file_name(name.as_str()) || profile.is_markup_extension(extension.as_str()) {
        Route::Markup
    } else if profile.is_code_extension(extension.as_str()) {
        Route::Code
    } else if profile.is_plain_extension(extension.as_str()) {
        Route::Plain
    } else {
        Route::Other
    };

    FileAction::Count { extension, route }
}
