//! Names of the raw tags produced by the counters.

/// Running line-of-code total over the whole application.
pub const LOC: &str = "LOC";
/// Running function total over the whole application.
pub const FUNCTIONS: &str = "functions";
/// Files that are recognised but not counted any further.
pub const OTHER_FILES: &str = "otherFiles";
/// Language label used for plain (non-code) text files.
pub const PLAIN_LANGUAGE: &str = "other";

pub fn file(extension: &str) -> String {
    format!("File-{extension}")
}

pub fn loc(language: &str) -> String {
    format!("LOC_{language}")
}

pub fn functions(extension: &str) -> String {
    format!("functions_{extension}")
}

pub fn template(id: &str) -> String {
    format!("template_{id}")
}

/// Per file-type variant of a node count, e.g. `form_field`.
pub fn node_by_extension(extension: &str, node: &str) -> String {
    format!("{extension}_{node}")
}
