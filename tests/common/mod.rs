// tests/common/mod.rs
//! 共通テストユーティリティ

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

/// `Foo.java` with ten non-blank lines and a single method declaration.
pub const FOO_JAVA: &str = "package demo;\n\
    \n\
    import java.util.List;\n\
    \n\
    class Foo {\n\
    // counter\n\
    int calls = 0;\n\
    public void bar() {\n\
    calls++;\n\
    return;\n\
    }\n\
    \n\
    }\n";

/// A root directory with one subdirectory per application, plus room for
/// the report and the mapping file next to it.
#[derive(Debug)]
pub struct Workspace {
    dir: TempDir,
}

#[allow(dead_code)]
impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("apps")).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn apps(&self) -> PathBuf {
        self.dir.path().join("apps")
    }

    pub fn app(&self, name: &str) -> PathBuf {
        let path = self.apps().join(name);
        fs::create_dir_all(&path).unwrap();
        path
    }

    pub fn write_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.apps().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    /// Mapping file with the given `column=tags` lines.
    pub fn mapping(&self, lines: &[&str]) -> PathBuf {
        let path = self.dir.path().join("report.properties");
        fs::write(&path, lines.join("\n")).unwrap();
        path
    }

    pub fn report(&self) -> PathBuf {
        self.dir.path().join("report.csv")
    }

    pub fn read_report(&self) -> String {
        fs::read_to_string(self.report()).unwrap()
    }
}
