//! Test-only helpers for building input files.

use std::fs;
use std::path::Path;

/// Write `contents` to `dir/name` and return the path as a string.
pub fn write_input(dir: &Path, name: &str, contents: &str) -> String {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create input dir");
    }
    fs::write(&path, contents).expect("write input");
    path.display().to_string()
}

/// Create a scratch directory that is removed on drop.
pub fn scratch_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("tempdir")
}
