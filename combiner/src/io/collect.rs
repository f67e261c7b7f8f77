//! Collector: read every input path into a [`ResultSet`].

use std::fs;
use std::path::Path;

use tracing::{debug, instrument, warn};

use crate::core::outcome::{FileOutcome, ReadError, ResultSet};

/// Read each path in order, isolating failures per path.
///
/// Never fails as a whole: unreadable files become `Failure` outcomes.
/// Entries are keyed by the lossy UTF-8 rendering of the path, so duplicate
/// paths collapse to one entry holding the last outcome.
#[instrument(skip_all, fields(files = paths.len()))]
pub fn collect_files<P: AsRef<Path>>(paths: &[P]) -> ResultSet {
    let mut results = ResultSet::new();
    for path in paths {
        let path = path.as_ref();
        let name = path.to_string_lossy().into_owned();
        let outcome = read_file(path);
        match &outcome {
            FileOutcome::Success { chars, .. } => debug!(path = %name, chars, "read file"),
            FileOutcome::Failure(err) => warn!(path = %name, error = %err, "read failed"),
        }
        if results.insert(name.as_str(), outcome).is_some() {
            debug!(path = %name, "duplicate path, keeping last outcome");
        }
    }
    debug!(
        entries = results.len(),
        failures = results.failure_count(),
        "collection finished"
    );
    results
}

/// Read one file fully as UTF-8 text with universal newlines.
pub fn read_file(path: &Path) -> FileOutcome {
    match read_text(path) {
        Ok(content) => FileOutcome::success(translate_newlines(content)),
        Err(err) => FileOutcome::Failure(err),
    }
}

fn read_text(path: &Path) -> Result<String, ReadError> {
    let bytes =
        fs::read(path).map_err(|err| ReadError::from_io(&path.to_string_lossy(), &err))?;
    String::from_utf8(bytes).map_err(|err| ReadError::InvalidUtf8 {
        detail: err.utf8_error().to_string(),
    })
}

/// `\r\n` and lone `\r` both become `\n`.
fn translate_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
