//! Writer: serialize a [`ResultSet`] into the combined output file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, instrument};

use crate::core::frame::write_entry;
use crate::core::outcome::ResultSet;

/// Output file name used when none is configured.
pub const DEFAULT_OUTPUT: &str = "combined_files.txt";

/// Create (or truncate) `output` and write every entry in set order.
///
/// Falls back to [`DEFAULT_OUTPUT`] when `output` is `None`. Returns the path
/// written. A failure mid-way leaves whatever was already flushed on disk.
#[instrument(skip(results), fields(entries = results.len()))]
pub fn write_combined(results: &ResultSet, output: Option<&Path>) -> Result<PathBuf> {
    let output = output.unwrap_or(Path::new(DEFAULT_OUTPUT));
    let file =
        File::create(output).with_context(|| format!("create output {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    for (path, outcome) in results.iter() {
        write_entry(&mut writer, path, outcome)
            .with_context(|| format!("write entry {path} to {}", output.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush output {}", output.display()))?;
    debug!(output = %output.display(), "combined output written");
    Ok(output.to_path_buf())
}
