//! Combiner configuration stored in `combiner.toml`.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use super::write::DEFAULT_OUTPUT;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG: &str = "combiner.toml";

/// Combiner configuration (TOML).
///
/// Missing fields fall back to defaults: no input files and
/// `combined_files.txt` as the output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CombinerConfig {
    /// Ordered input paths. Any entry is accepted; unreadable ones are
    /// reported per file. Duplicates collapse to one entry.
    pub files: Vec<PathBuf>,

    /// Output file name.
    pub output: PathBuf,
}

impl Default for CombinerConfig {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl CombinerConfig {
    /// Only the output name is checked; input paths are never rejected here.
    pub fn validate(&self) -> Result<()> {
        if self.output.to_string_lossy().trim().is_empty() {
            return Err(anyhow!("output must be a non-empty file name"));
        }
        Ok(())
    }

    /// Apply command-line overrides. Non-empty `files` replaces the list.
    pub fn with_overrides(mut self, files: Vec<PathBuf>, output: Option<PathBuf>) -> Self {
        if !files.is_empty() {
            self.files = files;
        }
        if let Some(output) = output {
            self.output = output;
        }
        self
    }
}

/// Parse `combiner.toml` without validating it.
///
/// A missing file yields `CombinerConfig::default()`. Validation is left to
/// the caller so command-line overrides can repair a bad value first.
pub fn load_config(path: &Path) -> Result<CombinerConfig> {
    if !path.exists() {
        return Ok(CombinerConfig::default());
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parse config {}", path.display()))
}

/// Write `cfg` as TOML, staging it beside `path` and renaming it into place
/// so a reader never sees a half-written config.
pub fn write_config(path: &Path, cfg: &CombinerConfig) -> Result<()> {
    cfg.validate()?;
    let toml_text = toml::to_string_pretty(cfg).context("serialize combiner config")?;
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("create config dir {}", dir.display()))?;
    }
    let staged = staging_path(path);
    fs::write(&staged, format!("{toml_text}\n"))
        .with_context(|| format!("stage config {}", staged.display()))?;
    fs::rename(&staged, path)
        .with_context(|| format!("move config into place {}", path.display()))
}

/// `combiner.toml` stages as `combiner.toml.partial`.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".partial");
    path.with_file_name(name)
}
