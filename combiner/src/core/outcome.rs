//! Per-file read outcomes and the ordered result set they are collected into.

use std::collections::HashMap;
use std::io;

use serde::Serialize;
use thiserror::Error;

/// Why a single input file could not be read.
///
/// `NotFound` is reported with the path; every other variant renders as
/// `Error reading file: {detail}` where `detail` is the underlying error text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("Error reading file: {detail}")]
    PermissionDenied { detail: String },

    #[error("Error reading file: {detail}")]
    IsADirectory { detail: String },

    #[error("Error reading file: {detail}")]
    InvalidUtf8 { detail: String },

    #[error("Error reading file: {detail}")]
    Io { detail: String },
}

/// Coarse error classification exposed in reports.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorTier {
    NotFound,
    ReadError,
}

impl ReadError {
    /// Classify an I/O error raised while reading `path`.
    pub fn from_io(path: &str, err: &io::Error) -> Self {
        let detail = err.to_string();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound {
                path: path.to_string(),
            },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { detail },
            io::ErrorKind::IsADirectory => Self::IsADirectory { detail },
            _ => Self::Io { detail },
        }
    }

    pub fn tier(&self) -> ErrorTier {
        match self {
            Self::NotFound { .. } => ErrorTier::NotFound,
            Self::PermissionDenied { .. }
            | Self::IsADirectory { .. }
            | Self::InvalidUtf8 { .. }
            | Self::Io { .. } => ErrorTier::ReadError,
        }
    }
}

/// Result of reading one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Full decoded text and its length in chars (not bytes).
    Success { content: String, chars: usize },
    Failure(ReadError),
}

impl FileOutcome {
    pub fn success(content: String) -> Self {
        let chars = content.chars().count();
        Self::Success { content, chars }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Outcomes keyed by path, iterated in first-insertion order.
///
/// Inserting a path that is already present replaces its outcome in place:
/// the entry keeps its original position and the last outcome wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    entries: Vec<(String, FileOutcome)>,
    index: HashMap<String, usize>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the outcome for `path`, returning the replaced one.
    pub fn insert(&mut self, path: impl Into<String>, outcome: FileOutcome) -> Option<FileOutcome> {
        let path = path.into();
        if let Some(&slot) = self.index.get(&path) {
            return Some(std::mem::replace(&mut self.entries[slot].1, outcome));
        }
        self.index.insert(path.clone(), self.entries.len());
        self.entries.push((path, outcome));
        None
    }

    pub fn get(&self, path: &str) -> Option<&FileOutcome> {
        self.index.get(path).map(|&slot| &self.entries[slot].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FileOutcome)> {
        self.entries
            .iter()
            .map(|(path, outcome)| (path.as_str(), outcome))
    }

    pub fn success_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, outcome)| outcome.is_success())
            .count()
    }

    pub fn failure_count(&self) -> usize {
        self.len() - self.success_count()
    }
}
