//! Per-file status report printed after a run.

use std::path::Path;

use serde::Serialize;

use crate::core::outcome::{ErrorTier, FileOutcome, ResultSet};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Ok,
    NotFound,
    ReadError,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FileReport {
    pub path: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chars: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Report for a whole run. `output` is `None` when nothing was written.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RunReport {
    pub output: Option<String>,
    pub files: Vec<FileReport>,
}

pub fn build_report(results: &ResultSet, output: Option<&Path>) -> RunReport {
    let files = results
        .iter()
        .map(|(path, outcome)| match outcome {
            FileOutcome::Success { chars, .. } => FileReport {
                path: path.to_string(),
                status: Status::Ok,
                chars: Some(*chars),
                error: None,
            },
            FileOutcome::Failure(err) => FileReport {
                path: path.to_string(),
                status: match err.tier() {
                    ErrorTier::NotFound => Status::NotFound,
                    ErrorTier::ReadError => Status::ReadError,
                },
                chars: None,
                error: Some(err.to_string()),
            },
        })
        .collect();
    RunReport {
        output: output.map(|path| path.display().to_string()),
        files,
    }
}

/// Human-readable lines: `ok: {path} chars={n}` or `error: {path} {message}`.
pub fn report_lines(report: &RunReport) -> Vec<String> {
    report
        .files
        .iter()
        .map(|file| match (&file.error, file.chars) {
            (Some(error), _) => format!("error: {} {}", file.path, error),
            (None, chars) => format!("ok: {} chars={}", file.path, chars.unwrap_or(0)),
        })
        .collect()
}
