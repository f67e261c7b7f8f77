//! Orchestration for `combiner combine` and `combiner report`.

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use crate::core::outcome::ResultSet;
use crate::io::collect::collect_files;
use crate::io::config::CombinerConfig;
use crate::io::write::write_combined;

/// Results of a full collect-then-write pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombineOutcome {
    pub results: ResultSet,
    pub output: PathBuf,
}

/// Collect every configured file and write the combined output.
///
/// Per-file read failures are captured in the results; only config or
/// output errors are returned as `Err`.
pub fn combine(config: &CombinerConfig) -> Result<CombineOutcome> {
    config.validate()?;
    let results = collect_files(&config.files);
    let output = write_combined(&results, Some(config.output.as_path()))?;
    info!(
        output = %output.display(),
        entries = results.len(),
        failures = results.failure_count(),
        "combine finished"
    );
    Ok(CombineOutcome { results, output })
}

/// Collect every configured file without writing any output.
pub fn collect_only(config: &CombinerConfig) -> Result<ResultSet> {
    config.validate()?;
    Ok(collect_files(&config.files))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::test_support::{scratch_dir, write_input};

    #[test]
    fn combines_present_and_missing_files() {
        let temp = scratch_dir();
        let a = write_input(temp.path(), "a.txt", "alpha");
        let missing = temp.path().join("missing.txt").display().to_string();
        let output = temp.path().join("ai_input.txt");
        let config = CombinerConfig {
            files: vec![PathBuf::from(&a), PathBuf::from(&missing)],
            output: output.clone(),
        };

        let outcome = combine(&config).expect("combine");
        assert_eq!(outcome.output, output);
        assert_eq!(outcome.results.len(), 2);

        let expected = format!(
            "// === FILE: {a} === //\nalpha\n\n// === END OF {a} === //\n\n\
             // === ERROR: {missing} === //\n// File not found: {missing}\n\n"
        );
        assert_eq!(fs::read_to_string(&output).expect("read output"), expected);
    }

    #[test]
    fn empty_file_list_writes_empty_output() {
        let temp = scratch_dir();
        let output = temp.path().join("out.txt");
        let config = CombinerConfig {
            files: Vec::new(),
            output: output.clone(),
        };

        let outcome = combine(&config).expect("combine");
        assert!(outcome.results.is_empty());
        assert_eq!(fs::read_to_string(&output).expect("read output"), "");
    }

    #[test]
    fn collect_only_writes_nothing() {
        let temp = scratch_dir();
        let a = write_input(temp.path(), "a.txt", "alpha");
        let output = temp.path().join("out.txt");
        let config = CombinerConfig {
            files: vec![PathBuf::from(a)],
            output: output.clone(),
        };

        let results = collect_only(&config).expect("collect");
        assert_eq!(results.success_count(), 1);
        assert!(!output.exists());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = CombinerConfig {
            files: Vec::new(),
            output: PathBuf::new(),
        };
        assert!(combine(&config).is_err());
    }

    #[test]
    fn blank_paths_are_per_file_failures() {
        let temp = scratch_dir();
        let output = temp.path().join("out.txt");
        let config = CombinerConfig {
            files: vec![PathBuf::new()],
            output: output.clone(),
        };

        let outcome = combine(&config).expect("combine");
        assert_eq!(outcome.results.failure_count(), 1);
        assert_eq!(
            fs::read_to_string(&output).expect("read output"),
            "// === ERROR:  === //\n// File not found: \n\n"
        );
    }
}
