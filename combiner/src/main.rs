//! Command-line entry point for the file combiner.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;

use combiner::combine::{collect_only, combine};
use combiner::exit_codes;
use combiner::io::config::{CombinerConfig, DEFAULT_CONFIG, load_config, write_config};
use combiner::logging;
use combiner::report::{build_report, report_lines};

#[derive(Parser)]
#[command(
    name = "combiner",
    version,
    about = "Concatenate a list of files into one framed output file"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default `combiner.toml` if missing.
    Init {
        /// Config file to create.
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        config: PathBuf,
        /// Overwrite an existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Read every file and write the combined output.
    Combine {
        /// Input files; replaces `files` from the config when given.
        paths: Vec<OsString>,
        /// Output file; replaces `output` from the config.
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        config: PathBuf,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Read every file and print the per-file report without writing output.
    Report {
        /// Input files; replaces `files` from the config when given.
        paths: Vec<OsString>,
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        config: PathBuf,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Init { config, force } => cmd_init(&config, force),
        Command::Combine {
            paths,
            output,
            config,
            json,
        } => cmd_combine(&config, paths, output, json),
        Command::Report {
            paths,
            config,
            json,
        } => cmd_report(&config, paths, json),
    }
}

fn cmd_init(config_path: &Path, force: bool) -> Result<()> {
    if !force && config_path.exists() {
        bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }
    write_config(config_path, &CombinerConfig::default())
        .with_context(|| format!("init {}", config_path.display()))?;
    println!("init: config={}", config_path.display());
    Ok(())
}

fn cmd_combine(
    config_path: &Path,
    paths: Vec<OsString>,
    output: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let config = load_config(config_path)?.with_overrides(into_paths(paths), output);
    debug!(files = config.files.len(), output = %config.output.display(), "config resolved");
    let outcome = combine(&config)?;
    let report = build_report(&outcome.results, Some(outcome.output.as_path()));
    if json {
        return print_json(&report);
    }
    for line in report_lines(&report) {
        println!("{line}");
    }
    println!(
        "All file contents have been saved to: {}",
        outcome.output.display()
    );
    Ok(())
}

fn cmd_report(config_path: &Path, paths: Vec<OsString>, json: bool) -> Result<()> {
    let config = load_config(config_path)?.with_overrides(into_paths(paths), None);
    let results = collect_only(&config)?;
    let report = build_report(&results, None);
    if json {
        return print_json(&report);
    }
    for line in report_lines(&report) {
        println!("{line}");
    }
    Ok(())
}

/// Raw arguments, so empty and non-UTF-8 names reach the collector.
fn into_paths(args: Vec<OsString>) -> Vec<PathBuf> {
    args.into_iter().map(PathBuf::from).collect()
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value).context("serialize report")?;
    println!("{payload}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_combine_with_paths_and_output() {
        let cli = Cli::parse_from(["combiner", "combine", "a.txt", "b.txt", "-o", "ai_input.txt"]);
        match cli.command {
            Command::Combine {
                paths,
                output,
                config,
                json,
            } => {
                assert_eq!(paths, vec![OsString::from("a.txt"), OsString::from("b.txt")]);
                assert_eq!(output, Some(PathBuf::from("ai_input.txt")));
                assert_eq!(config, PathBuf::from(DEFAULT_CONFIG));
                assert!(!json);
            }
            _ => panic!("expected combine"),
        }
    }

    #[test]
    fn parse_report_json() {
        let cli = Cli::parse_from(["combiner", "report", "--json", "-c", "other.toml"]);
        match cli.command {
            Command::Report {
                paths,
                config,
                json,
            } => {
                assert!(paths.is_empty());
                assert_eq!(config, PathBuf::from("other.toml"));
                assert!(json);
            }
            _ => panic!("expected report"),
        }
    }

    #[test]
    fn empty_path_argument_is_accepted() {
        let cli = Cli::parse_from(["combiner", "report", ""]);
        match cli.command {
            Command::Report { paths, .. } => {
                assert_eq!(into_paths(paths), vec![PathBuf::new()]);
            }
            _ => panic!("expected report"),
        }
    }

    #[test]
    fn parse_init_force() {
        let cli = Cli::parse_from(["combiner", "init", "--force"]);
        assert!(matches!(cli.command, Command::Init { force: true, .. }));
    }
}
