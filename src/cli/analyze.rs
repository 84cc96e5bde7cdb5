//! Analyze command implementation
//!
//! This module implements the `jsreview analyze` command, which:
//! - Loads configuration from jsreview.toml (if any)
//! - Reads source from a file, stdin, or the built-in sample
//! - Runs the scanner through a review session
//! - Formats the report (human or JSONL)
//! - Returns an exit code reflecting whether issues were found

use crate::cli::args::AnalyzeArgs;
use crate::cli::common::{
    EXIT_ISSUES, EXIT_SUCCESS, build_scanner, exit_code_for, load_config,
};
use crate::config::{ColorOption, OutputFormat};
use crate::error::ReviewError;
use crate::output::{HumanFormatter, JsonlFormatter};
use crate::session::ReviewSession;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::time::Duration;
use termcolor::StandardStream;

/// Run the analyze command
///
/// # Returns
///
/// Exit code:
/// - 0: No issues (or nothing to analyze, or an example was printed)
/// - 1: One or more issues found
/// - 2: Error (I/O, unknown rule, missing suggestion)
/// - 3: Parse error (invalid TOML configuration)
pub fn run_analyze(args: &AnalyzeArgs, color: Option<ColorOption>, config: Option<&Path>) -> i32 {
    match run_analyze_inner(args, color, config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit_code_for(&e)
        }
    }
}

fn run_analyze_inner(
    args: &AnalyzeArgs,
    color: Option<ColorOption>,
    config_path: Option<&Path>,
) -> Result<i32, ReviewError> {
    let config = load_config(config_path)?;
    let scanner = build_scanner(&config)?;

    let format = args.format.unwrap_or(config.output.format);
    let view = args.view.unwrap_or(config.output.view);
    let color = color.unwrap_or(config.output.color);
    let latency = args
        .delay_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.analysis.simulated_latency());

    let mut session = ReviewSession::new(scanner).with_latency(latency);
    session.set_view(view);

    let source_name = if args.sample {
        session.load_sample();
        "sample".to_string()
    } else {
        let (name, code) = read_input(args.file.as_deref())?;
        session.set_code(code);
        name
    };

    if !session.begin_analysis() {
        eprintln!("Warning: Nothing to analyze: input is empty.");
        return Ok(EXIT_SUCCESS);
    }

    if format == OutputFormat::Human && args.example.is_none() {
        eprintln!("Analyzing {}...", source_name);
    }

    let report = session
        .finish_analysis()
        .cloned()
        .ok_or_else(|| io::Error::other("analysis did not produce a report"))?;

    if let Some(number) = args.example {
        let example = number
            .checked_sub(1)
            .and_then(|index| session.copy_example(index))
            .ok_or(ReviewError::NoSuchSuggestion(number))?;
        println!("{}", example);
        return Ok(EXIT_SUCCESS);
    }

    match format {
        OutputFormat::Human => {
            eprintln!();
            let mut stdout = StandardStream::stdout(color.into());
            HumanFormatter::new(session.view()).write(&mut stdout, &report)?;
            stdout.flush()?;
        }
        OutputFormat::Jsonl => {
            print!("{}", JsonlFormatter::new(session.view()).format(&report));
        }
    }

    Ok(if report.is_clean() {
        EXIT_SUCCESS
    } else {
        EXIT_ISSUES
    })
}

/// Read source text, returning a display name and the contents
///
/// `None` and `-` read from stdin.
fn read_input(file: Option<&Path>) -> Result<(String, String), io::Error> {
    match file {
        Some(path) if path != Path::new("-") => {
            let content = fs::read_to_string(path)?;
            Ok((path.display().to_string(), content))
        }
        _ => {
            let mut content = String::new();
            io::stdin().read_to_string(&mut content)?;
            Ok(("<stdin>".to_string(), content))
        }
    }
}
