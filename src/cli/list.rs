//! List command implementation
//!
//! This module implements the `jsreview list` command, which prints every
//! enabled line rule and suggestion template in scan order.

use crate::cli::common::{EXIT_SUCCESS, build_scanner, exit_code_for, load_config};
use crate::config::OutputFormat;
use crate::error::ReviewError;
use crate::output::{RuleInfo, RuleListHumanFormatter, RuleListJsonlFormatter};
use std::path::Path;

/// Run the list command
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 2: Error
/// - 3: Parse error (invalid TOML configuration)
pub fn run_list(format: Option<OutputFormat>, config: Option<&Path>) -> i32 {
    match run_list_inner(format, config) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit_code_for(&e)
        }
    }
}

fn run_list_inner(format: Option<OutputFormat>, config_path: Option<&Path>) -> Result<(), ReviewError> {
    let config = load_config(config_path)?;
    let scanner = build_scanner(&config)?;
    let format = format.unwrap_or(config.output.format);

    let rules = RuleInfo::from_registry(scanner.registry());

    if rules.is_empty() {
        if format == OutputFormat::Human {
            println!("No rules are enabled.");
        }
        return Ok(());
    }

    match format {
        OutputFormat::Human => RuleListHumanFormatter::new().write_to_stdout(&rules),
        OutputFormat::Jsonl => RuleListJsonlFormatter::new().write_to_stdout(&rules),
    }

    Ok(())
}
