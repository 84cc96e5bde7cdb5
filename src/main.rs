//! jsreview CLI entry point

use clap::Parser;
use jsreview::cli::common::{EXIT_ERROR, EXIT_SUCCESS};
use jsreview::cli::init::InitOutcome;
use jsreview::cli::{Command, args::Cli};
use jsreview::session::SAMPLE_CODE;
use std::process;

fn main() {
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    let exit_code = match &cli.command {
        Command::Analyze(args) => jsreview::cli::analyze::run_analyze(args, cli.color, config),
        Command::Sample => {
            println!("{}", SAMPLE_CODE);
            EXIT_SUCCESS
        }
        Command::List { format } => jsreview::cli::list::run_list(*format, config),
        Command::Init { force } => match jsreview::cli::init::run_init(*force) {
            Ok(InitOutcome::Created) => {
                println!("Created jsreview.toml.");
                EXIT_SUCCESS
            }
            Ok(InitOutcome::Overwritten) => {
                println!("Overwrote jsreview.toml.");
                EXIT_SUCCESS
            }
            Ok(InitOutcome::Skipped) => {
                eprintln!("Warning: jsreview.toml already exists. Use --force to overwrite.");
                EXIT_SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                EXIT_ERROR
            }
        },
    };

    process::exit(exit_code);
}
