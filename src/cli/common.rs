//! Common helper functions shared across CLI commands

use crate::config::{CONFIG_FILE_NAME, Config};
use crate::engine::Scanner;
use crate::error::{ConfigError, ReviewError, RuleError};
use crate::rules::RuleRegistry;
use std::path::Path;

/// Process exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ISSUES: i32 = 1;
pub const EXIT_ERROR: i32 = 2;
pub const EXIT_PARSE_ERROR: i32 = 3;

/// Load configuration
///
/// An explicit path must exist. Without one, `jsreview.toml` in the current
/// directory is used when present, and defaults otherwise.
///
/// # Errors
///
/// Returns `ConfigError::Io` if the file cannot be read.
/// Returns `ConfigError::Parse` or `ConfigError::Validation` if it is invalid.
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        return Config::load(path);
    }

    let default_path = Path::new(CONFIG_FILE_NAME);
    if default_path.exists() {
        return Config::load(default_path);
    }

    Ok(Config::default())
}

/// Build a scanner with the rules enabled by the configuration
pub(crate) fn build_scanner(config: &Config) -> Result<Scanner, RuleError> {
    let registry = RuleRegistry::build_from_config(&config.rules)?;
    Ok(Scanner::new(registry))
}

/// Map an error to the process exit code
pub(crate) fn exit_code_for(err: &ReviewError) -> i32 {
    match err {
        ReviewError::Config(ConfigError::Parse(_)) => EXIT_PARSE_ERROR,
        _ => EXIT_ERROR,
    }
}
