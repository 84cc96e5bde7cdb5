//! Initialize a jsreview configuration
//!
//! Writes a commented `jsreview.toml` into the current directory.

use crate::config::CONFIG_FILE_NAME;
use std::fs;
use std::path::Path;

/// Default content for jsreview.toml
pub const DEFAULT_CONFIG_TOML: &str = r#"[jsreview]
version = "1"

[analysis]
# Delay before each report is shown, in milliseconds
simulated_latency_ms = 0

[rules]
# All rules are enabled by default
# Disable a rule: rule-name = false
# var-usage = true
# loose-equality = true
# missing-semicolon = true
# array-methods = true
# modern-declarations = true

[output]
format = "human"
color = "auto"
view = "all"
"#;

/// Error type for init command
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Path error
    #[error("Path error: {0}")]
    Path(String),
}

/// What happened to the configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    Skipped,
    Overwritten,
}

/// Run the init command
///
/// # Arguments
/// * `force` - If true, overwrite an existing file. If false, leave it alone.
pub fn run_init(force: bool) -> Result<InitOutcome, InitError> {
    write_config(Path::new(CONFIG_FILE_NAME), force)
}

/// Write the default configuration to `path`
pub fn write_config(path: &Path, force: bool) -> Result<InitOutcome, InitError> {
    if path.is_dir() {
        return Err(InitError::Path(format!(
            "Path '{}' exists but is a directory",
            path.display()
        )));
    }

    if path.exists() {
        if force {
            fs::write(path, DEFAULT_CONFIG_TOML)?;
            Ok(InitOutcome::Overwritten)
        } else {
            Ok(InitOutcome::Skipped)
        }
    } else {
        fs::write(path, DEFAULT_CONFIG_TOML)?;
        Ok(InitOutcome::Created)
    }
}
