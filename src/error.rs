//! Error types for jsreview
//!
//! The scanner itself cannot fail. These errors cover the layers around it:
//! configuration loading, rule selection, and reading input.

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid TOML syntax or structure
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// Parsed configuration failed validation
    #[error("{0}")]
    Validation(String),
}

/// Rule-related errors
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// Rule not found
    #[error("Rule not found: {0}")]
    NotFound(String),
}

/// Top-level error type for jsreview
#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rule error
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    /// The current report has no suggestion at this position (1-indexed)
    #[error("No suggestion #{0} in the current report")]
    NoSuchSuggestion(usize),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
