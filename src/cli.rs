//! CLI argument parsing and command dispatch

pub mod analyze;
pub mod args;
pub mod common;
pub mod init;
pub mod list;

// Re-export types for convenient access
pub use args::{AnalyzeArgs, Cli, Command};
