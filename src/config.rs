//! Configuration file parsing and validation

pub mod reviewer_toml;

pub use reviewer_toml::{
    AnalysisConfig, CONFIG_FILE_NAME, ColorOption, Config, OutputConfig, OutputFormat,
    RulesConfig,
};
