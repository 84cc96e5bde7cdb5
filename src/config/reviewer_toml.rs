//! Parsing and validation for jsreview.toml configuration files

use crate::error::ConfigError;
use crate::types::{RuleId, View};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default configuration file name, looked up in the current directory
pub const CONFIG_FILE_NAME: &str = "jsreview.toml";

/// Main configuration struct for jsreview.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// jsreview metadata
    pub jsreview: ReviewMeta,

    /// Analysis settings
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Rule toggles
    #[serde(default)]
    pub rules: RulesConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigError> {
        if self.jsreview.version != "1" {
            return Err(ConfigError::Validation(format!(
                "Unsupported configuration version '{}'. Expected '1'",
                self.jsreview.version
            )));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            jsreview: ReviewMeta {
                version: "1".to_string(),
            },
            analysis: AnalysisConfig::default(),
            rules: RulesConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// jsreview metadata section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewMeta {
    /// Configuration version (must be "1")
    pub version: String,
}

/// Analysis section
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Artificial delay before a report is shown, in milliseconds
    #[serde(default)]
    pub simulated_latency_ms: u64,
}

impl AnalysisConfig {
    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

/// Rules section: `rule-id = true | false`
///
/// Rules not listed stay enabled.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RulesConfig {
    #[serde(flatten)]
    pub rules: BTreeMap<RuleId, bool>,
}

/// Output configuration section
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Color output setting
    #[serde(default)]
    pub color: ColorOption,

    /// Report sections to show
    #[serde(default)]
    pub view: View,
}

/// Output format options
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

/// Color output options
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorOption {
    /// Auto-detect based on terminal capabilities
    #[default]
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

impl From<ColorOption> for termcolor::ColorChoice {
    fn from(option: ColorOption) -> Self {
        match option {
            ColorOption::Auto => termcolor::ColorChoice::Auto,
            ColorOption::Always => termcolor::ColorChoice::Always,
            ColorOption::Never => termcolor::ColorChoice::Never,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_CONFIG: &str = r#"
[jsreview]
version = "1"

[analysis]
simulated_latency_ms = 1500

[rules]
var-usage = false
loose-equality = true

[output]
format = "jsonl"
color = "never"
view = "issues"
"#;

    #[test]
    fn test_valid_config_parsing() {
        let config = Config::parse(VALID_CONFIG).unwrap();

        assert_eq!(config.jsreview.version, "1");
        assert_eq!(config.analysis.simulated_latency_ms, 1500);
        assert_eq!(
            config.analysis.simulated_latency(),
            Duration::from_millis(1500)
        );

        assert_eq!(config.rules.rules.len(), 2);
        assert_eq!(
            config.rules.rules.get(&RuleId::new("var-usage").unwrap()),
            Some(&false)
        );
        assert_eq!(
            config.rules.rules.get(&RuleId::new("loose-equality").unwrap()),
            Some(&true)
        );

        assert_eq!(config.output.format, OutputFormat::Jsonl);
        assert_eq!(config.output.color, ColorOption::Never);
        assert_eq!(config.output.view, View::Issues);
    }

    #[test]
    fn test_minimal_config() {
        let config = Config::parse("[jsreview]\nversion = \"1\"\n").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.analysis.simulated_latency(), Duration::ZERO);
        assert!(config.rules.rules.is_empty());
        assert_eq!(config.output.format, OutputFormat::Human);
        assert_eq!(config.output.color, ColorOption::Auto);
        assert_eq!(config.output.view, View::All);
    }

    #[test]
    fn test_invalid_version() {
        let result = Config::parse("[jsreview]\nversion = \"2\"\n");
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Unsupported configuration version")
        );
    }

    #[test]
    fn test_missing_version() {
        let result = Config::parse("[jsreview]\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_invalid_rule_id() {
        let invalid = r#"
[jsreview]
version = "1"

[rules]
"bad rule" = false
"#;
        assert!(matches!(Config::parse(invalid), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_invalid_format() {
        let invalid = r#"
[jsreview]
version = "1"

[output]
format = "xml"
"#;
        assert!(Config::parse(invalid).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load("/nonexistent/jsreview.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_color_option_conversion() {
        assert_eq!(
            termcolor::ColorChoice::from(ColorOption::Never),
            termcolor::ColorChoice::Never
        );
        assert_eq!(
            termcolor::ColorChoice::from(ColorOption::Always),
            termcolor::ColorChoice::Always
        );
    }
}
