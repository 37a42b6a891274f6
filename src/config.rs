use crate::domain::Version;
use crate::error::{NextVersionError, Result};
use crate::git::DEFAULT_TAG_PATTERN;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for next-version.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub tags: TagsConfig,

    #[serde(default)]
    pub bootstrap: BootstrapConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

fn default_tag_pattern() -> String {
    DEFAULT_TAG_PATTERN.to_string()
}

fn default_bootstrap_version() -> String {
    "0.2.0".to_string()
}

/// Which tags count as release tags.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagsConfig {
    /// Glob handed to git when listing tags
    #[serde(default = "default_tag_pattern")]
    pub pattern: String,
}

impl Default for TagsConfig {
    fn default() -> Self {
        TagsConfig {
            pattern: default_tag_pattern(),
        }
    }
}

/// Where the very first alpha series starts when no tag exists yet.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BootstrapConfig {
    #[serde(default = "default_bootstrap_version")]
    pub version: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        BootstrapConfig {
            version: default_bootstrap_version(),
        }
    }
}

impl BootstrapConfig {
    /// Parsed bootstrap version; accepts an optional `v` prefix
    pub fn parsed(&self) -> Result<Version> {
        Version::parse_tag(&self.version).map_err(|e| {
            NextVersionError::config(format!(
                "invalid bootstrap version '{}': {}",
                self.version, e
            ))
        })
    }
}

/// How results are handed to the caller.
#[derive(
    Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// GitHub Actions step outputs
    #[default]
    Github,
    /// `key=value` lines on stdout
    Plain,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `nextversion.toml` in current directory
/// 3. `.nextversion.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./nextversion.toml").exists() {
        fs::read_to_string("./nextversion.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".nextversion.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parse configuration from TOML text
pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config = toml::from_str(config_str)
        .map_err(|e| NextVersionError::config(format!("invalid configuration: {}", e)))?;

    // Fail early rather than at bootstrap time
    config.bootstrap.parsed()?;

    Ok(config)
}
