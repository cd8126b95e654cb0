//! Configuration file support for twotrack.
//!
//! Provides YAML-based configuration through `twotrack.config.yml` files,
//! including data structures, file loading, validation and merging with
//! command-line values.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::application::dto::OutputFormat;
use crate::pipeline::{Pipeline, Step};
use crate::shared::error::TwotrackError;
use crate::shared::security::{validate_regular_file, MAX_CONFIG_FILE_SIZE};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "twotrack.config.yml";

/// Input used when neither the command line nor the config provides one.
pub const DEFAULT_INPUT: &str = "10";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub input: Option<ConfigInput>,
    pub steps: Option<Vec<String>>,
    pub verbose: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// The `input` field accepts both `input: 10` and `input: "10"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ConfigInput {
    Integer(i64),
    Text(String),
}

impl fmt::Display for ConfigInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigInput::Integer(value) => write!(f, "{}", value),
            ConfigInput::Text(text) => write!(f, "{}", text),
        }
    }
}

impl ConfigFile {
    /// Parses the configured steps, if any.
    pub fn parsed_steps(&self) -> Result<Option<Vec<Step>>> {
        self.steps
            .as_ref()
            .map(|steps| {
                steps
                    .iter()
                    .map(|raw| raw.parse::<Step>().map_err(anyhow::Error::from))
                    .collect::<Result<Vec<_>>>()
            })
            .transpose()
    }

    /// Parses the configured output format, if any.
    pub fn parsed_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|raw| {
                raw.parse::<OutputFormat>()
                    .map_err(|message| anyhow::Error::from(TwotrackError::Validation { message }))
            })
            .transpose()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    validate_regular_file(path, "config file", MAX_CONFIG_FILE_SIZE).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    config.parsed_format()?;
    config.parsed_steps()?;
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<_> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

/// Values given on the command line. `None` and empty mean "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub input: Option<String>,
    pub steps: Vec<Step>,
    pub format: Option<OutputFormat>,
    pub verbose: bool,
}

/// Effective settings after merging the command line over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input: String,
    pub steps: Vec<Step>,
    pub format: OutputFormat,
    pub verbose: bool,
}

impl Settings {
    /// Command-line values win; the config fills the gaps; defaults fill the rest.
    pub fn resolve(overrides: Overrides, config: Option<&ConfigFile>) -> Result<Self> {
        let input = match (overrides.input, config.and_then(|c| c.input.as_ref())) {
            (Some(input), _) => input,
            (None, Some(input)) => input.to_string(),
            (None, None) => DEFAULT_INPUT.to_string(),
        };

        let steps = if !overrides.steps.is_empty() {
            overrides.steps
        } else {
            let configured = match config {
                Some(config) => config.parsed_steps()?,
                None => None,
            };
            configured.unwrap_or_else(Pipeline::default_steps)
        };

        let format = match overrides.format {
            Some(format) => format,
            None => match config {
                Some(config) => config.parsed_format()?.unwrap_or_default(),
                None => OutputFormat::default(),
            },
        };

        let verbose = overrides.verbose || config.and_then(|c| c.verbose).unwrap_or(false);

        Ok(Self {
            input,
            steps,
            format,
            verbose,
        })
    }
}
