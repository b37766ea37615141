//! Configuration file support for godi.
//!
//! Provides YAML-based configuration through `godi.config.yml` files,
//! including data structures, file loading, and validation.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::dependency_analysis::domain::MIN_MAX_CHARS;
use crate::shared::error::GodiError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "godi.config.yml";

/// Top-level configuration file schema.
///
/// Every field is optional; command-line flags take precedence.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub all: Option<bool>,
    pub builtin: Option<bool>,
    pub subpkg: Option<bool>,
    pub format: Option<String>,
    pub max_chars: Option<usize>,
    pub timeout_secs: Option<u64>,
    pub go_command: Option<String>,
    pub quiet: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured output format, if any
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(OutputFormat::from_str)
            .transpose()
            .map_err(|e| anyhow::anyhow!(e))
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|e| GodiError::ConfigError {
        path: path.to_path_buf(),
        details: e.to_string(),
        hint: "Check that the file exists and is readable.".to_string(),
    })?;

    // An empty file is a valid, empty configuration
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile =
        serde_yaml_ng::from_str(&content).map_err(|e| GodiError::ConfigError {
            path: path.to_path_buf(),
            details: e.to_string(),
            hint: "Ensure the file contains valid YAML syntax.".to_string(),
        })?;

    validate_config(&config).map_err(|e| GodiError::ConfigError {
        path: path.to_path_buf(),
        details: e.to_string(),
        hint: "Fix the listed field or remove it to use the default.".to_string(),
    })?;
    warn_unknown_fields(&config, path);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    tracing::debug!(path = %config_path.display(), "discovered config file");
    load_config_from_path(&config_path).map(Some)
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(max_chars) = config.max_chars {
        if max_chars < MIN_MAX_CHARS {
            anyhow::bail!(
                "max_chars must be at least {} (got {})",
                MIN_MAX_CHARS,
                max_chars
            );
        }
    }

    if config.timeout_secs == Some(0) {
        anyhow::bail!("timeout_secs must be greater than 0");
    }

    if let Some(command) = &config.go_command {
        if command.trim().is_empty() {
            anyhow::bail!("go_command must not be empty");
        }
    }

    config.output_format()?;
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile, path: &Path) {
    for key in config.unknown_fields.keys() {
        tracing::warn!(
            field = %key,
            path = %path.display(),
            "unknown config field will be ignored"
        );
    }
}
