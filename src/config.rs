//! Configuration handling for cmodule.
//! Loads the module rules (copyright banner, guard style and endif comment)
//! from `module-rules.json`, or from a YAML file when one is given explicitly.

use log::debug;
use serde::Deserialize;
use std::path::Path;

use crate::constants::YAML_EXTENSIONS;
use crate::error::{Error, Result};

/// Controls how a filename becomes a guard token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuardStyle {
    pub suffix: String,
    pub prefix: String,
    /// Keep `.h` in the guard instead of stripping it.
    pub save_extension: bool,
}

/// The full set of rules applied to every generated module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModuleRules {
    /// Banner lines emitted at the top of both files, in order.
    pub copyright: Vec<String>,
    pub guard_style: GuardStyle,
    /// Text following `#endif `; `$(GUARD)` is replaced with the guard token.
    pub endif_comment: String,
}

/// Configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Picks the format from the file extension, falling back to JSON.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if YAML_EXTENSIONS.contains(&ext) => ConfigFormat::Yaml,
            _ => ConfigFormat::Json,
        }
    }
}

/// Parses module rules from raw configuration content.
///
/// # Errors
/// * `Error::JsonParse` / `Error::YamlParse` if the content is malformed
pub fn parse_rules(content: &str, format: ConfigFormat) -> Result<ModuleRules> {
    let rules = match format {
        ConfigFormat::Json => serde_json::from_str(content)?,
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(rules)
}

/// Reads and parses the module rules file.
///
/// # Arguments
/// * `config_path` - Path to the configuration file
///
/// # Returns
/// * `Result<ModuleRules>` - Parsed rules
///
/// # Errors
/// * `Error::ConfigRead` if the file cannot be read
/// * `Error::JsonParse` / `Error::YamlParse` if the content is malformed
pub fn load_rules<P: AsRef<Path>>(config_path: P) -> Result<ModuleRules> {
    let config_path = config_path.as_ref();
    debug!("Loading configuration from {}", config_path.display());

    let content = std::fs::read_to_string(config_path).map_err(|source| Error::ConfigRead {
        path: config_path.display().to_string(),
        source,
    })?;

    let rules = parse_rules(&content, ConfigFormat::from_path(config_path))?;
    debug!("Loaded rules: {:?}", rules);
    Ok(rules)
}
