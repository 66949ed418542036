//! Config file loading

use crate::domain::{
    default_emoji_replacements, default_priority_teams, DEFAULT_HEADER, DEFAULT_LABEL,
    DEFAULT_LIST_NAME,
};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const SECTION: &str = "trello-report";

/// File-level settings; every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub list_name: String,
    pub label: String,
    pub include_archived: bool,
    pub header: String,
    pub priority_teams: Vec<String>,
    pub emoji_replacements: BTreeMap<String, String>,
    pub include_timestamp: bool,
    pub keep_csv: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            list_name: DEFAULT_LIST_NAME.to_string(),
            label: DEFAULT_LABEL.to_string(),
            include_archived: false,
            header: DEFAULT_HEADER.to_string(),
            priority_teams: default_priority_teams(),
            emoji_replacements: default_emoji_replacements(),
            include_timestamp: true,
            keep_csv: false,
        }
    }
}

/// Load an explicit config file, or discover one in `search_dir`.
///
/// Explicit files must parse; a discovered file that fails to parse is
/// reported and replaced by defaults.
pub fn load_config(search_dir: &Path, config_path: Option<&Path>) -> Result<Config> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(search_dir),
    };

    let Some(config_file) = discovered else {
        return Ok(Config::default());
    };

    let content = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "toml" => parse_toml_config(&content, &config_file),
        "yaml" | "yml" => parse_yaml_config(&content, &config_file),
        other => Err(anyhow::anyhow!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        )),
    };

    match parsed {
        Ok(cfg) => {
            tracing::debug!("Loaded config from {}", config_file.display());
            Ok(cfg)
        }
        Err(e) if !config_path_provided => {
            tracing::warn!(
                "Ignoring auto-discovered config {}: {:#}",
                config_file.display(),
                e
            );
            Ok(Config::default())
        }
        Err(e) => Err(e),
    }
}

/// Parse TOML config, accepting an optional `[trello-report]` section.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

/// Parse YAML config, accepting an optional `trello-report:` section.
fn parse_yaml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    // An empty document parses as null
    if raw.is_null() {
        return Ok(Config::default());
    }

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

fn discover_config(search_dir: &Path) -> Option<PathBuf> {
    let candidates = [
        "trello-report.toml",
        ".trello-report.toml",
        "trello-report.yml",
        ".trello-report.yml",
        "trello-report.yaml",
        ".trello-report.yaml",
    ];

    candidates.iter().map(|c| search_dir.join(c)).find(|p| p.exists())
}
