//! Configuration file loading for keygap.
//!
//! Reads `.keygap/keygap.json` and provides typed access to all settings.
//! A missing file yields defaults (no targets, so nothing is checked); a file
//! that exists but cannot be parsed is an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::{ConfigError, Severity};

pub const CONFIG_DIR: &str = ".keygap";
pub const CONFIG_FILE: &str = "keygap.json";
pub const RULE_NAME: &str = "no-missing-destructure-keys";

/// Top-level keygap configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeygapConfig {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub rules: RulesConfig,
    /// Glob patterns for files that are never checked.
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RulesConfig {
    #[serde(rename = "no-missing-destructure-keys", default)]
    pub no_missing_destructure_keys: DestructureRuleConfig,
}

/// Options of the `no-missing-destructure-keys` rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DestructureRuleConfig {
    #[serde(default)]
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<TargetOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_keys: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_key_pattern: Option<String>,
}

/// A configured target as written by the user; `argumentIndex` may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TargetOption {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub argument_index: Option<u32>,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

impl Default for KeygapConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            rules: RulesConfig::default(),
            ignore_patterns: vec![],
        }
    }
}

impl KeygapConfig {
    /// Load configuration from `keygap.json` inside the given config directory.
    /// Returns defaults if the file doesn't exist.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_file(&config_path)
    }

    /// Load and validate a specific config file.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: display.clone(),
            source,
        })?;
        let cfg: Self = serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: display,
            source,
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Structural checks serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rule = &self.rules.no_missing_destructure_keys;
        for (i, target) in rule.targets.iter().flatten().enumerate() {
            if target.name.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "rules.{RULE_NAME}.targets[{i}].name must not be empty"
                )));
            }
        }
        for pattern in &self.ignore_patterns {
            globset::Glob::new(pattern).map_err(|e| {
                ConfigError::Invalid(format!("ignore_patterns: `{pattern}`: {e}"))
            })?;
        }
        Ok(())
    }

    pub fn destructure_rule(&self) -> &DestructureRuleConfig {
        &self.rules.no_missing_destructure_keys
    }
}

/// Walk up from `start` looking for a `.keygap` directory.
pub fn find_config_dir(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_DIR))
        .find(|candidate| candidate.is_dir())
}
