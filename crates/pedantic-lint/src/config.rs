use crate::types::Severity;
use pedantic_types::ErrorCode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Contents written by `pedantic-lint init`.
pub const DEFAULT_CONFIG: &str = r#"[audit]
exclude_scopes = []

[rules.property-snake-case]
enabled = true
severity = "error"
allow = []

[rules.node-camel-case]
enabled = true
severity = "error"

[rules.node-singular]
enabled = true
severity = "error"

[rules.relationship-upper-snake-case]
enabled = true
severity = "error"

[rules.pipeline-lower-dash-case]
enabled = true
severity = "error"

[inflection]
uncountable = []

# [[inflection.irregular]]
# singular = "octopus"
# plural = "octopodes"
"#;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub audit: AuditConfig,

    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,

    #[serde(default)]
    pub inflection: InflectionConfig,
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<Severity> {
        self.rules.get(rule_name).and_then(|c| c.severity)
    }

    #[must_use]
    pub fn rule_allow(&self, rule_name: &str) -> &[String] {
        self.rules
            .get(rule_name)
            .map_or(&[], |c| c.allow.as_slice())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Glob patterns of scopes whose pipelines are skipped.
    #[serde(default)]
    pub exclude_scopes: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    #[serde(default)]
    pub enabled: Option<bool>,

    #[serde(default)]
    pub severity: Option<Severity>,

    /// Glob patterns of names this rule never reports.
    #[serde(default)]
    pub allow: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InflectionConfig {
    #[serde(default)]
    pub uncountable: Vec<String>,

    #[serde(default)]
    pub irregular: Vec<IrregularConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrregularConfig {
    pub singular: String,
    pub plural: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {message}")]
    Parse { message: String },

    #[error("Invalid pattern `{pattern}` in {section}: {message}")]
    InvalidPattern {
        section: String,
        pattern: String,
        message: String,
    },
}

impl ErrorCode for ConfigError {
    fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CONFIG_IO",
            Self::Parse { .. } => "CONFIG_PARSE",
            Self::InvalidPattern { .. } => "CONFIG_INVALID_PATTERN",
        }
    }

    fn is_recoverable(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}
