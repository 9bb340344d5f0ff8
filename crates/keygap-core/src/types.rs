use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A call name to check, with the position of its object-literal argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSpec {
    pub name: String,
    /// 0-based index into the call's arguments.
    pub argument_index: usize,
}

/// Keys bound by an object pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DestructureResult {
    pub keys: HashSet<String>,
    pub has_rest: bool,
}

/// Keys statically visible in an object literal, in order of first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentResult {
    pub keys: Vec<String>,
    pub cannot_verify: bool,
}

impl ArgumentResult {
    pub fn unverifiable() -> Self {
        Self {
            keys: Vec::new(),
            cannot_verify: true,
        }
    }
}

/// Outcome of checking one candidate site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Ok,
    MissingKeys(Vec<String>),
    CannotVerify,
}

impl Verdict {
    pub fn is_ok(&self) -> bool {
        matches!(self, Verdict::Ok)
    }

    /// Message id used by the reporting layer, `None` for `Ok`.
    pub fn message_id(&self) -> Option<MessageId> {
        match self {
            Verdict::Ok => None,
            Verdict::MissingKeys(_) => Some(MessageId::MissingKeys),
            Verdict::CannotVerify => Some(MessageId::CannotVerify),
        }
    }
}

/// Diagnostic kinds emitted by the destructure rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageId {
    MissingKeys,
    CannotVerify,
}

impl MessageId {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageId::MissingKeys => "missingKeys",
            MessageId::CannotVerify => "cannotVerify",
        }
    }

    /// Stable short code shown in output and accepted by `--suppress`.
    pub fn code(&self) -> &'static str {
        match self {
            MessageId::MissingKeys => "K001",
            MessageId::CannotVerify => "K002",
        }
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reporting level of a rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    #[serde(alias = "warning")]
    Warn,
    Off,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warn => "WARNING",
            Severity::Off => "OFF",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
