use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub version: String,
    pub command: String,
    pub status: String, // "ok" | "error" | "warning"
    pub files_analyzed: Vec<String>,
    pub errors: Vec<Violation>,
    pub warnings: Vec<Violation>,
    pub suppressed: Vec<Violation>,
    pub skipped: Vec<SkippedFile>,
    pub info: CheckInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    pub code: String,
    pub message_id: String,
    pub severity: String, // "ERROR" | "WARNING" | "INFO"
    pub rule: String,
    pub message: String,
    pub file: String,
    pub line: u32,
    pub column: u32,
    pub end_line: u32,
    pub end_column: u32,
    pub function_name: String,
    pub missing_keys: Vec<String>, // K001 only
    pub fix_hint: Option<String>,
    pub suppressed: bool,
    pub suppress_hint: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedFile {
    pub file: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckInfo {
    /// Declarators that matched a configured target with a literal argument.
    pub sites_checked: u32,
    pub files_with_syntax_errors: u32,
    /// False when no targets are configured or the rule is off.
    pub rule_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainResult {
    pub version: String,
    pub command: String,
    pub rule: String,
    pub rule_type: String,
    pub description: String,
    pub messages: Vec<ExplainMessage>,
    pub options: Vec<ExplainOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainMessage {
    pub code: String,
    pub message_id: String,
    pub template: String,
    pub fix_hint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainOption {
    pub name: String,
    pub kind: String,
    pub description: String,
}

impl CheckResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
