//! Rule metadata and message rendering.

use keygap_core::config::RULE_NAME;
use keygap_core::types::MessageId;

use crate::types::{ExplainMessage, ExplainOption, ExplainResult};

pub struct RuleMeta {
    pub name: &'static str,
    pub rule_type: &'static str,
    pub description: &'static str,
    pub messages: &'static [MessageMeta],
    pub options: &'static [(&'static str, &'static str, &'static str)],
}

pub struct MessageMeta {
    pub id: MessageId,
    pub template: &'static str,
    pub fix_hint: &'static str,
}

pub static NO_MISSING_DESTRUCTURE_KEYS: RuleMeta = RuleMeta {
    name: RULE_NAME,
    rule_type: "problem",
    description: "Require keys passed in object literal call arguments to be destructured from the call result.",
    messages: &[
        MessageMeta {
            id: MessageId::MissingKeys,
            template: "Keys provided to {{functionName}}(...) must be destructured from its result. Missing: {{missingKeys}}.",
            fix_hint: "Destructure {{missingKeys}} from the result of {{functionName}}(...), add them to ignoreKeys, or capture the remainder with a rest element",
        },
        MessageMeta {
            id: MessageId::CannotVerify,
            template: "Cannot verify keys for {{functionName}}(...) because the object argument contains spread elements or computed keys.",
            fix_hint: "List the keys passed to {{functionName}}(...) explicitly, or suppress K002",
        },
    ],
    options: &[
        ("targets", "array of { name, argumentIndex? }", "Calls to check and the 0-based position of their object-literal argument. Empty or absent disables the rule."),
        ("ignoreKeys", "array of string", "Keys that are never reported as missing."),
        ("ignoreKeyPattern", "string (regex)", "Keys matching this pattern are never reported as missing. An invalid pattern is ignored."),
        ("severity", "\"error\" | \"warn\" | \"off\"", "Reporting level; defaults to error."),
    ],
};

pub static ALL_RULES: &[&RuleMeta] = &[&NO_MISSING_DESTRUCTURE_KEYS];

impl RuleMeta {
    pub fn message(&self, id: MessageId) -> Option<&MessageMeta> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn explain(&self, version: &str) -> ExplainResult {
        ExplainResult {
            version: version.to_string(),
            command: "explain".to_string(),
            rule: self.name.to_string(),
            rule_type: self.rule_type.to_string(),
            description: self.description.to_string(),
            messages: self
                .messages
                .iter()
                .map(|m| ExplainMessage {
                    code: m.id.code().to_string(),
                    message_id: m.id.as_str().to_string(),
                    template: m.template.to_string(),
                    fix_hint: m.fix_hint.to_string(),
                })
                .collect(),
            options: self
                .options
                .iter()
                .map(|(name, kind, description)| ExplainOption {
                    name: name.to_string(),
                    kind: kind.to_string(),
                    description: description.to_string(),
                })
                .collect(),
        }
    }
}

/// Look a rule up by rule name, message id, or code (`K001`, `missingKeys`, ...).
pub fn find(query: &str) -> Option<&'static RuleMeta> {
    ALL_RULES.iter().copied().find(|rule| {
        rule.name == query
            || rule
                .messages
                .iter()
                .any(|m| m.id.code().eq_ignore_ascii_case(query) || m.id.as_str() == query)
    })
}

/// Substitute `{{name}}` placeholders from `data`.
pub fn render(template: &str, data: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in data {
        out = out.replace(&format!("{{{{{name}}}}}"), value);
    }
    out
}
