use crate::OutputFormatter;
use keygap_enforce::types::{CheckResult, ExplainResult};

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_check(&self, result: &CheckResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }

    fn format_explain(&self, result: &ExplainResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }
}
