use crate::human_helpers::{format_summary, format_violation_human};
use crate::OutputFormatter;
use keygap_enforce::types::{CheckResult, ExplainResult};

pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_check(&self, result: &CheckResult) -> String {
        if result.errors.is_empty() && result.warnings.is_empty() {
            return String::new(); // Clean check = empty stdout
        }

        let mut out = String::new();

        for v in &result.errors {
            out.push_str(&format_violation_human(v));
        }
        for v in &result.warnings {
            out.push_str(&format_violation_human(v));
        }

        out.push_str(&format_summary(
            result.errors.len(),
            result.warnings.len(),
            result.files_analyzed.len(),
        ));
        if !result.suppressed.is_empty() {
            out.push_str(&format!("{} suppressed\n", result.suppressed.len()));
        }

        out
    }

    fn format_explain(&self, result: &ExplainResult) -> String {
        let mut out = format!(
            "{} ({})\n  {}\n",
            result.rule, result.rule_type, result.description,
        );

        out.push_str("\nMessages:\n");
        for m in &result.messages {
            out.push_str(&format!("  {} {}: {}\n", m.code, m.message_id, m.template));
            out.push_str(&format!("     fix: {}\n", m.fix_hint));
        }

        if !result.options.is_empty() {
            out.push_str("\nOptions:\n");
            for o in &result.options {
                out.push_str(&format!("  {} <{}>\n     {}\n", o.name, o.kind, o.description));
            }
        }

        out
    }
}
