use super::violation::{format_violation_llm, sort_by_priority};
use crate::token_budget;
use keygap_enforce::types::CheckResult;

pub fn format_check(result: &CheckResult, max_tokens: usize) -> String {
    if result.errors.is_empty() && result.warnings.is_empty() {
        return String::new();
    }

    let mut out = format!(
        "CHECK files={} sites={} errors={} warnings={} suppressed={}\n",
        result.files_analyzed.len(),
        result.info.sites_checked,
        result.errors.len(),
        result.warnings.len(),
        result.suppressed.len(),
    );

    let mut violations: Vec<_> = result.errors.iter().chain(result.warnings.iter()).collect();
    sort_by_priority(&mut violations);
    let lines: Vec<String> = violations.iter().map(|v| format_violation_llm(v)).collect();

    let (kept, overflow) = token_budget::truncate_to_budget(&lines, max_tokens);
    for line in &kept {
        out.push_str(line);
    }
    if overflow > 0 {
        out.push_str(&format!(
            "... +{} more violation(s) (use --json for the full list)\n",
            overflow
        ));
    }

    out
}
