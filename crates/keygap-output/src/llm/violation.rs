use keygap_enforce::types::Violation;

/// Format a single violation in LLM-compact format.
pub fn format_violation_llm(v: &Violation) -> String {
    let mut out = format!(
        "{} {}:{}:{} fn={}",
        v.code, v.file, v.line, v.column, v.function_name,
    );

    if !v.missing_keys.is_empty() {
        out.push_str(&format!(" missing={}", v.missing_keys.join(",")));
    } else if v.message_id == "cannotVerify" {
        out.push_str(" cannot_verify");
    }

    out.push('\n');

    if let Some(fix) = &v.fix_hint {
        out.push_str(&format!("  FIX: {}\n", fix));
    }

    out
}

/// Violation priority for sorting (lower = higher priority).
pub fn violation_priority(code: &str) -> u32 {
    match code {
        "K001" => 0, // missingKeys: a concrete unused key
        "K002" => 1, // cannotVerify
        _ => 2,
    }
}

/// Sort violations by priority, keeping file order within a code.
pub fn sort_by_priority(violations: &mut [&Violation]) {
    violations.sort_by_key(|v| violation_priority(&v.code));
}
