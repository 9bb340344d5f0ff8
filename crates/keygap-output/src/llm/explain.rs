use keygap_enforce::types::ExplainResult;

pub fn format_explain(result: &ExplainResult) -> String {
    let mut out = format!("EXPLAIN {} type={}\n", result.rule, result.rule_type);

    for m in &result.messages {
        out.push_str(&format!("  {} {} {}\n", m.code, m.message_id, m.template));
    }
    for o in &result.options {
        out.push_str(&format!("  OPTION {}: {}\n", o.name, o.kind));
    }

    out
}
