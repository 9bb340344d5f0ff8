use keygap_enforce::types::Violation;

pub(crate) fn severity_label(severity: &str) -> &'static str {
    match severity {
        "ERROR" => "error",
        "WARNING" => "warning",
        "INFO" => "info",
        _ => "note",
    }
}

pub(crate) fn format_violation_human(v: &Violation) -> String {
    let mut out = format!(
        "{}[{}]: {}\n  --> {}:{}:{}\n",
        severity_label(&v.severity),
        v.code,
        v.message,
        v.file,
        v.line,
        v.column,
    );

    if let Some(fix) = &v.fix_hint {
        out.push_str(&format!("   = fix: {}\n", fix));
    }

    if v.suppressed {
        if let Some(hint) = &v.suppress_hint {
            out.push_str(&format!("   = {}\n", hint));
        }
    }

    out
}

pub(crate) fn format_summary(errors: usize, warnings: usize, files: usize) -> String {
    format!(
        "\n{} error(s), {} warning(s) in {} file(s)\n",
        errors, warnings, files,
    )
}
