/// Token budget estimation and truncation for LLM output.
///
/// Estimates output size in tokens (approximation: 1 token ≈ 4 chars)
/// and truncates when exceeding budget.

const CHARS_PER_TOKEN: usize = 4;

pub const DEFAULT_MAX_TOKENS: usize = 500;

/// Estimate token count from a string.
pub fn estimate_tokens(text: &str) -> usize {
    text.len().div_ceil(CHARS_PER_TOKEN)
}

/// Keep leading lines while they fit in `max_tokens`.
/// Returns (kept_lines, overflow_count). The first line is always kept.
pub fn truncate_to_budget(lines: &[String], max_tokens: usize) -> (Vec<String>, usize) {
    let max_chars = max_tokens.saturating_mul(CHARS_PER_TOKEN);
    let mut total_chars = 0;

    for (i, line) in lines.iter().enumerate() {
        let line_chars = line.len() + 1;
        if total_chars + line_chars > max_chars && i > 0 {
            return (lines[..i].to_vec(), lines.len() - i);
        }
        total_chars += line_chars;
    }

    (lines.to_vec(), 0)
}
