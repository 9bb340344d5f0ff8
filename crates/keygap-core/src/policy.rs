use std::collections::HashSet;

use regex::Regex;

/// Decides which provided keys are exempt from missing-key reporting.
///
/// Literal keys and the optional pattern are combined as a union. A pattern
/// that fails to compile leaves the policy without a pattern; literal keys
/// keep working.
#[derive(Debug, Clone, Default)]
pub struct IgnorePolicy {
    literal: HashSet<String>,
    pattern: Option<Regex>,
}

impl IgnorePolicy {
    pub fn new<I, S>(keys: I, pattern: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            literal: keys.into_iter().map(Into::into).collect(),
            pattern: pattern.and_then(compile_pattern),
        }
    }

    /// Whether `key` should never be reported as missing.
    pub fn is_ignored(&self, key: &str) -> bool {
        if self.literal.contains(key) {
            return true;
        }
        self.pattern.as_ref().is_some_and(|re| re.is_match(key))
    }

    /// Whether a pattern compiled successfully and is active.
    pub fn has_pattern(&self) -> bool {
        self.pattern.is_some()
    }

    pub fn literal_count(&self) -> usize {
        self.literal.len()
    }
}

fn compile_pattern(source: &str) -> Option<Regex> {
    if source.is_empty() {
        return None;
    }
    match Regex::new(source) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!(pattern = source, error = %e, "ignoreKeyPattern does not compile; pattern ignoring disabled");
            None
        }
    }
}
