pub mod check;
pub mod explain;
pub mod violation;

use crate::token_budget::DEFAULT_MAX_TOKENS;
use crate::OutputFormatter;
use keygap_enforce::types::{CheckResult, ExplainResult};

pub struct LlmFormatter {
    /// Max token budget for output truncation. Default: 500.
    pub max_tokens: usize,
}

impl LlmFormatter {
    pub fn new() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<usize>) -> Self {
        if let Some(t) = max_tokens {
            self.max_tokens = t;
        }
        self
    }
}

impl Default for LlmFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for LlmFormatter {
    fn format_check(&self, result: &CheckResult) -> String {
        check::format_check(result, self.max_tokens)
    }

    fn format_explain(&self, result: &ExplainResult) -> String {
        explain::format_explain(result)
    }
}
