//! Output formatters for keygap command results.
//!
//! Provides three output modes:
//! - **Human** (default): rustc-style diagnostics for terminal users
//! - **JSON** (`--json`): Machine-readable structured output
//! - **LLM** (`--llm`): Compact line-per-violation format for coding agents

pub mod human;
pub(crate) mod human_helpers;
pub mod json;
pub mod llm;
pub mod token_budget;

use keygap_enforce::types::{CheckResult, ExplainResult};

pub trait OutputFormatter {
    fn format_check(&self, result: &CheckResult) -> String;
    fn format_explain(&self, result: &ExplainResult) -> String;
}
