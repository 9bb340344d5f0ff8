use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "keygap",
    version,
    about = "Flag keys passed to factory calls that are never destructured from the result"
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Output as token-optimized LLM format
    #[arg(long, global = true, conflicts_with = "json")]
    pub llm: bool,

    /// Verbose diagnostics on stderr (overridden by KEYGAP_LOG)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Max token budget for LLM output (default: 500)
    #[arg(long, global = true)]
    pub max_tokens: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Create .keygap/keygap.json and .keygapignore in the current directory
    Init,

    /// Check files for undestructured keys
    Check {
        /// Files to check (empty = walk the project root)
        files: Vec<String>,
        /// Exit non-zero on warnings too
        #[arg(long)]
        strict: bool,
        /// Suppress a code or message id (repeatable, e.g. K002 or cannotVerify)
        #[arg(long)]
        suppress: Vec<String>,
        /// Use this config file instead of searching for .keygap/
        #[arg(long, env = "KEYGAP_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Get or set configuration values
    Config {
        /// Config key in dot notation (e.g., rules.no-missing-destructure-keys.severity)
        key: Option<String>,
        /// Value to set (omit to get current value)
        value: Option<String>,
    },

    /// Show documentation for a rule, code, or message id
    Explain {
        /// K001, K002, missingKeys, cannotVerify, or the rule name
        code: String,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, elvish, powershell)
        shell: String,
    },
}

#[cfg(test)]
#[path = "cli_args_tests.rs"]
mod tests;
