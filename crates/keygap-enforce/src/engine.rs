use std::path::PathBuf;

use rayon::prelude::*;

use keygap_core::config::{KeygapConfig, RULE_NAME};
use keygap_core::syntax::VariableDeclarator;
use keygap_core::targets::{resolve, ResolvedRule};
use keygap_core::types::{Severity, Verdict};
use keygap_parsers::treesitter::{ParseError, TreeSitterParser};

use crate::checker::{check_declarator, SiteVerdict};
use crate::rules::{render, NO_MISSING_DESTRUCTURE_KEYS};
use crate::suppress::SuppressionManager;
use crate::types::{CheckInfo, CheckResult, SkippedFile, Violation};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A file queued for checking.
#[derive(Debug, Clone)]
pub struct SourceInput {
    pub path: PathBuf,
    /// Path as shown in output, usually relative to the project root.
    pub display: String,
    pub language: String,
}

/// Violations found in one file.
#[derive(Debug, Clone, Default)]
pub struct FileReport {
    pub file: String,
    pub violations: Vec<Violation>,
    pub sites_checked: u32,
    pub has_syntax_errors: bool,
}

enum Outcome {
    Checked(FileReport),
    Skipped(SkippedFile),
}

/// Core enforcement engine. Owns the resolved rule and orchestrates validation.
pub struct Engine {
    rule: Option<ResolvedRule>,
    severity: Severity,
    suppressions: SuppressionManager,
}

impl Engine {
    pub fn new(rule: Option<ResolvedRule>, severity: Severity) -> Self {
        Self {
            rule,
            severity,
            suppressions: SuppressionManager::new(),
        }
    }

    /// Create an engine configured from a `KeygapConfig`.
    pub fn from_config(config: &KeygapConfig) -> Self {
        let options = config.destructure_rule();
        Self::new(resolve(options), options.severity)
    }

    pub fn suppress(&mut self, code: &str) {
        self.suppressions.suppress(code);
    }

    /// False when no targets are configured or the rule is turned off; an
    /// inactive engine never parses or reports anything.
    pub fn is_active(&self) -> bool {
        self.rule.is_some() && self.severity != Severity::Off
    }

    /// Check already-lowered declarators from one file.
    pub fn check_declarators(&self, file: &str, declarators: &[VariableDeclarator]) -> FileReport {
        let mut report = FileReport {
            file: file.to_string(),
            ..Default::default()
        };
        let Some(rule) = self.rule.as_ref().filter(|_| self.is_active()) else {
            return report;
        };
        for decl in declarators {
            let Some(site) = check_declarator(decl, rule) else {
                continue;
            };
            report.sites_checked += 1;
            if let Some(v) = self.violation(file, &site) {
                report.violations.push(self.suppressions.apply(v));
            }
        }
        report
    }

    /// Parse `source` and check every declarator in it.
    pub fn check_source(
        &self,
        parser: &mut TreeSitterParser,
        language: &str,
        file: &str,
        source: &str,
    ) -> Result<FileReport, ParseError> {
        if !self.is_active() {
            return Ok(FileReport {
                file: file.to_string(),
                ..Default::default()
            });
        }
        let parsed = parser.parse_file(language, std::path::Path::new(file), source)?;
        let mut report = self.check_declarators(file, &parsed.declarators);
        report.has_syntax_errors = parsed.has_syntax_errors;
        Ok(report)
    }

    /// Read, parse and check files in parallel. Output is ordered by path.
    pub fn check_inputs(&self, inputs: &[SourceInput]) -> CheckResult {
        if !self.is_active() {
            tracing::debug!("no targets configured or rule is off; nothing to check");
            return self.assemble(vec![]);
        }

        let outcomes: Vec<Outcome> = inputs
            .par_iter()
            .map_init(TreeSitterParser::new, |parser, input| {
                self.check_input(parser, input)
            })
            .collect();
        self.assemble(outcomes)
    }

    fn check_input(&self, parser: &mut TreeSitterParser, input: &SourceInput) -> Outcome {
        let source = match std::fs::read_to_string(&input.path) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(file = %input.display, error = %e, "skipping unreadable file");
                return Outcome::Skipped(SkippedFile {
                    file: input.display.clone(),
                    reason: e.to_string(),
                });
            }
        };
        match self.check_source(parser, &input.language, &input.display, &source) {
            Ok(report) => Outcome::Checked(report),
            Err(e) => {
                tracing::warn!(file = %input.display, error = %e, "skipping unparsable file");
                Outcome::Skipped(SkippedFile {
                    file: input.display.clone(),
                    reason: e.to_string(),
                })
            }
        }
    }

    fn assemble(&self, outcomes: Vec<Outcome>) -> CheckResult {
        let mut reports = Vec::new();
        let mut skipped = Vec::new();
        for outcome in outcomes {
            match outcome {
                Outcome::Checked(r) => reports.push(r),
                Outcome::Skipped(s) => skipped.push(s),
            }
        }
        reports.sort_by(|a, b| a.file.cmp(&b.file));
        skipped.sort_by(|a, b| a.file.cmp(&b.file));
        self.finish(reports, skipped)
    }

    /// Fold per-file reports into a `CheckResult`.
    pub fn finish(&self, reports: Vec<FileReport>, skipped: Vec<SkippedFile>) -> CheckResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut suppressed = Vec::new();
        let mut info = CheckInfo {
            rule_active: self.is_active(),
            ..Default::default()
        };
        let mut files_analyzed = Vec::with_capacity(reports.len());

        for report in reports {
            info.sites_checked += report.sites_checked;
            if report.has_syntax_errors {
                info.files_with_syntax_errors += 1;
            }
            files_analyzed.push(report.file);
            for v in report.violations {
                match v.severity.as_str() {
                    "ERROR" => errors.push(v),
                    "WARNING" => warnings.push(v),
                    _ => suppressed.push(v),
                }
            }
        }

        let status = if !errors.is_empty() {
            "error"
        } else if !warnings.is_empty() {
            "warning"
        } else {
            "ok"
        };

        CheckResult {
            version: VERSION.to_string(),
            command: "check".to_string(),
            status: status.to_string(),
            files_analyzed,
            errors,
            warnings,
            suppressed,
            skipped,
            info,
        }
    }

    fn violation(&self, file: &str, site: &SiteVerdict) -> Option<Violation> {
        let message_id = site.verdict.message_id()?;
        let meta = NO_MISSING_DESTRUCTURE_KEYS.message(message_id)?;
        let missing_keys = match &site.verdict {
            Verdict::MissingKeys(keys) => keys.clone(),
            _ => vec![],
        };
        let joined = missing_keys.join(", ");
        let data = [
            ("functionName", site.function_name.as_str()),
            ("missingKeys", joined.as_str()),
        ];

        Some(Violation {
            code: message_id.code().to_string(),
            message_id: message_id.as_str().to_string(),
            severity: self.severity.as_str().to_string(),
            rule: RULE_NAME.to_string(),
            message: render(meta.template, &data),
            file: file.to_string(),
            line: site.span.line,
            column: site.span.column,
            end_line: site.span.end_line,
            end_column: site.span.end_column,
            function_name: site.function_name.clone(),
            missing_keys,
            fix_hint: Some(render(meta.fix_hint, &data)),
            suppressed: false,
            suppress_hint: None,
        })
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
