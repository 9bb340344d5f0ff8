use std::collections::HashSet;

use crate::types::Violation;

/// Manages suppressed violation codes.
///
/// When a code is suppressed, violations with that code are:
/// - Changed to severity "INFO" and marked suppressed=true
/// - Code changed to "S001"
/// - Given a suppress_hint naming the original code
///
/// Codes and message ids are both accepted (`K002` or `cannotVerify`).
#[derive(Debug)]
pub struct SuppressionManager {
    suppressed_codes: HashSet<String>,
}

impl Default for SuppressionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SuppressionManager {
    pub fn new() -> Self {
        Self {
            suppressed_codes: HashSet::new(),
        }
    }

    /// Add a code to suppress (e.g., "K001", "cannotVerify").
    pub fn suppress(&mut self, code: &str) {
        self.suppressed_codes.insert(code.trim().to_ascii_uppercase());
    }

    pub fn is_suppressed(&self, violation: &Violation) -> bool {
        self.suppressed_codes.contains(&violation.code.to_ascii_uppercase())
            || self
                .suppressed_codes
                .contains(&violation.message_id.to_ascii_uppercase())
    }

    /// Apply suppression to a violation, returning the modified violation.
    /// If the code is not suppressed, returns the violation unchanged.
    pub fn apply(&self, mut violation: Violation) -> Violation {
        if self.is_suppressed(&violation) {
            violation.suppress_hint = Some(format!(
                "Suppressed {} via --suppress flag",
                violation.code
            ));
            violation.suppressed = true;
            violation.code = "S001".to_string();
            violation.severity = "INFO".to_string();
        }
        violation
    }

    /// Number of active suppressions.
    pub fn count(&self) -> usize {
        self.suppressed_codes.len()
    }
}
