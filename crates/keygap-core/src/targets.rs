//! Resolution of rule options into the lookup used while checking.

use std::collections::HashMap;

use crate::config::{DestructureRuleConfig, TargetOption};
use crate::policy::IgnorePolicy;
use crate::types::TargetSpec;

/// Call name → argument index. Later entries overwrite earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetMap {
    entries: HashMap<String, usize>,
}

impl TargetMap {
    pub fn from_specs<'a, I>(specs: I) -> Self
    where
        I: IntoIterator<Item = &'a TargetSpec>,
    {
        let mut entries = HashMap::new();
        for spec in specs {
            entries.insert(spec.name.clone(), spec.argument_index);
        }
        Self { entries }
    }

    /// Argument index configured for `name`, if it is a target.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.entries.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Immutable per-run state of the destructure rule.
#[derive(Debug, Clone)]
pub struct ResolvedRule {
    pub targets: TargetMap,
    pub ignore: IgnorePolicy,
}

impl ResolvedRule {
    pub fn new(targets: TargetMap, ignore: IgnorePolicy) -> Self {
        Self { targets, ignore }
    }
}

/// Fill in the default argument index for each configured target.
pub fn normalize_targets(options: &[TargetOption]) -> Vec<TargetSpec> {
    options
        .iter()
        .map(|t| TargetSpec {
            name: t.name.clone(),
            argument_index: t.argument_index.unwrap_or(0) as usize,
        })
        .collect()
}

/// Build the resolved rule, or `None` when no targets are configured and the
/// rule has nothing to check.
pub fn resolve(options: &DestructureRuleConfig) -> Option<ResolvedRule> {
    let specs = normalize_targets(options.targets.as_deref().unwrap_or_default());
    if specs.is_empty() {
        return None;
    }
    let targets = TargetMap::from_specs(&specs);
    let ignore = IgnorePolicy::new(
        options.ignore_keys.iter().flatten().cloned(),
        options.ignore_key_pattern.as_deref(),
    );
    Some(ResolvedRule::new(targets, ignore))
}
