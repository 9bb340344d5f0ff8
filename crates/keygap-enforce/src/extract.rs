use std::collections::HashSet;

use keygap_core::syntax::{ObjectLiteral, ObjectMember, ObjectPattern, PatternProperty, PropertyKey};
use keygap_core::types::{ArgumentResult, DestructureResult};

/// Collect the keys bound by an object pattern.
///
/// Computed and literal keys are skipped; any rest element sets `has_rest`.
pub fn destructured_keys(pattern: &ObjectPattern) -> DestructureResult {
    let mut result = DestructureResult::default();
    for property in &pattern.properties {
        match property {
            PatternProperty::Rest => result.has_rest = true,
            PatternProperty::Property { key } => {
                if let Some(name) = key.as_identifier() {
                    result.keys.insert(name.to_string());
                }
            }
        }
    }
    result
}

/// Collect the statically known keys of an object literal, in order of first
/// occurrence. A spread element or computed key anywhere makes the whole
/// literal unverifiable and discards what was collected.
pub fn provided_keys(literal: &ObjectLiteral) -> ArgumentResult {
    let mut seen = HashSet::new();
    let mut keys = Vec::new();
    for member in &literal.members {
        match member {
            ObjectMember::Spread => return ArgumentResult::unverifiable(),
            ObjectMember::Property { key: PropertyKey::Computed } => {
                return ArgumentResult::unverifiable()
            }
            ObjectMember::Property { key: PropertyKey::Identifier(name) } => {
                if seen.insert(name.as_str()) {
                    keys.push(name.clone());
                }
            }
            ObjectMember::Property { key: PropertyKey::Literal(_) } => {}
        }
    }
    ArgumentResult {
        keys,
        cannot_verify: false,
    }
}
