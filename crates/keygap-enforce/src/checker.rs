use keygap_core::syntax::{
    BindingTarget, Callee, Expression, ObjectLiteral, ObjectPattern, Span, VariableDeclarator,
};
use keygap_core::targets::ResolvedRule;
use keygap_core::types::Verdict;

use crate::extract::{destructured_keys, provided_keys};

/// Verdict for one candidate site, with what the reporter needs to anchor it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteVerdict {
    pub function_name: String,
    pub verdict: Verdict,
    pub span: Span,
}

/// Check one declarator against the resolved rule.
///
/// Returns `None` when the declarator is not a candidate: the target is not an
/// object pattern, the initializer is not a direct call to a configured
/// identifier, or the configured argument is missing or not an object literal.
pub fn check_declarator(decl: &VariableDeclarator, rule: &ResolvedRule) -> Option<SiteVerdict> {
    let BindingTarget::Object(pattern) = &decl.id else {
        return None;
    };
    let Some(Expression::Call(call)) = &decl.init else {
        return None;
    };
    let Callee::Identifier(function_name) = &call.callee else {
        return None;
    };
    let argument_index = rule.targets.get(function_name)?;
    let Some(Expression::Object(argument)) = call.arguments.get(argument_index) else {
        return None;
    };

    let verdict = site_verdict(pattern, argument, rule);
    tracing::debug!(
        function = %function_name,
        line = decl.span.line,
        verdict = ?verdict,
        "checked destructure site"
    );
    Some(SiteVerdict {
        function_name: function_name.clone(),
        verdict,
        span: decl.span,
    })
}

fn site_verdict(pattern: &ObjectPattern, argument: &ObjectLiteral, rule: &ResolvedRule) -> Verdict {
    let destructured = destructured_keys(pattern);
    if destructured.has_rest {
        return Verdict::Ok;
    }

    let provided = provided_keys(argument);
    if provided.cannot_verify {
        return Verdict::CannotVerify;
    }

    let missing: Vec<String> = provided
        .keys
        .into_iter()
        .filter(|key| !rule.ignore.is_ignored(key) && !destructured.keys.contains(key))
        .collect();

    if missing.is_empty() {
        Verdict::Ok
    } else {
        Verdict::MissingKeys(missing)
    }
}

#[cfg(test)]
#[path = "checker_tests.rs"]
mod tests;
