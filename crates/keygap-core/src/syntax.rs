//! Engine-agnostic syntax model for declarator checks.
//!
//! Parser adapters lower their concrete trees into these types. The checker only
//! ever sees this model, so it can be exercised without a parser.

use serde::{Deserialize, Serialize};

/// 1-based source position range of a node. Columns count UTF-16 code units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub line: u32,
    pub column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

/// `<id> = <init>` inside a `const`/`let`/`var` declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclarator {
    pub id: BindingTarget,
    pub init: Option<Expression>,
    /// Location of the binding target, where diagnostics are anchored.
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BindingTarget {
    Object(ObjectPattern),
    Array,
    Identifier(String),
    Other,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectPattern {
    pub properties: Vec<PatternProperty>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PatternProperty {
    /// `...rest`
    Rest,
    /// `key`, `key: binding`, `key = default`
    Property { key: PropertyKey },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Object(ObjectLiteral),
    Call(CallExpression),
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub callee: Callee,
    /// Positional arguments. A spread argument occupies its slot as `Expression::Other`.
    pub arguments: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Callee {
    Identifier(String),
    Other,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectLiteral {
    pub members: Vec<ObjectMember>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ObjectMember {
    /// `...other`
    Spread,
    /// Pairs, shorthand properties, methods, getters and setters.
    Property { key: PropertyKey },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyKey {
    /// A bare name such as `runTask`.
    Identifier(String),
    /// A string or numeric literal key such as `"run-task"` or `0`.
    Literal(String),
    /// `[expr]`
    Computed,
}

impl PropertyKey {
    pub fn identifier(name: impl Into<String>) -> Self {
        PropertyKey::Identifier(name.into())
    }

    /// The bound name when the key is a plain, non-computed identifier.
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            PropertyKey::Identifier(name) => Some(name),
            _ => None,
        }
    }
}

impl ObjectPattern {
    pub fn from_names(names: &[&str]) -> Self {
        Self {
            properties: names
                .iter()
                .map(|n| PatternProperty::Property {
                    key: PropertyKey::identifier(*n),
                })
                .collect(),
        }
    }
}

impl ObjectLiteral {
    pub fn from_names(names: &[&str]) -> Self {
        Self {
            members: names
                .iter()
                .map(|n| ObjectMember::Property {
                    key: PropertyKey::identifier(*n),
                })
                .collect(),
        }
    }
}

impl VariableDeclarator {
    /// Shorthand for `const { <pattern> } = <callee>(<arguments>)`.
    pub fn call(pattern: ObjectPattern, callee: &str, arguments: Vec<Expression>) -> Self {
        Self {
            id: BindingTarget::Object(pattern),
            init: Some(Expression::Call(CallExpression {
                callee: Callee::Identifier(callee.to_string()),
                arguments,
            })),
            span: Span::default(),
        }
    }
}
