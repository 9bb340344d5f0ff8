//! Lowering of tree-sitter nodes into the keygap syntax model.
//!
//! Parentheses around initializers and callees are dropped, as an ESTree parser
//! would. Anything the model has no variant for lowers to `Other`.

use tree_sitter::Node;

use keygap_core::syntax::{
    BindingTarget, CallExpression, Callee, Expression, ObjectLiteral, ObjectMember,
    ObjectPattern, PatternProperty, PropertyKey, Span, VariableDeclarator,
};

fn node_text<'a>(node: Node<'a>, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or("")
}

fn span_of(node: Node<'_>, source: &[u8]) -> Span {
    let start = node.start_position();
    let end = node.end_position();
    Span {
        line: start.row as u32 + 1,
        column: column_at(source, node.start_byte()),
        end_line: end.row as u32 + 1,
        end_column: column_at(source, node.end_byte()),
    }
}

/// 1-based column of `byte` in UTF-16 code units. tree-sitter's `Point`
/// counts bytes, which drifts on any multibyte text earlier in the line.
fn column_at(source: &[u8], byte: usize) -> u32 {
    let byte = byte.min(source.len());
    let line_start = source[..byte]
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |i| i + 1);
    let prefix = String::from_utf8_lossy(&source[line_start..byte]);
    prefix.encode_utf16().count() as u32 + 1
}

fn unwrap_parens(mut node: Node<'_>) -> Node<'_> {
    while node.kind() == "parenthesized_expression" {
        let mut cursor = node.walk();
        let inner = node
            .named_children(&mut cursor)
            .find(|c| c.kind() != "comment");
        match inner {
            Some(inner) => node = inner,
            None => break,
        }
    }
    node
}

/// Lower a `variable_declarator` node.
pub fn lower_declarator(node: Node<'_>, source: &[u8]) -> VariableDeclarator {
    let name = node.child_by_field_name("name");
    let id = name
        .map(|n| lower_binding_target(n, source))
        .unwrap_or(BindingTarget::Other);
    let init = node
        .child_by_field_name("value")
        .map(|v| lower_expression(v, source));
    VariableDeclarator {
        id,
        init,
        span: span_of(name.unwrap_or(node), source),
    }
}

fn lower_binding_target(node: Node<'_>, source: &[u8]) -> BindingTarget {
    match node.kind() {
        "object_pattern" => BindingTarget::Object(lower_object_pattern(node, source)),
        "array_pattern" => BindingTarget::Array,
        "identifier" => BindingTarget::Identifier(node_text(node, source).to_string()),
        _ => BindingTarget::Other,
    }
}

fn lower_object_pattern(node: Node<'_>, source: &[u8]) -> ObjectPattern {
    let mut properties = Vec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "rest_pattern" => properties.push(PatternProperty::Rest),
            "shorthand_property_identifier_pattern" => properties.push(PatternProperty::Property {
                key: PropertyKey::identifier(node_text(child, source)),
            }),
            "pair_pattern" => {
                if let Some(key) = child.child_by_field_name("key") {
                    properties.push(PatternProperty::Property {
                        key: lower_property_key(key, source),
                    });
                }
            }
            // `{ key = fallback }`
            "object_assignment_pattern" => {
                if let Some(left) = child.child_by_field_name("left") {
                    if left.kind() == "shorthand_property_identifier_pattern" {
                        properties.push(PatternProperty::Property {
                            key: PropertyKey::identifier(node_text(left, source)),
                        });
                    }
                }
            }
            _ => {}
        }
    }
    ObjectPattern { properties }
}

fn lower_property_key(node: Node<'_>, source: &[u8]) -> PropertyKey {
    match node.kind() {
        "property_identifier" | "identifier" => {
            PropertyKey::identifier(node_text(node, source))
        }
        "computed_property_name" => PropertyKey::Computed,
        "string" => {
            let raw = node_text(node, source);
            PropertyKey::Literal(raw.trim_matches(|c| c == '"' || c == '\'').to_string())
        }
        _ => PropertyKey::Literal(node_text(node, source).to_string()),
    }
}

fn lower_expression(node: Node<'_>, source: &[u8]) -> Expression {
    let node = unwrap_parens(node);
    match node.kind() {
        "object" => Expression::Object(lower_object_literal(node, source)),
        "call_expression" => lower_call(node, source),
        _ => Expression::Other,
    }
}

fn lower_call(node: Node<'_>, source: &[u8]) -> Expression {
    let mut cursor = node.walk();
    // `f?.()` is a chain expression, not a direct call.
    if node.children(&mut cursor).any(|c| c.kind() == "optional_chain") {
        return Expression::Other;
    }
    let Some(args) = node.child_by_field_name("arguments") else {
        return Expression::Other;
    };
    // Tagged templates carry a template string in the arguments slot.
    if args.kind() != "arguments" {
        return Expression::Other;
    }

    let callee = match node.child_by_field_name("function").map(unwrap_parens) {
        Some(f) if f.kind() == "identifier" => Callee::Identifier(node_text(f, source).to_string()),
        _ => Callee::Other,
    };

    let mut cursor = args.walk();
    let arguments = args
        .named_children(&mut cursor)
        .filter(|c| c.kind() != "comment")
        .map(|c| match c.kind() {
            "spread_element" => Expression::Other,
            _ => lower_expression(c, source),
        })
        .collect();

    Expression::Call(CallExpression { callee, arguments })
}

fn lower_object_literal(node: Node<'_>, source: &[u8]) -> ObjectLiteral {
    let mut members = Vec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "spread_element" => members.push(ObjectMember::Spread),
            "shorthand_property_identifier" => members.push(ObjectMember::Property {
                key: PropertyKey::identifier(node_text(child, source)),
            }),
            "pair" => {
                if let Some(key) = child.child_by_field_name("key") {
                    members.push(ObjectMember::Property {
                        key: lower_property_key(key, source),
                    });
                }
            }
            // Methods, getters and setters.
            "method_definition" => {
                if let Some(name) = child.child_by_field_name("name") {
                    members.push(ObjectMember::Property {
                        key: lower_property_key(name, source),
                    });
                }
            }
            _ => {}
        }
    }
    ObjectLiteral { members }
}
