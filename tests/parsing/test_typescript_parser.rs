// Tree-sitter lowering across the supported dialects.

use std::path::Path;

use keygap_core::syntax::{BindingTarget, Callee, Expression, ObjectMember, PatternProperty};
use keygap_parsers::treesitter::{detect_language, TreeSitterParser};

fn declarators(lang: &str, source: &str) -> keygap_parsers::treesitter::ParsedFile {
    let mut parser = TreeSitterParser::new();
    parser
        .parse_file(lang, Path::new("test"), source)
        .expect("parse should succeed")
}

#[test]
/// The same declarator lowers identically in every dialect.
fn test_dialects_agree() {
    let source = "const { a, b: renamed } = useUnit({ a, b, ...rest });";
    for lang in ["typescript", "tsx", "javascript"] {
        let parsed = declarators(lang, source);
        assert_eq!(parsed.declarators.len(), 1, "{lang}");
        let decl = &parsed.declarators[0];

        let BindingTarget::Object(pattern) = &decl.id else {
            panic!("{lang}: expected object pattern");
        };
        assert_eq!(pattern.properties.len(), 2);
        assert!(matches!(&pattern.properties[1], PatternProperty::Property { key } if key.as_identifier() == Some("b")));

        let Some(Expression::Call(call)) = &decl.init else {
            panic!("{lang}: expected call");
        };
        assert_eq!(call.callee, Callee::Identifier("useUnit".into()));
        let Expression::Object(arg) = &call.arguments[0] else {
            panic!("{lang}: expected object argument");
        };
        assert!(matches!(arg.members[2], ObjectMember::Spread));
    }
}

#[test]
/// TypeScript-only syntax (annotations, generics, satisfies) does not break lowering.
fn test_typescript_syntax() {
    let source = r#"
const { a }: { a: number } = useUnit<Units>({ a, b } as Units);
let { c } = useUnit({ c, d } satisfies Units);
"#;
    let parsed = declarators("typescript", source);
    assert!(!parsed.has_syntax_errors);
    assert_eq!(parsed.declarators.len(), 2);
    let Some(Expression::Call(call)) = &parsed.declarators[0].init else {
        panic!("expected call");
    };
    assert_eq!(call.callee, Callee::Identifier("useUnit".into()));
}

#[test]
/// Every declarator in a multi-declarator statement is found.
fn test_multiple_declarators_per_statement() {
    let parsed = declarators("typescript", "const x = 1, { a } = useUnit({ a }), y = 2;");
    assert_eq!(parsed.declarators.len(), 3);
    assert!(matches!(parsed.declarators[1].id, BindingTarget::Object(_)));
}

#[test]
/// Language detection covers the module-suffixed extensions.
fn test_detect_language_extensions() {
    assert_eq!(detect_language(Path::new("a.mts")), Some("typescript"));
    assert_eq!(detect_language(Path::new("a.cts")), Some("typescript"));
    assert_eq!(detect_language(Path::new("a.jsx")), Some("tsx"));
    assert_eq!(detect_language(Path::new("a.cjs")), Some("javascript"));
    assert_eq!(detect_language(Path::new("a.vue")), None);
}
