use std::path::Path;

use streaming_iterator::StreamingIterator;
use tree_sitter::{Language, Parser, QueryCursor, Tree};

use crate::queries;
use keygap_core::syntax::VariableDeclarator;

mod lower;

pub use lower::lower_declarator;

/// Declarators found in one source file.
#[derive(Debug, Clone, Default)]
pub struct ParsedFile {
    pub declarators: Vec<VariableDeclarator>,
    /// tree-sitter recovered from at least one syntax error.
    pub has_syntax_errors: bool,
}

pub struct TreeSitterParser {
    parser: Parser,
}

impl TreeSitterParser {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
        }
    }

    pub fn parse(&mut self, lang_name: &str, source: &[u8]) -> Result<Tree, ParseError> {
        let lang = language_for_name(lang_name)?;
        self.parser
            .set_language(&lang)
            .map_err(|e| ParseError::Language(format!("{e}")))?;
        self.parser
            .parse(source, None)
            .ok_or(ParseError::ParseFailed)
    }

    /// Parse `source` and lower every variable declarator into the syntax model,
    /// in source order.
    pub fn parse_file(
        &mut self,
        lang_name: &str,
        path: &Path,
        source: &str,
    ) -> Result<ParsedFile, ParseError> {
        let lang = language_for_name(lang_name)?;
        let query = queries::query_for_language(&lang, lang_name).map_err(ParseError::Query)?;
        let tree = self.parse(lang_name, source.as_bytes())?;

        let bytes = source.as_bytes();
        let root = tree.root_node();
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&query, root, bytes);
        let mut declarators = Vec::new();

        while let Some(m) = matches.next() {
            for cap in m.captures {
                declarators.push(lower_declarator(cap.node, bytes));
            }
        }

        if root.has_error() {
            tracing::debug!(file = %path.display(), "recovered from syntax errors");
        }

        Ok(ParsedFile {
            declarators,
            has_syntax_errors: root.has_error(),
        })
    }
}

impl Default for TreeSitterParser {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("language error: {0}")]
    Language(String),
    #[error("query error: {0}")]
    Query(String),
    #[error("parse failed")]
    ParseFailed,
}

fn language_for_name(name: &str) -> Result<Language, ParseError> {
    match name {
        "typescript" => Ok(tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()),
        // Plain JavaScript frequently carries JSX; the TSX grammar accepts both.
        "tsx" | "javascript" => Ok(tree_sitter_typescript::LANGUAGE_TSX.into()),
        other => Err(ParseError::UnsupportedLanguage(other.to_string())),
    }
}

pub fn detect_language(path: &Path) -> Option<&'static str> {
    match path.extension()?.to_str()? {
        "ts" | "mts" | "cts" => Some("typescript"),
        "tsx" | "jsx" => Some("tsx"),
        "js" | "mjs" | "cjs" => Some("javascript"),
        _ => None,
    }
}
