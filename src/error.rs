//! Unified error handling for the hlslex crate.
//!
//! Table construction is the only fallible operation; classification and
//! tokenization are total. Unterminated constructs found while tokenizing are
//! warnings carried alongside the token stream, not errors.

use codespan_reporting::diagnostic::{Diagnostic, Label};
use thiserror::Error;

use crate::lexicon::Category;

/// Top-level error type for the crate.
#[derive(Error, Debug, Clone)]
pub enum HlslexError {
    /// Lexicon table construction failed
    #[error("lexicon error")]
    Lexicon(#[from] LexiconError),

    /// File I/O error
    #[error("file error: {0}")]
    Io(String),
}

/// Errors raised while building a [`CompiledLexicon`](crate::CompiledLexicon).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexiconError {
    /// A built-in or user-supplied pattern does not compile as a regular
    /// expression. Surfaced immediately so a malformed rule is never
    /// silently dropped.
    #[error("invalid pattern '{pattern}' in {category} table: {message}")]
    InvalidPattern {
        category: Category,
        pattern: String,
        message: String,
    },

    /// Extension words were supplied for a category that carries no table.
    #[error("category {category} does not accept extension words")]
    EmptyCategory { category: Category },
}

impl From<std::io::Error> for HlslexError {
    fn from(e: std::io::Error) -> Self {
        HlslexError::Io(e.to_string())
    }
}

/// The kind of construct left open at end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnterminatedKind {
    BlockComment,
    StringLiteral,
}

/// Non-fatal tokenizer diagnostic: a block comment or string literal reached
/// end of input without its closing delimiter. The token is still emitted
/// spanning to end of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unterminated {
    pub kind: UnterminatedKind,
    /// Byte range from the opening delimiter to end of input.
    pub span: std::ops::Range<usize>,
}

impl Unterminated {
    /// Convert to a codespan-reporting diagnostic for rendering.
    pub fn to_diagnostic(&self, file_id: usize) -> Diagnostic<usize> {
        let (message, label) = match self.kind {
            UnterminatedKind::BlockComment => (
                "unterminated block comment",
                "comment is opened here but never closed",
            ),
            UnterminatedKind::StringLiteral => (
                "unterminated string literal",
                "string is opened here but never closed",
            ),
        };

        Diagnostic::warning()
            .with_message(message)
            .with_labels(vec![
                Label::primary(file_id, self.span.clone()).with_message(label)
            ])
    }
}

/// Result type alias for the crate.
pub type HlslexResult<T> = Result<T, HlslexError>;
