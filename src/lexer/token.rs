//! Raw lexical layer.
//!
//! Logos splits the source into lexical shapes (words, numbers, comments,
//! strings, punctuation, whitespace) with byte spans; the tokenizer wrapper
//! then classifies words through the lexicon. Block comments and strings are
//! consumed by callbacks so an unterminated construct can extend to end of
//! input and record a diagnostic instead of failing.

use std::fmt;

use logos::{Lexer as LogosLexer, Logos};
use serde::Serialize;

use crate::error::{Unterminated, UnterminatedKind};
use crate::lexicon::Category;

/// Mutable state threaded through the raw lexer: out-of-band diagnostics
/// for constructs left open at end of input.
#[derive(Debug, Default)]
pub(crate) struct RawExtras {
    pub unterminated: Vec<Unterminated>,
}

/// The lexical shape of a span, before classification.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(extras = RawExtras)]
pub(crate) enum RawToken {
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("/*", lex_block_comment)]
    BlockComment,

    #[token("\"", lex_string)]
    StringLit,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Word,

    // Integer, float and hex literal grammars. Longest match wins, so
    // `1.5f` is one float and `.` alone falls through to punctuation.
    #[regex(r"0[xX][0-9a-fA-F]+[uUlL]?")]
    #[regex(r"[0-9]+\.[0-9]*(?:[eE][+-]?[0-9]+)?[hHfFlL]?")]
    #[regex(r"\.[0-9]+(?:[eE][+-]?[0-9]+)?[hHfFlL]?")]
    #[regex(r"[0-9]+(?:[eE][+-]?[0-9]+)?[uUlL]?")]
    Number,

    // Any other single non-whitespace character.
    #[regex(r#"[^ \t\r\n\fA-Za-z0-9_"]"#)]
    Punct,
}

/// Consume a block comment to its closing `*/`, or to end of input with a
/// diagnostic when the terminator is missing.
fn lex_block_comment(lex: &mut LogosLexer<RawToken>) {
    let remainder = lex.remainder();
    match remainder.find("*/") {
        Some(end) => lex.bump(end + 2),
        None => {
            lex.bump(remainder.len());
            lex.extras.unterminated.push(Unterminated {
                kind: UnterminatedKind::BlockComment,
                span: lex.span(),
            });
        }
    }
}

/// Consume a string literal to its closing unescaped `"`, or to end of input
/// with a diagnostic when the terminator is missing.
fn lex_string(lex: &mut LogosLexer<RawToken>) {
    let remainder = lex.remainder();
    let mut chars = remainder.char_indices();
    while let Some((offset, c)) = chars.next() {
        match c {
            '\\' => {
                // Skip the escaped character so `\"` does not terminate.
                chars.next();
            }
            '"' => {
                lex.bump(offset + 1);
                return;
            }
            _ => {}
        }
    }
    lex.bump(remainder.len());
    lex.extras.unterminated.push(Unterminated {
        kind: UnterminatedKind::StringLiteral,
        span: lex.span(),
    });
}

/// A classified token with its source span.
///
/// Immutable value object borrowing from the source buffer. `start`/`end`
/// are byte offsets; `line` and `column` are 1-based and refer to the first
/// character of the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'src> {
    pub text: &'src str,
    pub category: Category,
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {} `{}`",
            self.line, self.column, self.category, self.text
        )
    }
}
