//! The classified token stream.
//!
//! [`Lexer`] drives the raw logos layer forward, classifies identifier-like
//! spans through the [`CompiledLexicon`], tracks line/column positions and
//! preprocessor-line state, and collects unterminated-construct diagnostics
//! out of band. Tokenizing the same buffer twice yields identical streams:
//! the lexer is a pure function of the source text and the lexicon.

use logos::{Lexer as LogosLexer, Logos};

use super::token::{RawToken, Token};
use crate::error::Unterminated;
use crate::lexicon::{Category, CompiledLexicon, ScanContext};

/// Lazy tokenizer over one source buffer.
///
/// Token production is stateless-forward: the cursor strictly advances and
/// there is no lookahead beyond the current construct, so a partially
/// consumed lexer can always be dropped safely.
pub struct Lexer<'lex, 'src> {
    lexicon: &'lex CompiledLexicon,
    inner: LogosLexer<'src, RawToken>,
    source: &'src str,
    line: usize,
    column: usize,
    /// Inside a `#` line; directive words classify as such until end of line.
    in_preprocessor_line: bool,
    /// A non-whitespace token has already appeared on the current line, so a
    /// later `#` cannot open a preprocessor line.
    line_has_content: bool,
}

impl<'lex, 'src> Lexer<'lex, 'src> {
    pub fn new(lexicon: &'lex CompiledLexicon, source: &'src str) -> Self {
        Self {
            lexicon,
            inner: RawToken::lexer(source),
            source,
            line: 1,
            column: 1,
            in_preprocessor_line: false,
            line_has_content: false,
        }
    }

    /// Diagnostics collected so far. Complete once the iterator is exhausted.
    pub fn diagnostics(&self) -> &[Unterminated] {
        &self.inner.extras.unterminated
    }

    /// Drain the collected diagnostics.
    pub fn take_diagnostics(&mut self) -> Vec<Unterminated> {
        std::mem::take(&mut self.inner.extras.unterminated)
    }

    fn advance_position(&mut self, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }
}

impl<'lex, 'src> Iterator for Lexer<'lex, 'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.inner.next()?;
        let span = self.inner.span();
        let text = &self.source[span.clone()];

        // The raw layer covers every byte; an error here would mean a gap in
        // its patterns, and a lone character is punctuation either way.
        let raw = result.unwrap_or(RawToken::Punct);

        let category = match raw {
            RawToken::Whitespace => Category::Whitespace,
            RawToken::LineComment | RawToken::BlockComment => Category::Comment,
            RawToken::StringLit => Category::StringLiteral,
            RawToken::Number => Category::NumberLiteral,
            RawToken::Punct => Category::Punctuation,
            RawToken::Word => {
                let context = if self.in_preprocessor_line {
                    ScanContext::PreprocessorLine
                } else {
                    ScanContext::Default
                };
                self.lexicon.classify_at(text, context)
            }
        };

        let token = Token {
            text,
            category,
            start: span.start,
            end: span.end,
            line: self.line,
            column: self.column,
        };

        // A `#` as the first non-whitespace character of a line opens a
        // preprocessor line; any newline closes it.
        if raw == RawToken::Punct && text == "#" && !self.line_has_content {
            self.in_preprocessor_line = true;
        }
        if text.contains('\n') {
            self.in_preprocessor_line = false;
        }
        if raw == RawToken::Whitespace {
            if text.contains('\n') {
                self.line_has_content = false;
            }
        } else {
            // Multi-line tokens (block comments, strings) leave their tail
            // on the current line, so the line still has content.
            self.line_has_content = true;
        }

        self.advance_position(text);
        Some(token)
    }
}

/// A fully collected token stream plus its out-of-band diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream<'src> {
    pub tokens: Vec<Token<'src>>,
    pub diagnostics: Vec<Unterminated>,
}

/// Tokenize a whole buffer.
///
/// Diagnostics are returned alongside, never instead of, the tokens: a
/// malformed file still gets maximal classification.
pub fn tokenize<'src>(lexicon: &CompiledLexicon, source: &'src str) -> TokenStream<'src> {
    let mut lexer = Lexer::new(lexicon, source);
    let tokens: Vec<Token<'src>> = lexer.by_ref().collect();
    let diagnostics = lexer.take_diagnostics();
    TokenStream {
        tokens,
        diagnostics,
    }
}
