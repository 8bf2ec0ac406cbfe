//! Lexicon tables and the token classifier.
//!
//! The lexicon holds the canonical HLSL word lists and decides, for an
//! identifier-like lexeme, which highlight category it belongs to. Tables are
//! compiled once into boundary-anchored regex alternations by
//! [`LexiconBuilder::build`] and are immutable afterwards; user extension
//! words are merged in before compilation, which is the only mutation path.
//!
//! Classification is a pure, total function: an unrecognized lexeme is always
//! an [`Category::Identifier`], never an error.

pub mod tables;

use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::LexiconError;

/// The highlight category assigned to a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Type,
    Qualifier,
    Keyword,
    ReservedKeyword,
    Builtin,
    DeprecatedQualifier,
    DeprecatedKeyword,
    DeprecatedBuiltin,
    DeprecatedVariable,
    PreprocessorDirective,
    PreprocessorBuiltin,
    PreprocessorOperator,
    Identifier,
    Comment,
    StringLiteral,
    NumberLiteral,
    Punctuation,
    Whitespace,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Type => "type",
            Category::Qualifier => "qualifier",
            Category::Keyword => "keyword",
            Category::ReservedKeyword => "reserved keyword",
            Category::Builtin => "builtin",
            Category::DeprecatedQualifier => "deprecated qualifier",
            Category::DeprecatedKeyword => "deprecated keyword",
            Category::DeprecatedBuiltin => "deprecated builtin",
            Category::DeprecatedVariable => "deprecated variable",
            Category::PreprocessorDirective => "preprocessor directive",
            Category::PreprocessorBuiltin => "preprocessor builtin",
            Category::PreprocessorOperator => "preprocessor operator",
            Category::Identifier => "identifier",
            Category::Comment => "comment",
            Category::StringLiteral => "string literal",
            Category::NumberLiteral => "number literal",
            Category::Punctuation => "punctuation",
            Category::Whitespace => "whitespace",
        };
        write!(f, "{name}")
    }
}

/// Where a lexeme was scanned from. Preprocessor-directive words are only
/// meaningful on a `#` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanContext {
    #[default]
    Default,
    PreprocessorLine,
}

/// Builder for a [`CompiledLexicon`].
///
/// Seeds the base tables and accepts the four user extension points. Each
/// extension word is appended verbatim to its base table, so a word may be a
/// plain identifier or a regex fragment; invalid fragments fail `build`.
#[derive(Debug, Clone, Default)]
pub struct LexiconBuilder {
    additional_types: Vec<String>,
    additional_qualifiers: Vec<String>,
    additional_keywords: Vec<String>,
    additional_builtins: Vec<String>,
}

impl LexiconBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append extra type names.
    pub fn types<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.additional_types.extend(words.into_iter().map(Into::into));
        self
    }

    /// Append extra qualifier names.
    pub fn qualifiers<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.additional_qualifiers
            .extend(words.into_iter().map(Into::into));
        self
    }

    /// Append extra keyword names.
    pub fn keywords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.additional_keywords
            .extend(words.into_iter().map(Into::into));
        self
    }

    /// Append extra builtin names.
    pub fn builtins<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.additional_builtins
            .extend(words.into_iter().map(Into::into));
        self
    }

    /// Append extension words to the table for `category`.
    ///
    /// Only the four customizable tables accept extensions; any other
    /// category fails with [`LexiconError::EmptyCategory`].
    pub fn extend<I, S>(self, category: Category, words: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match category {
            Category::Type => Ok(self.types(words)),
            Category::Qualifier => Ok(self.qualifiers(words)),
            Category::Keyword => Ok(self.keywords(words)),
            Category::Builtin => Ok(self.builtins(words)),
            _ => Err(LexiconError::EmptyCategory { category }),
        }
    }

    /// Compile all tables into an immutable [`CompiledLexicon`].
    ///
    /// Scalar type expansion (`float` -> `float2`, `float3x4`, ...) happens
    /// here, once, so classification stays O(1) amortized per lexeme.
    pub fn build(self) -> Result<CompiledLexicon, LexiconError> {
        let mut type_patterns = tables::expand_scalar_types();
        type_patterns.extend(tables::TYPES.iter().map(|w| (*w).to_string()));
        type_patterns.extend(self.additional_types);

        // Classification precedence: first match wins, reproducing the
        // reference table layout.
        let rules = vec![
            compile_table(Category::Type, &type_patterns)?,
            compile_static(Category::DeprecatedQualifier, tables::DEPRECATED_QUALIFIERS)?,
            compile_static(Category::ReservedKeyword, tables::RESERVED_KEYWORDS)?,
            compile_extended(
                Category::Qualifier,
                tables::QUALIFIERS,
                self.additional_qualifiers,
            )?,
            compile_extended(
                Category::Keyword,
                tables::KEYWORDS,
                self.additional_keywords,
            )?,
            compile_static(Category::DeprecatedKeyword, tables::DEPRECATED_KEYWORDS)?,
            compile_static(Category::PreprocessorBuiltin, tables::PREPROCESSOR_BUILTINS)?,
            compile_static(Category::DeprecatedBuiltin, tables::DEPRECATED_BUILTINS)?,
            compile_extended(
                Category::Builtin,
                tables::BUILTINS,
                self.additional_builtins,
            )?,
            compile_static(Category::DeprecatedVariable, tables::DEPRECATED_VARIABLES)?,
        ];

        let preprocessor_rules = vec![
            compile_static(
                Category::PreprocessorDirective,
                tables::PREPROCESSOR_DIRECTIVES,
            )?,
            compile_static(
                Category::PreprocessorOperator,
                tables::PREPROCESSOR_OPERATORS,
            )?,
        ];

        Ok(CompiledLexicon {
            rules: rules.into_iter().flatten().collect(),
            preprocessor_rules: preprocessor_rules.into_iter().flatten().collect(),
        })
    }
}

/// One boundary-anchored alternation per populated category, in precedence
/// order. Immutable once built; cheap to share across tokenizing sessions.
#[derive(Debug)]
pub struct CompiledLexicon {
    rules: Vec<(Category, Regex)>,
    /// Consulted first, and only, when scanning inside a `#` line.
    preprocessor_rules: Vec<(Category, Regex)>,
}

impl CompiledLexicon {
    /// Build the default lexicon with no extension words.
    pub fn standard() -> Result<Self, LexiconError> {
        LexiconBuilder::new().build()
    }

    /// Classify a bare lexeme in ordinary expression context.
    ///
    /// Total by design: unknown shader identifiers, user variables and
    /// function names fall through to [`Category::Identifier`].
    pub fn classify(&self, lexeme: &str) -> Category {
        self.classify_at(lexeme, ScanContext::Default)
    }

    /// Classify a bare lexeme scanned in the given context.
    pub fn classify_at(&self, lexeme: &str, context: ScanContext) -> Category {
        if context == ScanContext::PreprocessorLine {
            for (category, matcher) in &self.preprocessor_rules {
                if matcher.is_match(lexeme) {
                    return *category;
                }
            }
        }
        for (category, matcher) in &self.rules {
            if matcher.is_match(lexeme) {
                return *category;
            }
        }
        Category::Identifier
    }
}

fn compile_static(
    category: Category,
    base: &[&str],
) -> Result<Option<(Category, Regex)>, LexiconError> {
    let patterns: Vec<String> = base.iter().map(|w| (*w).to_string()).collect();
    compile_table(category, &patterns)
}

fn compile_extended(
    category: Category,
    base: &[&str],
    extra: Vec<String>,
) -> Result<Option<(Category, Regex)>, LexiconError> {
    let mut patterns: Vec<String> = base.iter().map(|w| (*w).to_string()).collect();
    patterns.extend(extra);
    compile_table(category, &patterns)
}

/// Wrap a category's word list into a single anchored alternation.
///
/// Anchoring to the full lexeme gives whole-word semantics: `in` never
/// matches inside `int`. An empty table compiles to `None`, which never
/// matches. Every fragment is validated on its own first so the error names
/// the offending entry instead of the joined alternation.
fn compile_table(
    category: Category,
    patterns: &[String],
) -> Result<Option<(Category, Regex)>, LexiconError> {
    if patterns.is_empty() {
        return Ok(None);
    }

    for pattern in patterns {
        if let Err(e) = Regex::new(&format!("^(?:{pattern})$")) {
            return Err(LexiconError::InvalidPattern {
                category,
                pattern: pattern.clone(),
                message: e.to_string(),
            });
        }
    }

    let branches: Vec<String> = patterns.iter().map(|p| format!("(?:{p})")).collect();
    let alternation = format!("^(?:{})$", branches.join("|"));
    let matcher = Regex::new(&alternation).map_err(|e| LexiconError::InvalidPattern {
        category,
        pattern: alternation.clone(),
        message: e.to_string(),
    })?;

    Ok(Some((category, matcher)))
}
