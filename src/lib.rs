//! hlslex: a lexical classifier core for the HLSL shading language.
//!
//! This library provides host-independent token classification for HLSL:
//! canonical lexical tables (types, qualifiers, keywords, builtins,
//! semantics, preprocessor words), a classifier that maps identifier-like
//! lexemes to highlight categories, and a minimal tokenizer that drives the
//! classifier over raw shader source. An editor plugin, language server or
//! CLI linter embeds it by building a [`CompiledLexicon`] once and calling
//! [`tokenize`] per buffer, or [`CompiledLexicon::classify`] per lexeme.

pub mod error;
pub mod lexer;
pub mod lexicon;

// Re-export commonly used types
pub use error::{HlslexError, HlslexResult, LexiconError, Unterminated, UnterminatedKind};
pub use lexer::{tokenize, Lexer, Token, TokenStream};
pub use lexicon::{Category, CompiledLexicon, LexiconBuilder, ScanContext};

use std::path::Path;

/// File extensions conventionally holding HLSL source.
///
/// Routing files to this classifier is the host's decision; this set is the
/// documented reference the host can start from.
pub const SHADER_EXTENSIONS: &[&str] =
    &["fx", "fxc", "fxh", "hlsl", "shader", "cginc", "compute"];

/// Whether a path looks like an HLSL source file, by extension.
#[must_use]
pub fn is_shader_source(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SHADER_EXTENSIONS.iter().any(|s| ext.eq_ignore_ascii_case(s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_shader_extensions() {
        assert!(is_shader_source(Path::new("lighting.hlsl")));
        assert!(is_shader_source(Path::new("Common.FXH")));
        assert!(is_shader_source(Path::new("a/b/post.compute")));
        assert!(!is_shader_source(Path::new("main.rs")));
        assert!(!is_shader_source(Path::new("Makefile")));
    }
}
