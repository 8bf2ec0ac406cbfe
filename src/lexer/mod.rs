//! Tokenization of HLSL source text.
//!
//! This module turns a raw shader buffer into a lazy sequence of classified
//! [`Token`]s with source spans, recognizing comments, string literals,
//! numeric literals, preprocessor lines, identifiers and punctuation. It is
//! the end-to-end driver for the classifier in [`crate::lexicon`]; hosts
//! that already tokenize with their own engine can call the classifier
//! directly instead.

mod token;
mod tokenizer;

pub use token::Token;
pub use tokenizer::{tokenize, Lexer, TokenStream};
