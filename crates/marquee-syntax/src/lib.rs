//! Lightweight syntax highlighter for Haskell-style code snippets.
//!
//! This crate splits a source string into a flat list of classified spans
//! (keyword, operator, type name, quoted literal, plain text) that a
//! rendering layer maps to visual styles. Tokenization is total: every
//! character ends up in exactly one span and concatenating the spans
//! reproduces the input.

pub mod token;
pub mod tokenize;

pub use token::{Token, TokenKind};
pub use tokenize::tokenize;
