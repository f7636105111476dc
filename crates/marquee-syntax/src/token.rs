//! Classified text spans.

use serde::Serialize;

/// Classification of a token span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// Reserved language keyword
    Keyword,
    /// Structural or operator symbol
    Operator,
    /// Capitalized (type-level) identifier
    TypeName,
    /// Single-quoted literal
    Literal,
    /// Unclassified text
    Plain,
}

impl TokenKind {
    /// CSS class the rendering layer attaches to spans of this kind.
    pub fn css_class(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "tok-keyword",
            TokenKind::Operator => "tok-operator",
            TokenKind::TypeName => "tok-type",
            TokenKind::Literal => "tok-literal",
            TokenKind::Plain => "tok-plain",
        }
    }
}

/// A contiguous classified substring of tokenized source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Span classification
    pub kind: TokenKind,

    /// Exact matched text
    pub text: String,
}

impl Token {
    /// Create a new token span.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_classes_are_distinct() {
        let kinds = [
            TokenKind::Keyword,
            TokenKind::Operator,
            TokenKind::TypeName,
            TokenKind::Literal,
            TokenKind::Plain,
        ];

        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a.css_class(), b.css_class());
            }
        }
    }
}
