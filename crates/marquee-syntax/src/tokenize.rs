//! Single-pass tokenizer.
//!
//! At each scan position an ordered list of matcher rules is tried; the
//! first rule that matches wins and the scan resumes immediately after the
//! matched text. Characters no rule claims accumulate into a plain span
//! that is flushed when a rule next matches or the input ends.

use crate::token::{Token, TokenKind};

/// Reserved keywords, matched whole-word only.
const KEYWORDS: &[&str] = &[
    "data", "type", "newtype", "class", "instance", "where", "let", "in", "case", "of", "if",
    "then", "else", "do", "module", "import", "forall",
];

/// Operator symbols. Multi-character operators come first so an arrow is
/// never split into its single-character prefixes.
const OPERATORS: &[&str] = &["::", "->", "=>", "<-", "|", "$", "&", "."];

/// A matcher rule. Given the unscanned remainder and the character just
/// before it, returns the matched length and classification, or `None`.
type Rule = fn(&str, Option<char>) -> Option<(usize, TokenKind)>;

/// Rules in priority order. Ties at a position are broken by this order,
/// not by match length.
const RULES: &[Rule] = &[keyword, operator, type_name, literal];

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_ident_char(c: char) -> bool {
    is_word_char(c) || c == '\''
}

fn keyword(rest: &str, prev: Option<char>) -> Option<(usize, TokenKind)> {
    if prev.is_some_and(is_word_char) {
        return None;
    }

    for kw in KEYWORDS {
        if rest.starts_with(kw) {
            // Whole-word only: "database" is not the keyword "data". The
            // same check lets "instance" fall through "in" to its own entry.
            let after = rest[kw.len()..].chars().next();
            if !after.is_some_and(is_word_char) {
                return Some((kw.len(), TokenKind::Keyword));
            }
        }
    }

    None
}

fn operator(rest: &str, _prev: Option<char>) -> Option<(usize, TokenKind)> {
    OPERATORS
        .iter()
        .find(|op| rest.starts_with(**op))
        .map(|op| (op.len(), TokenKind::Operator))
}

fn type_name(rest: &str, prev: Option<char>) -> Option<(usize, TokenKind)> {
    if prev.is_some_and(is_word_char) {
        return None;
    }

    let first = rest.chars().next()?;
    if !first.is_ascii_uppercase() {
        return None;
    }

    let len = rest
        .char_indices()
        .find(|(_, c)| !is_ident_char(*c))
        .map_or(rest.len(), |(i, _)| i);

    Some((len, TokenKind::TypeName))
}

fn literal(rest: &str, _prev: Option<char>) -> Option<(usize, TokenKind)> {
    if !rest.starts_with('\'') {
        return None;
    }

    let close = rest[1..].find('\'')?;
    Some((1 + close + 1, TokenKind::Literal))
}

/// Tokenize a source string into classified spans.
///
/// Cannot fail: every character of the input is classified, unmatched text
/// degrades to [`TokenKind::Plain`], and the concatenated span texts
/// reproduce the input exactly.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;
    let mut prev: Option<char> = None;

    while pos < source.len() {
        let rest = &source[pos..];

        if let Some((len, kind)) = RULES.iter().find_map(|rule| rule(rest, prev)) {
            if plain_start < pos {
                tokens.push(Token::new(TokenKind::Plain, &source[plain_start..pos]));
            }
            tokens.push(Token::new(kind, &rest[..len]));
            prev = rest[..len].chars().next_back();
            pos += len;
            plain_start = pos;
        } else if let Some(c) = rest.chars().next() {
            prev = Some(c);
            pos += c.len_utf8();
        } else {
            break;
        }
    }

    if plain_start < source.len() {
        tokens.push(Token::new(TokenKind::Plain, &source[plain_start..]));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds_and_texts(source: &str) -> Vec<(TokenKind, String)> {
        tokenize(source)
            .into_iter()
            .map(|t| (t.kind, t.text))
            .collect()
    }

    fn roundtrip(source: &str) -> String {
        tokenize(source).iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn tokenizes_data_declaration() {
        let spans = kinds_and_texts("data Foo = Bar { x :: Int }");

        assert_eq!(
            spans,
            vec![
                (TokenKind::Keyword, "data".to_string()),
                (TokenKind::Plain, " ".to_string()),
                (TokenKind::TypeName, "Foo".to_string()),
                (TokenKind::Plain, " = ".to_string()),
                (TokenKind::TypeName, "Bar".to_string()),
                (TokenKind::Plain, " { x ".to_string()),
                (TokenKind::Operator, "::".to_string()),
                (TokenKind::Plain, " ".to_string()),
                (TokenKind::TypeName, "Int".to_string()),
                (TokenKind::Plain, " }".to_string()),
            ]
        );
    }

    #[test]
    fn roundtrip_reproduces_input() {
        let inputs = [
            "",
            "data Foo = Bar { x :: Int }",
            "class (Eq a) => Ord a where",
            "getUser :: Int -> IO (Maybe User)",
            "route = input :-> either notFound output",
            "λ → unmatched unicode stays plain",
            "trailing plain text at the end",
            "'lit' and 'another'",
        ];

        for input in inputs {
            assert_eq!(roundtrip(input), input);
        }
    }

    #[test]
    fn spans_partition_input() {
        let source = "server = Server.do\n  getUserAction";
        let tokens = tokenize(source);

        let total: usize = tokens.iter().map(|t| t.text.len()).sum();
        assert_eq!(total, source.len());
        assert!(tokens.iter().all(|t| !t.text.is_empty()));
    }

    #[test]
    fn arrow_is_a_single_operator_span() {
        let spans = kinds_and_texts("a -> b");

        assert_eq!(
            spans,
            vec![
                (TokenKind::Plain, "a ".to_string()),
                (TokenKind::Operator, "->".to_string()),
                (TokenKind::Plain, " b".to_string()),
            ]
        );
    }

    #[test]
    fn double_colon_beats_single_char_operators() {
        let tokens = tokenize("x :: y => z <- w");
        let ops: Vec<&str> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Operator)
            .map(|t| t.text.as_str())
            .collect();

        assert_eq!(ops, vec!["::", "=>", "<-"]);
    }

    #[test]
    fn keywords_match_whole_words_only() {
        let spans = kinds_and_texts("database");
        assert_eq!(spans, vec![(TokenKind::Plain, "database".to_string())]);

        let spans = kinds_and_texts("instance");
        assert_eq!(spans, vec![(TokenKind::Keyword, "instance".to_string())]);
    }

    #[test]
    fn type_names_require_a_boundary() {
        // "xFoo" is one plain identifier, not plain + type
        let spans = kinds_and_texts("xFoo");
        assert_eq!(spans, vec![(TokenKind::Plain, "xFoo".to_string())]);

        // primes belong to the identifier
        let spans = kinds_and_texts("Maybe'");
        assert_eq!(spans, vec![(TokenKind::TypeName, "Maybe'".to_string())]);
    }

    #[test]
    fn quoted_literal_spans() {
        let spans = kinds_and_texts("capture 'id' here");

        assert_eq!(
            spans,
            vec![
                (TokenKind::Plain, "capture ".to_string()),
                (TokenKind::Literal, "'id'".to_string()),
                (TokenKind::Plain, " here".to_string()),
            ]
        );
    }

    #[test]
    fn unclosed_quote_stays_plain() {
        let spans = kinds_and_texts("don't panic");

        // no closing quote after "t panic", so the apostrophe is plain text
        assert_eq!(roundtrip("don't panic"), "don't panic");
        assert!(spans.iter().all(|(k, _)| *k != TokenKind::Literal));
    }

    #[test]
    fn empty_input_yields_no_spans() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn adjacent_plain_runs_merge() {
        let spans = kinds_and_texts("  just plain words  ");
        assert_eq!(
            spans,
            vec![(TokenKind::Plain, "  just plain words  ".to_string())]
        );
    }
}
