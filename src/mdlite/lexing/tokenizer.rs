//! The tokenizer loop
//!
//! Drives a [`Scanner`] through the source, firing the first applicable rule from
//! [`RULES`](super::rules::RULES) at each step, then demotes unclosed spans.

use super::rules::{self, OpenSpans, Rule, ESCAPED_UNDERSCORE};
use super::scanner::Scanner;
use crate::mdlite::token::Token;

/// Tokenize mdlite source into a flat token stream.
///
/// Never fails: malformed or unclosed delimiters come out as text tokens.
pub fn tokenize(source: &str) -> Vec<Token> {
    Tokenizer::new(source).run()
}

struct Tokenizer {
    scanner: Scanner,
    spans: OpenSpans,
    tokens: Vec<Token>,
}

impl Tokenizer {
    fn new(source: &str) -> Self {
        Tokenizer {
            scanner: Scanner::new(source),
            spans: OpenSpans::new(),
            tokens: Vec::with_capacity(source.len()),
        }
    }

    fn run(mut self) -> Vec<Token> {
        while !self.scanner.is_at_end() {
            let rule = rules::select(&self.scanner, &self.spans);
            self.fire(rule);
        }
        self.demote_unclosed();
        self.tokens
    }

    fn fire(&mut self, rule: &Rule) {
        match rule.delimiter() {
            Some(delimiter) => {
                self.scanner.consume(delimiter);
                let index = self.tokens.len();
                self.tokens.push(Token::new(rule.emits(), delimiter));
                self.spans.record(rule.emits(), index);
            }
            None => self.push_text(),
        }
    }

    fn push_text(&mut self) {
        if self.scanner.next_is(ESCAPED_UNDERSCORE) {
            // drop the backslash, the underscore becomes text below
            self.scanner.poll();
        }
        if let Some(ch) = self.scanner.poll() {
            self.tokens.push(Token::text(ch));
        }
    }

    /// Rewrite still-open delimiters to text, in place.
    fn demote_unclosed(&mut self) {
        for index in [self.spans.italic(), self.spans.bold()].into_iter().flatten() {
            log::trace!(
                "demoting unclosed {} at token {}",
                self.tokens[index].kind(),
                index
            );
            self.tokens[index] = self.tokens[index].demoted();
        }
        self.spans = OpenSpans::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mdlite::token::{detokenize, TokenKind};

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(Token::kind).collect()
    }

    fn has_delimiters(tokens: &[Token]) -> bool {
        tokens.iter().any(|t| t.kind().is_delimiter())
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), vec![]);
    }

    #[test]
    fn test_plain_text_is_one_token_per_char() {
        let tokens = tokenize("héllo");
        assert_eq!(tokens.len(), 5);
        assert!(!has_delimiters(&tokens));
        assert_eq!(detokenize(&tokens), "héllo");
    }

    #[test]
    fn test_italic_span() {
        let tokens = tokenize("a _b_ c");
        assert_eq!(
            tokens,
            vec![
                Token::text('a'),
                Token::text(' '),
                Token::italic_open(),
                Token::text('b'),
                Token::italic_close(),
                Token::text(' '),
                Token::text('c'),
            ]
        );
    }

    #[test]
    fn test_bold_span() {
        let tokens = tokenize("__b__");
        assert_eq!(
            tokens,
            vec![Token::bold_open(), Token::text('b'), Token::bold_close()]
        );
    }

    #[test]
    fn test_italic_nested_in_bold() {
        let tokens = tokenize("__a _b_ c__");
        use TokenKind::*;
        assert_eq!(
            kinds(&tokens),
            vec![BoldOpen, Text, Text, ItalicOpen, Text, ItalicClose, Text, Text, BoldClose]
        );
    }

    #[test]
    fn test_triple_underscores_nest() {
        use TokenKind::*;
        assert_eq!(
            kinds(&tokenize("___a___")),
            vec![BoldOpen, ItalicOpen, Text, ItalicClose, BoldClose]
        );
    }

    #[test]
    fn test_unclosed_italic_is_demoted() {
        let tokens = tokenize("_a");
        assert_eq!(tokens, vec![Token::new(TokenKind::Text, "_"), Token::text('a')]);
    }

    #[test]
    fn test_unclosed_bold_is_demoted_alone() {
        let tokens = tokenize("__a _b_");
        assert_eq!(tokens[0], Token::new(TokenKind::Text, "__"));
        assert_eq!(tokens[3].kind(), TokenKind::ItalicOpen);
        assert_eq!(tokens[5].kind(), TokenKind::ItalicClose);
    }

    #[test]
    fn test_unclosed_bold_and_italic_are_demoted() {
        let tokens = tokenize("__a _b");
        assert!(!has_delimiters(&tokens));
        assert_eq!(detokenize(&tokens), "__a _b");
        assert_eq!(tokens[0].as_str(), "__");
        assert_eq!(tokens[3].as_str(), "_");
    }

    #[test]
    fn test_escaped_underscores_are_text() {
        let tokens = tokenize("\\_a\\_");
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Text, "_"),
                Token::text('a'),
                Token::new(TokenKind::Text, "_"),
            ]
        );
    }

    #[test]
    fn test_escape_inside_span_does_not_close() {
        use TokenKind::*;
        let tokens = tokenize("_a\\_b_");
        assert_eq!(kinds(&tokens), vec![ItalicOpen, Text, Text, Text, ItalicClose]);
        assert_eq!(detokenize(&tokens), "_a_b_");
    }

    #[test]
    fn test_lone_backslash_is_text() {
        assert_eq!(detokenize(&tokenize("a\\b\\")), "a\\b\\");
    }

    #[test]
    fn test_whitespace_gating() {
        assert!(!has_delimiters(&tokenize("a _ b")));
        // closing delimiter preceded by whitespace stays text; the span is then demoted
        assert!(!has_delimiters(&tokenize("_a _")));
    }

    #[test]
    fn test_whitespace_gating_bold() {
        use TokenKind::*;
        // `__ ` cannot open bold, but its first `_` still opens italic
        assert_eq!(
            kinds(&tokenize("a __ b")),
            vec![Text, Text, ItalicOpen, ItalicClose, Text, Text]
        );
        let tokens = tokenize("__a __");
        assert_eq!(tokens[0], Token::new(TokenKind::Text, "__"));
        assert!(!kinds(&tokens).contains(&BoldClose));
    }

    #[test]
    fn test_bold_is_text_inside_open_italic() {
        use TokenKind::*;
        // `_a __b__ c_`: the inner `__` can neither open nor close bold
        let tokens = tokenize("_a __b__ c_");
        assert!(!kinds(&tokens).contains(&BoldOpen));
        assert!(!kinds(&tokens).contains(&BoldClose));
    }

    #[test]
    fn test_bare_double_underscore() {
        use TokenKind::*;
        assert_eq!(kinds(&tokenize("__")), vec![ItalicOpen, ItalicClose]);
        assert_eq!(kinds(&tokenize("_")), vec![Text]);
    }
}
