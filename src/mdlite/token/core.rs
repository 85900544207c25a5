//! Token definitions
//!
//! A [`Token`] pairs a [`TokenKind`] with the literal text it was scanned from.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Literal text of a bold delimiter
pub const BOLD_DELIMITER: &str = "__";

/// Literal text of an italic delimiter
pub const ITALIC_DELIMITER: &str = "_";

/// The kind of a token in the flat token stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// Opening `__`
    BoldOpen,
    /// Closing `__`
    BoldClose,
    /// Opening `_`
    ItalicOpen,
    /// Closing `_`
    ItalicClose,
    /// A single literal character (including demoted delimiters)
    Text,
}

impl TokenKind {
    /// All kinds, in declaration order.
    pub const ALL: [TokenKind; 5] = [
        TokenKind::BoldOpen,
        TokenKind::BoldClose,
        TokenKind::ItalicOpen,
        TokenKind::ItalicClose,
        TokenKind::Text,
    ];

    /// Returns `true` for the two opening kinds.
    pub fn is_open(self) -> bool {
        matches!(self, TokenKind::BoldOpen | TokenKind::ItalicOpen)
    }

    /// Returns `true` for the two closing kinds.
    pub fn is_close(self) -> bool {
        matches!(self, TokenKind::BoldClose | TokenKind::ItalicClose)
    }

    /// Returns `true` for every kind except [`TokenKind::Text`].
    pub fn is_delimiter(self) -> bool {
        self != TokenKind::Text
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::BoldOpen => write!(f, "bold-open"),
            TokenKind::BoldClose => write!(f, "bold-close"),
            TokenKind::ItalicOpen => write!(f, "italic-open"),
            TokenKind::ItalicClose => write!(f, "italic-close"),
            TokenKind::Text => write!(f, "text"),
        }
    }
}

/// A scanned token: its kind plus the exact text consumed for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }

    pub fn bold_open() -> Self {
        Token::new(TokenKind::BoldOpen, BOLD_DELIMITER)
    }

    pub fn bold_close() -> Self {
        Token::new(TokenKind::BoldClose, BOLD_DELIMITER)
    }

    pub fn italic_open() -> Self {
        Token::new(TokenKind::ItalicOpen, ITALIC_DELIMITER)
    }

    pub fn italic_close() -> Self {
        Token::new(TokenKind::ItalicClose, ITALIC_DELIMITER)
    }

    /// A text token holding a single character.
    pub fn text(ch: char) -> Self {
        Token::new(TokenKind::Text, ch.to_string())
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The source text this token was scanned from.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Same text, demoted to [`TokenKind::Text`].
    pub fn demoted(&self) -> Self {
        Token::new(TokenKind::Text, self.text.clone())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Text => write!(f, "<text:{}>", self.text),
            kind => write!(f, "<{}>", kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_kind_display() {
        assert_eq!(format!("{}", TokenKind::BoldOpen), "bold-open");
        assert_eq!(format!("{}", TokenKind::BoldClose), "bold-close");
        assert_eq!(format!("{}", TokenKind::ItalicOpen), "italic-open");
        assert_eq!(format!("{}", TokenKind::ItalicClose), "italic-close");
        assert_eq!(format!("{}", TokenKind::Text), "text");
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::bold_open().to_string(), "<bold-open>");
        assert_eq!(Token::text('é').to_string(), "<text:é>");
    }

    #[test]
    fn test_constructors_carry_delimiter_text() {
        assert_eq!(Token::bold_open().as_str(), "__");
        assert_eq!(Token::bold_close().as_str(), "__");
        assert_eq!(Token::italic_open().as_str(), "_");
        assert_eq!(Token::italic_close().as_str(), "_");
    }

    #[test]
    fn test_demoted_keeps_text() {
        let demoted = Token::bold_open().demoted();
        assert_eq!(demoted.kind(), TokenKind::Text);
        assert_eq!(demoted.as_str(), "__");
    }

    #[test]
    fn test_kind_classification() {
        assert!(TokenKind::BoldOpen.is_open());
        assert!(TokenKind::ItalicClose.is_close());
        assert!(!TokenKind::Text.is_delimiter());
        assert_eq!(
            TokenKind::ALL.iter().filter(|k| k.is_delimiter()).count(),
            4
        );
    }

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&Token::italic_open()).unwrap();
        assert_eq!(json, r#"{"kind":"italic-open","text":"_"}"#);
        let back: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Token::italic_open());
    }
}
