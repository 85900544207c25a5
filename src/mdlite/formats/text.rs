//! Plain-text formats: token dump and detokenized source

use super::registry::{FormatError, Formatter};
use crate::mdlite::token::{detokenize, Token, ToSimpleString};

/// One-line token dump, `<italic-open><text:a><italic-close>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleFormatter;

impl Formatter for SimpleFormatter {
    fn name(&self) -> &str {
        "simple"
    }

    fn serialize(&self, tokens: &[Token]) -> Result<String, FormatError> {
        Ok(tokens.to_simple_string())
    }

    fn description(&self) -> &str {
        "Token kinds and text, one tag per token"
    }
}

/// Concatenated token text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn serialize(&self, tokens: &[Token]) -> Result<String, FormatError> {
        Ok(detokenize(tokens))
    }

    fn description(&self) -> &str {
        "Source text reconstructed from tokens"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mdlite::lexing::tokenize;

    #[test]
    fn test_simple_formatter() {
        let out = SimpleFormatter.serialize(&tokenize("_a_ ")).unwrap();
        assert_eq!(out, "<italic-open><text:a><italic-close><text: >");
    }

    #[test]
    fn test_text_formatter_drops_escapes() {
        let out = TextFormatter.serialize(&tokenize("\\_a _b_")).unwrap();
        assert_eq!(out, "_a _b_");
    }
}
