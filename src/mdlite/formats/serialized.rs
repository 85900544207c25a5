//! JSON and YAML dumps of the token stream

use super::registry::{FormatError, Formatter};
use crate::mdlite::token::Token;

/// Token stream as a JSON array of `{"kind", "text"}` objects.
#[derive(Debug, Clone)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        JsonFormatter { pretty }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, tokens: &[Token]) -> Result<String, FormatError> {
        let result = if self.pretty {
            serde_json::to_string_pretty(tokens)
        } else {
            serde_json::to_string(tokens)
        };
        result.map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Token stream as JSON"
    }
}

/// Token stream as a YAML sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, tokens: &[Token]) -> Result<String, FormatError> {
        serde_yaml::to_string(tokens).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Token stream as YAML"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mdlite::token::TokenKind;

    fn tokens() -> Vec<Token> {
        vec![Token::bold_open(), Token::text('a'), Token::bold_close()]
    }

    #[test]
    fn test_compact_json() {
        let json = JsonFormatter::new(false).serialize(&tokens()).unwrap();
        assert_eq!(
            json,
            r#"[{"kind":"bold-open","text":"__"},{"kind":"text","text":"a"},{"kind":"bold-close","text":"__"}]"#
        );
    }

    #[test]
    fn test_pretty_json_parses_back() {
        let json = JsonFormatter::default().serialize(&tokens()).unwrap();
        assert!(json.contains('\n'));
        let back: Vec<Token> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tokens());
    }

    #[test]
    fn test_yaml() {
        let yaml = YamlFormatter.serialize(&tokens()).unwrap();
        assert!(yaml.contains("kind: bold-open"));
        let back: Vec<Token> = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back[1].kind(), TokenKind::Text);
    }
}
