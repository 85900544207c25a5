//! Token kind → HTML markup table

use crate::mdlite::config::HtmlConfig;
use crate::mdlite::token::{Token, TokenKind};
use std::collections::HashMap;
use std::fmt;

/// Error that can occur during rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A token kind with no entry in the renderer's table
    UnrecognizedTokenKind(TokenKind),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::UnrecognizedTokenKind(kind) => {
                write!(f, "Unrecognized token kind: {}", kind)
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// What a token kind renders to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Markup {
    /// A fixed string, e.g. `<em>`
    Fixed(String),
    /// The token's own source text
    SourceText,
}

/// Lookup-table HTML renderer.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    table: HashMap<TokenKind, Markup>,
}

impl HtmlRenderer {
    /// A renderer using `strong` and `emphasis` as element names for bold and italic
    /// spans, e.g. `with_tags("b", "i")`.
    pub fn with_tags(strong: &str, emphasis: &str) -> Self {
        let table = HashMap::from([
            (TokenKind::BoldOpen, Markup::Fixed(format!("<{}>", strong))),
            (TokenKind::BoldClose, Markup::Fixed(format!("</{}>", strong))),
            (TokenKind::ItalicOpen, Markup::Fixed(format!("<{}>", emphasis))),
            (TokenKind::ItalicClose, Markup::Fixed(format!("</{}>", emphasis))),
            (TokenKind::Text, Markup::SourceText),
        ]);
        HtmlRenderer { table }
    }

    pub fn from_config(config: &HtmlConfig) -> Self {
        Self::with_tags(&config.strong_tag, &config.emphasis_tag)
    }

    /// Replace the markup for one kind.
    pub fn with_markup(mut self, kind: TokenKind, markup: Markup) -> Self {
        self.table.insert(kind, markup);
        self
    }

    /// Remove the entry for one kind; rendering such a token then fails.
    pub fn without(mut self, kind: TokenKind) -> Self {
        self.table.remove(&kind);
        self
    }

    pub fn markup_for(&self, kind: TokenKind) -> Option<&Markup> {
        self.table.get(&kind)
    }

    /// Render a token stream, failing on the first kind missing from the table.
    pub fn render(&self, tokens: &[Token]) -> Result<String, RenderError> {
        let mut html = String::with_capacity(tokens.len());
        for token in tokens {
            match self.markup_for(token.kind()) {
                Some(Markup::Fixed(markup)) => html.push_str(markup),
                Some(Markup::SourceText) => html.push_str(token.as_str()),
                None => return Err(RenderError::UnrecognizedTokenKind(token.kind())),
            }
        }
        Ok(html)
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::with_tags("strong", "em")
    }
}
