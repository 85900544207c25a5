//! HTML formatter

use super::registry::{FormatError, Formatter};
use crate::mdlite::rendering::HtmlRenderer;
use crate::mdlite::token::Token;

/// Renders the token stream to HTML with its own renderer table.
#[derive(Debug, Clone, Default)]
pub struct HtmlFormatter {
    renderer: HtmlRenderer,
}

impl HtmlFormatter {
    pub fn new(renderer: HtmlRenderer) -> Self {
        HtmlFormatter { renderer }
    }
}

impl Formatter for HtmlFormatter {
    fn name(&self) -> &str {
        "html"
    }

    fn serialize(&self, tokens: &[Token]) -> Result<String, FormatError> {
        Ok(self.renderer.render(tokens)?)
    }

    fn description(&self) -> &str {
        "Rendered HTML"
    }
}
