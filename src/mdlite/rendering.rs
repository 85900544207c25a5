//! HTML rendering of token streams
//!
//!     Rendering is a lookup: every token kind maps to a fixed piece of markup, except text,
//!     which maps to the token's own text. The pieces are concatenated in token order. No
//!     escaping is applied to text.
//!
//!     The table lives in [`HtmlRenderer`]. A token whose kind has no entry is an error
//!     ([`RenderError::UnrecognizedTokenKind`]) rather than being skipped. The default table
//!     covers every kind, so [`render`] and [`render_to_html`] only fail if that invariant is
//!     broken.

pub mod html;

pub use html::{HtmlRenderer, Markup, RenderError};

use crate::mdlite::lexing::tokenize;
use crate::mdlite::token::Token;
use once_cell::sync::Lazy;

static DEFAULT_RENDERER: Lazy<HtmlRenderer> = Lazy::new(HtmlRenderer::default);

/// Render tokens with the default `<strong>`/`<em>` table.
pub fn render(tokens: &[Token]) -> Result<String, RenderError> {
    DEFAULT_RENDERER.render(tokens)
}

/// Tokenize `markdown` and render the result as HTML.
pub fn render_to_html(markdown: &str) -> Result<String, RenderError> {
    render(&tokenize(markdown))
}
