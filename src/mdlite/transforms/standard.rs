//! Standard transform definitions
//!
//! Pre-built pipelines, defined as static references using `once_cell::sync::Lazy`.

use crate::mdlite::token::Token;
use crate::mdlite::transforms::stages::{HtmlRendering, Tokenization};
use crate::mdlite::transforms::Transform;
use once_cell::sync::Lazy;

/// Type alias for the tokenization transform
pub type TokenizationTransform = Transform<String, Vec<Token>>;

/// Type alias for the source-to-HTML transform
pub type HtmlTransform = Transform<String, String>;

/// Tokenization: `String` → `Vec<Token>`
pub static TOKENIZATION: Lazy<TokenizationTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then(Tokenization::new()));

/// Full pipeline: `String` → HTML `String` with the default tag table
pub static HTML: Lazy<HtmlTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then_transform(Lazy::force(&TOKENIZATION))
        .then(HtmlRendering::new())
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenization_transform() {
        let tokens = TOKENIZATION.run("a _b_".to_string()).unwrap();
        assert_eq!(tokens.len(), 5);
    }

    #[test]
    fn test_html_transform() {
        let html = HTML.run("__a _b_ c__".to_string()).unwrap();
        assert_eq!(html, "<strong>a <em>b</em> c</strong>");
    }

    #[test]
    fn test_html_transform_empty() {
        assert_eq!(HTML.run(String::new()).unwrap(), "");
    }
}
