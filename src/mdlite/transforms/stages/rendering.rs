//! HTML rendering stage

use crate::mdlite::rendering::HtmlRenderer;
use crate::mdlite::token::Token;
use crate::mdlite::transforms::{Runnable, TransformError};

/// Rendering stage: `Vec<Token>` → `String`
///
/// Fails with [`TransformError::StageFailed`] when the renderer's table lacks a kind.
#[derive(Default)]
pub struct HtmlRendering {
    renderer: HtmlRenderer,
}

impl HtmlRendering {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_renderer(renderer: HtmlRenderer) -> Self {
        HtmlRendering { renderer }
    }
}

impl Runnable<Vec<Token>, String> for HtmlRendering {
    fn run(&self, input: Vec<Token>) -> Result<String, TransformError> {
        Ok(self.renderer.render(&input)?)
    }
}
