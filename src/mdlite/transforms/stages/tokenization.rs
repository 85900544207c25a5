//! Tokenization stage
//!
//! Converts source text into a flat token stream. Never fails.

use crate::mdlite::lexing::tokenize;
use crate::mdlite::token::Token;
use crate::mdlite::transforms::{Runnable, TransformError};

/// Tokenization stage: `String` → `Vec<Token>`
pub struct Tokenization;

impl Tokenization {
    pub fn new() -> Self {
        Tokenization
    }
}

impl Default for Tokenization {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, Vec<Token>> for Tokenization {
    fn run(&self, input: String) -> Result<Vec<Token>, TransformError> {
        Ok(tokenize(&input))
    }
}

// Also implement for &str for convenience
impl Runnable<&str, Vec<Token>> for Tokenization {
    fn run(&self, input: &str) -> Result<Vec<Token>, TransformError> {
        Ok(tokenize(input))
    }
}
