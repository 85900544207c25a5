//! Format registry for token stream serialization
//!
//! Each format implements the `Formatter` trait and can be registered with `FormatRegistry`.

use crate::mdlite::config::MdliteConfig;
use crate::mdlite::rendering::{HtmlRenderer, RenderError};
use crate::mdlite::token::Token;
use std::collections::HashMap;
use std::fmt;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during serialization
    SerializationError(String),
    /// The HTML renderer rejected a token
    Render(RenderError),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            FormatError::Render(err) => write!(f, "Render error: {err}"),
        }
    }
}

impl std::error::Error for FormatError {}

impl From<RenderError> for FormatError {
    fn from(err: RenderError) -> Self {
        FormatError::Render(err)
    }
}

/// Trait for token stream formatters
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "html", "json")
    fn name(&self) -> &str;

    /// Serialize a token stream to this format
    fn serialize(&self, tokens: &[Token]) -> Result<String, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// Registry of token stream formatters, keyed by name.
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter, replacing any formatter with the same name.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    /// Get a formatter by name
    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize tokens using the specified format
    pub fn serialize(&self, tokens: &[Token], format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(tokens)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with default formatters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(super::HtmlFormatter::default());
        registry.register(super::JsonFormatter::default());
        registry.register(super::YamlFormatter);
        registry.register(super::SimpleFormatter);
        registry.register(super::TextFormatter);

        registry
    }

    /// Create a registry with default formatters tuned by `config`.
    pub fn from_config(config: &MdliteConfig) -> Self {
        let mut registry = Self::with_defaults();
        registry.register(super::HtmlFormatter::new(HtmlRenderer::from_config(
            &config.html,
        )));
        registry.register(super::JsonFormatter::new(config.output.pretty_json));
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
