//! Source and file processing API
//!
//! Tokenizes mdlite source and serializes the token stream in any format registered with
//! [`FormatRegistry`]. The format name falls back to `output.default_format` from the
//! configuration when none is given.
//!
//! ```rust,ignore
//! use mdlite::mdlite::config::load_defaults;
//! use mdlite::mdlite::processor::process_source;
//!
//! let config = load_defaults()?;
//! let html = process_source("a _b_ c", None, &config)?;
//! let json = process_source("a _b_ c", Some("json"), &config)?;
//! ```

use crate::mdlite::config::MdliteConfig;
use crate::mdlite::formats::{FormatError, FormatRegistry};
use crate::mdlite::transforms::standard::TOKENIZATION;
use std::fmt;
use std::fs;
use std::path::Path;

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    FileNotFound(String),
    InvalidFormat(String),
    IoError(String),
    Format(FormatError),
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::FileNotFound(path) => write!(f, "File not found: {}", path),
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessingError::IoError(msg) => write!(f, "IO error: {}", msg),
            ProcessingError::Format(err) => write!(f, "{}", err),
        }
    }
}

impl From<FormatError> for ProcessingError {
    fn from(err: FormatError) -> Self {
        match err {
            FormatError::FormatNotFound(name) => ProcessingError::InvalidFormat(name),
            other => ProcessingError::Format(other),
        }
    }
}

/// Process mdlite source into `format`, or the configured default format.
pub fn process_source(
    source: &str,
    format: Option<&str>,
    config: &MdliteConfig,
) -> Result<String, ProcessingError> {
    let format = format.unwrap_or(&config.output.default_format);
    log::debug!("processing {} chars as {}", source.chars().count(), format);

    let registry = FormatRegistry::from_config(config);
    if !registry.has(format) {
        return Err(ProcessingError::InvalidFormat(format.to_string()));
    }

    let tokens = TOKENIZATION
        .run(source.to_string())
        .map_err(|e| ProcessingError::IoError(e.to_string()))?;
    Ok(registry.serialize(&tokens, format)?)
}

/// Read an mdlite file and process it like [`process_source`].
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    format: Option<&str>,
    config: &MdliteConfig,
) -> Result<String, ProcessingError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(ProcessingError::FileNotFound(
            file_path.display().to_string(),
        ));
    }

    let content =
        fs::read_to_string(file_path).map_err(|e| ProcessingError::IoError(e.to_string()))?;
    process_source(&content, format, config)
}

/// Get all available format names
pub fn available_formats() -> Vec<String> {
    FormatRegistry::with_defaults().list_formats()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mdlite::config::{load_defaults, Loader};

    #[test]
    fn test_default_format_is_html() {
        let config = load_defaults().unwrap();
        assert_eq!(
            process_source("a __b__", None, &config).unwrap(),
            "a <strong>b</strong>"
        );
    }

    #[test]
    fn test_named_format() {
        let config = load_defaults().unwrap();
        assert_eq!(
            process_source("_a_", Some("simple"), &config).unwrap(),
            "<italic-open><text:a><italic-close>"
        );
    }

    #[test]
    fn test_configured_default_format() {
        let config = Loader::new()
            .set_override("output.default_format", "text")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(process_source("\\_x", None, &config).unwrap(), "_x");
    }

    #[test]
    fn test_invalid_format() {
        let config = load_defaults().unwrap();
        assert_eq!(
            process_source("x", Some("xml"), &config),
            Err(ProcessingError::InvalidFormat("xml".to_string()))
        );
    }

    #[test]
    fn test_missing_file() {
        let config = load_defaults().unwrap();
        let result = process_file("no/such/file.md", None, &config);
        assert!(matches!(result, Err(ProcessingError::FileNotFound(_))));
    }

    #[test]
    fn test_available_formats() {
        let formats = available_formats();
        assert!(formats.contains(&"html".to_string()));
        assert!(formats.contains(&"json".to_string()));
    }
}
