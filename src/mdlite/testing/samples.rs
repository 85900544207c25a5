//! Sample corpus loader.
//!
//! Samples live in `docs/samples/` relative to the crate root. File names carry a number
//! prefix and a hint, `NNN-hint.md`, and each source has an `NNN-hint.html` sibling with the
//! expected rendering. Numbers must be unique.

use crate::mdlite::lexing::tokenize;
use crate::mdlite::rendering::{render, RenderError};
use crate::mdlite::token::Token;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const SAMPLES_ROOT: &str = "docs/samples";

static SAMPLE_FILE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<number>\d+)-(?P<hint>[A-Za-z0-9-]+)\.md$").unwrap());

#[derive(Debug, Clone, PartialEq)]
pub enum SampleError {
    FileNotFound(String),
    IoError(String),
    DuplicateNumber(String),
}

impl std::fmt::Display for SampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SampleError::FileNotFound(msg) => write!(f, "File not found: {}", msg),
            SampleError::IoError(msg) => write!(f, "IO error: {}", msg),
            SampleError::DuplicateNumber(msg) => write!(f, "Duplicate number: {}", msg),
        }
    }
}

impl std::error::Error for SampleError {}

impl From<std::io::Error> for SampleError {
    fn from(err: std::io::Error) -> Self {
        SampleError::IoError(err.to_string())
    }
}

/// One source/expected pair from the corpus.
#[derive(Debug, Clone)]
pub struct Sample {
    number: usize,
    hint: String,
    source: String,
    expected_html: String,
}

impl Sample {
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// `NNN-hint`, for assertion messages.
    pub fn name(&self) -> String {
        format!("{:03}-{}", self.number, self.hint)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn expected_html(&self) -> &str {
        &self.expected_html
    }

    pub fn tokenize(&self) -> Vec<Token> {
        tokenize(&self.source)
    }

    pub fn render(&self) -> Result<String, RenderError> {
        render(&self.tokenize())
    }
}

/// Entry point to the sample corpus.
pub struct Samples;

impl Samples {
    /// The corpus directory.
    pub fn root() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join(SAMPLES_ROOT)
    }

    /// Sample numbers present in the corpus, ascending.
    pub fn numbers() -> Result<Vec<usize>, SampleError> {
        Ok(list_sources_by_number(&Self::root())?.into_keys().collect())
    }

    /// Load one sample by number.
    pub fn get(number: usize) -> Result<Sample, SampleError> {
        let sources = list_sources_by_number(&Self::root())?;
        let path = sources.get(&number).ok_or_else(|| {
            SampleError::FileNotFound(format!("No sample with number {} found", number))
        })?;
        load_sample(number, path)
    }

    /// Load every sample, ordered by number.
    pub fn all() -> Result<Vec<Sample>, SampleError> {
        list_sources_by_number(&Self::root())?
            .iter()
            .map(|(number, path)| load_sample(*number, path))
            .collect()
    }
}

/// Map sample numbers to their `.md` source paths.
fn list_sources_by_number(dir: &Path) -> Result<BTreeMap<usize, PathBuf>, SampleError> {
    let mut number_map = BTreeMap::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(captures) = SAMPLE_FILE_NAME.captures(file_name) else {
            continue;
        };
        let Ok(number) = captures["number"].parse::<usize>() else {
            continue;
        };
        if let Some(existing) = number_map.insert(number, path.clone()) {
            return Err(SampleError::DuplicateNumber(format!(
                "{} used by {} and {}",
                number,
                existing.display(),
                path.display()
            )));
        }
    }

    Ok(number_map)
}

fn load_sample(number: usize, source_path: &Path) -> Result<Sample, SampleError> {
    let expected_path = source_path.with_extension("html");
    if !expected_path.exists() {
        return Err(SampleError::FileNotFound(expected_path.display().to_string()));
    }

    let hint = source_path
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| SAMPLE_FILE_NAME.captures(n))
        .map(|c| c["hint"].to_string())
        .unwrap_or_default();

    Ok(Sample {
        number,
        hint,
        source: fs::read_to_string(source_path)?,
        expected_html: fs::read_to_string(&expected_path)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_pattern() {
        let captures = SAMPLE_FILE_NAME.captures("012-italic-in-bold.md").unwrap();
        assert_eq!(&captures["number"], "012");
        assert_eq!(&captures["hint"], "italic-in-bold");
        assert!(SAMPLE_FILE_NAME.captures("012-italic.html").is_none());
        assert!(SAMPLE_FILE_NAME.captures("notes.md").is_none());
    }

    #[test]
    fn test_numbers_are_sorted() {
        let numbers = Samples::numbers().unwrap();
        assert!(!numbers.is_empty());
        assert!(numbers.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_get_sample() {
        let sample = Samples::get(1).unwrap();
        assert_eq!(sample.hint(), "italic");
        assert_eq!(sample.name(), "001-italic");
        assert!(sample.source().contains("_italic_"));
    }

    #[test]
    fn test_missing_sample() {
        assert!(matches!(
            Samples::get(999),
            Err(SampleError::FileNotFound(_))
        ));
    }
}
