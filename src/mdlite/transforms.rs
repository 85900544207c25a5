//! Transform pipeline infrastructure
//!
//! Processing is split into stages that can be chained as long as their types line up:
//!
//! ```rust,ignore
//! let pipeline = Transform::from_fn(Ok)
//!     .then(Tokenization::new())      // String → Vec<Token>
//!     .then(HtmlRendering::new());    // Vec<Token> → String
//! ```
//!
//! - [`Runnable`] is implemented by each stage (see [`stages`]).
//! - [`Transform`] wraps a stage and provides `.then()` for composition.
//! - [`standard`] holds the pre-built pipelines as `once_cell` statics.

pub mod stages;
pub mod standard;

use crate::mdlite::rendering::RenderError;
use std::fmt;

/// Error that can occur during transformation
#[derive(Debug, Clone, PartialEq)]
pub enum TransformError {
    /// Generic error with message
    Error(String),
    /// Stage failed with specific error
    StageFailed { stage: String, message: String },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::Error(msg) => write!(f, "{}", msg),
            TransformError::StageFailed { stage, message } => {
                write!(f, "Stage '{}' failed: {}", stage, message)
            }
        }
    }
}

impl std::error::Error for TransformError {}

impl From<String> for TransformError {
    fn from(s: String) -> Self {
        TransformError::Error(s)
    }
}

impl From<&str> for TransformError {
    fn from(s: &str) -> Self {
        TransformError::Error(s.to_string())
    }
}

impl From<RenderError> for TransformError {
    fn from(err: RenderError) -> Self {
        TransformError::StageFailed {
            stage: "html-rendering".to_string(),
            message: err.to_string(),
        }
    }
}

/// Trait for anything that can transform an input to an output
pub trait Runnable<I, O> {
    /// Execute this transformation on the input
    fn run(&self, input: I) -> Result<O, TransformError>;
}

/// A composable transformation pipeline from `I` to `O`.
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, TransformError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    /// Create a transform from a function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O, TransformError> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Chain a stage after this transform.
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    /// Chain a pre-built static transform after this one.
    pub fn then_transform<O2>(self, next: &'static Transform<O, O2>) -> Transform<I, O2>
    where
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                next.run(intermediate)
            }),
        }
    }

    /// Execute this transform on the given input
    pub fn run(&self, input: I) -> Result<O, TransformError> {
        (self.run_fn)(input)
    }
}

impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O, TransformError> {
        Transform::run(self, input)
    }
}
