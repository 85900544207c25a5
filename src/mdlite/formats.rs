//! Output format implementations for token streams
//!
//! - `html`: rendered markup (see [rendering](crate::mdlite::rendering))
//! - `json`, `yaml`: the serialized token stream
//! - `simple`: one-line token dump, `<bold-open><text:a>...`
//! - `text`: the detokenized source

pub mod html;
pub mod registry;
pub mod serialized;
pub mod text;

pub use html::HtmlFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use serialized::{JsonFormatter, YamlFormatter};
pub use text::{SimpleFormatter, TextFormatter};
