//! Individual transformation stages
//!
//! Each stage implements the `Runnable` trait.

pub mod rendering;
pub mod tokenization;

pub use rendering::HtmlRendering;
pub use tokenization::Tokenization;
