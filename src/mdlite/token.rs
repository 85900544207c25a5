//! Core token types and helpers shared across the tokenizer, renderer, and tooling.
//!
//!     The token stream is flat: emphasis spans are not nested nodes but pairs of open/close
//!     tokens with text tokens between them. Every token carries the exact source text it
//!     consumed, so the stream can be turned back into text (see [formatting]) as well as
//!     into HTML (see [rendering](crate::mdlite::rendering)).
//!
//! Token Kinds
//!
//!         - BoldOpen / BoldClose: `__`
//!         - ItalicOpen / ItalicClose: `_`
//!         - Text: a single character
//!
//!     Delimiters that never find their counterpart are demoted to Text by the tokenizer
//!     before the stream is handed out, so consumers never see a dangling open token.

pub mod core;
pub mod formatting;

pub use self::core::{Token, TokenKind};
pub use formatting::{detokenize, ToSimpleString};
