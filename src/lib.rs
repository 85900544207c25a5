//! # mdlite
//!
//! A tokenizer and HTML renderer for a small underscore-emphasis markup.
//!
//! The dialect knows three things: `_italic_` spans, `__bold__` spans, and `\_` to write a
//! literal underscore. Everything else is text and is passed through untouched.
//!
//! Processing happens in two steps:
//!
//!     source ──tokenize──▶ Vec<Token> ──render──▶ HTML
//!
//! Tokenizing is a single left to right scan; see the [lexing module](mdlite::lexing) for the
//! delimiter rules. Rendering is a lookup table from token kind to markup, see
//! [rendering](mdlite::rendering).
//!
//! For testing guidelines and the sample corpus, see the [testing module](mdlite::testing).

pub mod mdlite;

pub use mdlite::lexing::tokenize;
pub use mdlite::rendering::{render, render_to_html, RenderError};
pub use mdlite::token::{Token, TokenKind};
