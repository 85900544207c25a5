//! Tokenization of mdlite source
//!
//!     Tokenizing is a single left to right pass over the source characters. There is no
//!     backtracking: at each position the scanner looks at most two characters ahead and one
//!     behind, picks the first applicable rule from an ordered table, and emits one token.
//!
//! Rules
//!
//!     The rules are tried in this order (see [rules]):
//!
//!         1. bold-open      `__` with no bold or italic open, followed by non-whitespace
//!         2. bold-close     `__` with bold open, no italic open, preceded by non-whitespace
//!         3. italic-open    `_` with no italic open, followed by non-whitespace
//!         4. italic-close   `_` with italic open, preceded by non-whitespace
//!         5. text           anything else, one character (`\_` yields a literal `_`)
//!
//!     Bold is the outer construct: it can neither open nor close while an italic span is
//!     open. Italic has no such restriction, so `__a _b_ c__` nests italic in bold while in
//!     `_a __b__ c_` the inner underscores come out as text.
//!
//! Demotion
//!
//!     When the input ends, any span still open has its opening token rewritten in place to
//!     a text token with the same delimiter text. The tokenizer is therefore total: every
//!     string produces a token stream, and no stream contains an unmatched open token.

pub mod rules;
pub mod scanner;
pub mod tokenizer;

pub use rules::{OpenSpans, Rule, RULES};
pub use scanner::Scanner;
pub use tokenizer::tokenize;
