//! Converting token streams back to text
//!
//! Two renditions are provided here, neither of which is HTML:
//!
//! - [`detokenize`] concatenates token text, giving back the scanned source. Escape
//!   backslashes are not part of any token, so `\_` comes back as `_`.
//! - [`ToSimpleString`] gives a one-line debug dump (`<bold-open><text:a>...`), handy in
//!   snapshots.

use super::core::Token;

/// Trait for converting a token to its debug dump representation
pub trait ToSimpleString {
    fn to_simple_string(&self) -> String;
}

impl ToSimpleString for Token {
    fn to_simple_string(&self) -> String {
        self.to_string()
    }
}

impl ToSimpleString for [Token] {
    fn to_simple_string(&self) -> String {
        self.iter().map(ToSimpleString::to_simple_string).collect()
    }
}

/// Detokenize a stream of tokens into a string
///
/// The result is the input of the tokenizer with each `\_` escape replaced by `_`.
pub fn detokenize(tokens: &[Token]) -> String {
    let mut result = String::new();
    for token in tokens {
        result.push_str(token.as_str());
    }
    result
}
