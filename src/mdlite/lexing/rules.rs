//! Ordered rule table for the tokenizer
//!
//! Each [`Rule`] is a guard over the scanner and the currently open spans, plus the token
//! kind it emits. [`RULES`] lists them in priority order; the tokenizer fires the first
//! rule whose guard holds. The last rule (text) always applies.

use super::scanner::Scanner;
use crate::mdlite::token::core::{BOLD_DELIMITER, ITALIC_DELIMITER};
use crate::mdlite::token::TokenKind;

/// Escape sequence for a literal underscore
pub const ESCAPED_UNDERSCORE: &str = "\\_";

/// Indices of the still-open bold and italic tokens in the output stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpenSpans {
    bold: Option<usize>,
    italic: Option<usize>,
}

impl OpenSpans {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bold(&self) -> Option<usize> {
        self.bold
    }

    pub fn italic(&self) -> Option<usize> {
        self.italic
    }

    pub fn is_bold_open(&self) -> bool {
        self.bold.is_some()
    }

    pub fn is_italic_open(&self) -> bool {
        self.italic.is_some()
    }

    /// Update the open spans after a delimiter token of `kind` was pushed at `index`.
    pub fn record(&mut self, kind: TokenKind, index: usize) {
        match kind {
            TokenKind::BoldOpen => self.bold = Some(index),
            TokenKind::BoldClose => self.bold = None,
            TokenKind::ItalicOpen => self.italic = Some(index),
            TokenKind::ItalicClose => self.italic = None,
            TokenKind::Text => {}
        }
    }
}

/// A guarded tokenizer rule.
pub struct Rule {
    name: &'static str,
    emits: TokenKind,
    delimiter: Option<&'static str>,
    guard: fn(&Scanner, &OpenSpans) -> bool,
}

impl Rule {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Kind of the token this rule emits.
    pub fn emits(&self) -> TokenKind {
        self.emits
    }

    /// Delimiter consumed by this rule, `None` for the text rule.
    pub fn delimiter(&self) -> Option<&'static str> {
        self.delimiter
    }

    /// Whether this rule can fire at the scanner's current position.
    pub fn applies(&self, scanner: &Scanner, spans: &OpenSpans) -> bool {
        let delimiter_matches = self.delimiter.map_or(true, |d| scanner.next_is(d));
        delimiter_matches && (self.guard)(scanner, spans)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("emits", &self.emits)
            .field("delimiter", &self.delimiter)
            .finish()
    }
}

/// Tokenizer rules in priority order.
pub static RULES: [Rule; 5] = [
    Rule {
        name: "bold-open",
        emits: TokenKind::BoldOpen,
        delimiter: Some(BOLD_DELIMITER),
        guard: bold_can_open,
    },
    Rule {
        name: "bold-close",
        emits: TokenKind::BoldClose,
        delimiter: Some(BOLD_DELIMITER),
        guard: bold_can_close,
    },
    Rule {
        name: "italic-open",
        emits: TokenKind::ItalicOpen,
        delimiter: Some(ITALIC_DELIMITER),
        guard: italic_can_open,
    },
    Rule {
        name: "italic-close",
        emits: TokenKind::ItalicClose,
        delimiter: Some(ITALIC_DELIMITER),
        guard: italic_can_close,
    },
    Rule {
        name: "text",
        emits: TokenKind::Text,
        delimiter: None,
        guard: always,
    },
];

/// First rule in [`RULES`] that applies.
pub fn select(scanner: &Scanner, spans: &OpenSpans) -> &'static Rule {
    RULES
        .iter()
        .find(|rule| rule.applies(scanner, spans))
        .unwrap_or(&RULES[RULES.len() - 1])
}

fn bold_can_open(scanner: &Scanner, spans: &OpenSpans) -> bool {
    !spans.is_italic_open()
        && !spans.is_bold_open()
        && is_defined_and_not_whitespace(scanner.peek_at(BOLD_DELIMITER.len() as isize))
}

fn bold_can_close(scanner: &Scanner, spans: &OpenSpans) -> bool {
    spans.is_bold_open()
        && !spans.is_italic_open()
        && is_defined_and_not_whitespace(scanner.peek_at(-1))
}

fn italic_can_open(scanner: &Scanner, spans: &OpenSpans) -> bool {
    !spans.is_italic_open()
        && is_defined_and_not_whitespace(scanner.peek_at(ITALIC_DELIMITER.len() as isize))
}

fn italic_can_close(scanner: &Scanner, spans: &OpenSpans) -> bool {
    spans.is_italic_open() && is_defined_and_not_whitespace(scanner.peek_at(-1))
}

fn always(_: &Scanner, _: &OpenSpans) -> bool {
    true
}

fn is_defined_and_not_whitespace(ch: Option<char>) -> bool {
    matches!(ch, Some(c) if !c.is_whitespace())
}
