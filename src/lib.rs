#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::ErrorTip;

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

pub use errors::errors::{ErrorImpl, LexError};
pub use lexer::{
    config::ScanConfig,
    lexer::{scan, scan_with},
    tokens::{Token, TokenKind, TokenStream},
};

/// A 1-based line and column. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Returns the text of the 1-based `line` of `source`, split on `\n` the same
/// way the scanner splits it.
pub fn get_line_at_position(source: &str, line: usize) -> Option<&str> {
    source.split('\n').nth(line.checked_sub(1)?)
}

/// Renders `error` as a caret diagnostic against the line it points at:
///
/// ```text
/// Error: UnexpectedCharacter
/// -> main.lang
///   |
/// 1 | let x = 3.14; @
///   | ---------------^
/// ```
pub fn format_error(error: &LexError, source: &str, file: &str) -> String {
    let position = error.get_position();
    let line_text = get_line_at_position(source, position.line).unwrap_or("");

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let mut rendered = String::new();

    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        rendered.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    rendered.push_str(&format!("-> {}\n", file));
    rendered.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    rendered.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = position.column.saturating_sub(removed_whitespace).max(1);

    rendered.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    rendered
}

pub fn display_error(error: &LexError, source: &str, file: &str) {
    eprint!("{}", format_error(error, source, file));
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (&string[start..], start)
}
