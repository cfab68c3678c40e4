use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error} at line {}, column {}", .position.line, .position.column)]
pub struct LexError {
    internal_error: ErrorImpl,
    position: Position,
}

impl LexError {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        LexError {
            internal_error: error_impl,
            position,
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedComment => ErrorTip::Suggestion(String::from(
                "Block comments must close on the line they open, use `//` for each line instead",
            )),
            ErrorImpl::UnexpectedCharacter { character: '\r' } => ErrorTip::Suggestion(
                String::from("Carriage return found, convert the file to LF line endings"),
            ),
            ErrorImpl::UnexpectedCharacter { character } if !character.is_ascii() => {
                ErrorTip::Suggestion(format!(
                    "`{}` is not ASCII, only ASCII identifiers and numbers are recognised",
                    character
                ))
            }
            ErrorImpl::UnexpectedCharacter { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("unexpected character '{character}'")]
    UnexpectedCharacter { character: char },
}
