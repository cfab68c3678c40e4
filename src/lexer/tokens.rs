use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display, ops::Deref};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("if");
        set.insert("else");
        set.insert("for");
        set.insert("func");
        set.insert("class");
        set.insert("let");
        set.insert("return");
        set.insert("new");
        set
    };
}

pub fn is_keyword(word: &str) -> bool {
    RESERVED_LOOKUP.contains(word)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Identifier,
    FloatLiteral,
    Operator,
    Keyword,
    Punctuator,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A classified lexeme. Fields are private so a token cannot change after the
/// scanner hands it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    value: String,
    position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, value: String, position: Position) -> Self {
        Token {
            kind,
            value,
            position,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The lexeme text. Integer literals carry their normalized `.0` form.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_eof() {
            write!(f, "{} @ {}", self.kind, self.position)
        } else {
            write!(f, "{}({}) @ {}", self.kind, self.value, self.position)
        }
    }
}

/// The tokens produced by one scan, always terminated by a single EOF token.
///
/// Derefs to `[Token]` for read access; there is no way to push, remove or
/// edit tokens once the stream exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        debug_assert!(
            tokens.last().is_some_and(Token::is_eof),
            "token stream must end with EOF"
        );
        TokenStream { tokens }
    }

    pub fn eof(&self) -> &Token {
        &self.tokens[self.tokens.len() - 1]
    }

    /// Every token except the trailing EOF marker.
    pub fn significant(&self) -> &[Token] {
        &self.tokens[..self.tokens.len() - 1]
    }

    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }
}

impl Deref for TokenStream {
    type Target = [Token];

    fn deref(&self) -> &Self::Target {
        &self.tokens
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
