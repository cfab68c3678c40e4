//! Lexical analysis module.
//!
//! This module contains the scanner that converts source text into a stream
//! of tokens for a parser. It handles:
//!
//! - Tokenization using an ordered table of anchored regex patterns
//! - Recognition of keywords, identifiers, float literals, operators and punctuators
//! - Normalization of integer literals to float form (`5` becomes `5.0`)
//! - Line and column tracking for every token
//! - Line comments and single-line block comments

pub mod config;
pub mod lexer;
pub mod tokens;
