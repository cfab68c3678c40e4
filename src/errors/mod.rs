//! Error types for the scanner.
//!
//! A scan fails on the first problem it meets. This module defines:
//!
//! - `LexError`, the failure returned by a scan, carrying its line and column
//! - `ErrorImpl`, the two failure kinds (unterminated comment, unexpected character)
//! - `ErrorTip`, an optional hint shown alongside the rendered diagnostic

pub mod errors;
