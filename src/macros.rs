//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler that emits the matched text as one token
//!
//! These macros reduce boilerplate in the rule table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$position` - Line and column of the token's first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Identifier, "pi".to_string(), Position::new(1, 5));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $position:expr) => {
        $crate::lexer::tokens::Token::new($kind, $value, $position)
    };
}

/// Creates a handler that pushes the whole match as a single token of the
/// given kind and advances the cursor past it.
///
/// # Example
///
/// ```ignore
/// RegexPattern::new(Rule::Punctuator, r"^[(){};,]", MK_DEFAULT_HANDLER!(TokenKind::Punctuator))
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer<'_>, matched: &str| -> Result<(), LexError> {
            lexer.push($kind, String::from(matched));
            lexer.advance_n(matched.len());
            Ok(())
        }
    };
}
