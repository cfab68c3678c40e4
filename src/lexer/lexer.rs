use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    errors::errors::{ErrorImpl, LexError},
    Position, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::{
    config::ScanConfig,
    tokens::{is_keyword, Token, TokenKind, TokenStream},
};

pub(crate) type RegexHandler = fn(&mut Lexer<'_>, &str) -> Result<(), LexError>;

const OPERATOR_PATTERN: &str = r"^[+\-*/=<>!.]";
const COMPOUND_OPERATOR_PATTERN: &str = r"^(?:==|!=|<=|>=|[+\-*/=<>!.])";

lazy_static! {
    static ref DEFAULT_PATTERNS: Vec<RegexPattern> = build_patterns(OPERATOR_PATTERN);
    static ref COMPOUND_PATTERNS: Vec<RegexPattern> = build_patterns(COMPOUND_OPERATOR_PATTERN);
}

/// The classification rules, in the order they are tried at each cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Whitespace,
    LineComment,
    BlockComment,
    DottedFloat,
    IntegerFloat,
    Word,
    Operator,
    Punctuator,
}

impl Rule {
    /// First match wins. `DottedFloat` must precede `IntegerFloat`, and both
    /// comment rules must precede `Operator` so `/` is only an operator when
    /// it does not open a comment.
    pub const PRIORITY: [Rule; 8] = [
        Rule::Whitespace,
        Rule::LineComment,
        Rule::BlockComment,
        Rule::DottedFloat,
        Rule::IntegerFloat,
        Rule::Word,
        Rule::Operator,
        Rule::Punctuator,
    ];
}

#[derive(Clone)]
pub struct RegexPattern {
    rule: Rule,
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(rule: Rule, pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            rule,
            regex: Regex::new(pattern).expect("built-in scanner pattern must compile"),
            handler,
        }
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

// Every pattern is anchored, so a match is always at the cursor.
fn build_patterns(operator: &str) -> Vec<RegexPattern> {
    vec![
        RegexPattern::new(Rule::Whitespace, r"^[ \t]+", skip_handler),
        RegexPattern::new(Rule::LineComment, r"^//", line_comment_handler),
        RegexPattern::new(Rule::BlockComment, r"^/\*", block_comment_handler),
        RegexPattern::new(Rule::DottedFloat, r"^[0-9]+\.[0-9]+", float_handler),
        RegexPattern::new(Rule::IntegerFloat, r"^[0-9]+", integer_handler),
        RegexPattern::new(Rule::Word, r"^[A-Za-z_][A-Za-z0-9_]*", symbol_handler),
        RegexPattern::new(Rule::Operator, operator, MK_DEFAULT_HANDLER!(TokenKind::Operator)),
        RegexPattern::new(Rule::Punctuator, r"^[(){};,]", MK_DEFAULT_HANDLER!(TokenKind::Punctuator)),
    ]
}

/// The rule table used for `config`, in priority order.
pub fn patterns(config: &ScanConfig) -> &'static [RegexPattern] {
    if config.compound_operators {
        &COMPOUND_PATTERNS
    } else {
        &DEFAULT_PATTERNS
    }
}

/// Returns the rule that would fire at the start of `text`, or `None` when
/// the first character is unrecognised. Only the opening marker of a block
/// comment is inspected, so an unterminated comment still classifies as
/// `Rule::BlockComment`.
pub fn classify(text: &str, config: &ScanConfig) -> Option<Rule> {
    patterns(config)
        .iter()
        .find(|pattern| pattern.regex.is_match(text))
        .map(RegexPattern::rule)
}

/// Cursor state for one scan. Lines are fed in one at a time and the column
/// restarts at 1 for each; nothing but the emitted tokens carries over.
pub(crate) struct Lexer<'a> {
    patterns: &'static [RegexPattern],
    tokens: Vec<Token>,
    line: &'a str,
    line_number: usize,
    pos: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(config: &ScanConfig) -> Lexer<'a> {
        Lexer {
            patterns: patterns(config),
            tokens: vec![],
            line: "",
            line_number: 1,
            pos: 0,
            column: 1,
        }
    }

    fn start_line(&mut self, line: &'a str, line_number: usize) {
        self.line = line;
        self.line_number = line_number;
        self.pos = 0;
        self.column = 1;
    }

    /// Moves the cursor forward by `n` bytes of the current line.
    pub(crate) fn advance_n(&mut self, n: usize) {
        let end = self.pos + n;
        self.column += self.line[self.pos..end].chars().count();
        self.pos = end;
    }

    pub(crate) fn skip_line(&mut self) {
        self.advance_n(self.line.len() - self.pos);
    }

    pub(crate) fn push(&mut self, kind: TokenKind, value: String) {
        let token = MK_TOKEN!(kind, value, self.position());
        trace!(%token, "emit");
        self.tokens.push(token);
    }

    pub(crate) fn position(&self) -> Position {
        Position::new(self.line_number, self.column)
    }

    pub(crate) fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub(crate) fn remainder(&self) -> &'a str {
        &self.line[self.pos..]
    }

    fn scan_line(&mut self) -> Result<(), LexError> {
        while let Some(character) = self.at() {
            let remaining = self.remainder();
            let hit = self.patterns.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(remaining)
                    .map(|found| (pattern.handler, found.as_str()))
            });

            match hit {
                Some((handler, matched)) => handler(self, matched)?,
                None => {
                    return Err(LexError::new(
                        ErrorImpl::UnexpectedCharacter { character },
                        self.position(),
                    ))
                }
            }
        }

        Ok(())
    }
}

fn skip_handler(lexer: &mut Lexer<'_>, matched: &str) -> Result<(), LexError> {
    lexer.advance_n(matched.len());
    Ok(())
}

fn line_comment_handler(lexer: &mut Lexer<'_>, _matched: &str) -> Result<(), LexError> {
    lexer.skip_line();
    Ok(())
}

// The closing marker is searched for from the opener itself, on this line
// only, so the `*` of `/*` can also close it: `/*/` is a whole comment.
fn block_comment_handler(lexer: &mut Lexer<'_>, _opener: &str) -> Result<(), LexError> {
    match lexer.remainder().find("*/") {
        Some(end) => {
            lexer.advance_n(end + 2);
            Ok(())
        }
        None => Err(LexError::new(
            ErrorImpl::UnterminatedComment,
            lexer.position(),
        )),
    }
}

fn float_handler(lexer: &mut Lexer<'_>, matched: &str) -> Result<(), LexError> {
    lexer.push(TokenKind::FloatLiteral, String::from(matched));
    lexer.advance_n(matched.len());
    Ok(())
}

fn integer_handler(lexer: &mut Lexer<'_>, digits: &str) -> Result<(), LexError> {
    lexer.push(TokenKind::FloatLiteral, format!("{}.0", digits));
    lexer.advance_n(digits.len());
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer<'_>, word: &str) -> Result<(), LexError> {
    let kind = if is_keyword(word) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    };

    lexer.push(kind, String::from(word));
    lexer.advance_n(word.len());
    Ok(())
}

/// Scans `source` with the base grammar.
pub fn scan(source: &str) -> Result<TokenStream, LexError> {
    scan_with(source, &ScanConfig::default())
}

/// Scans `source` line by line. The first failure aborts the whole scan and
/// no tokens are returned with it.
///
/// This is the only way to drive a scan; the cursor type behind it is not
/// reachable from outside the crate:
///
/// ```compile_fail
/// let config = scanner::ScanConfig::default();
/// let _lexer = scanner::lexer::lexer::Lexer::new(&config);
/// ```
pub fn scan_with(source: &str, config: &ScanConfig) -> Result<TokenStream, LexError> {
    let mut lex = Lexer::new(config);
    let mut line_count = 0;

    debug!(
        bytes = source.len(),
        compound_operators = config.compound_operators,
        "scanning source"
    );

    for (index, line) in source.split('\n').enumerate() {
        lex.start_line(line, index + 1);

        if let Err(error) = lex.scan_line() {
            debug!(%error, "scan aborted");
            return Err(error);
        }

        line_count = index + 1;
    }

    lex.start_line("", line_count + 1);
    lex.push(TokenKind::EOF, String::new());

    debug!(lines = line_count, tokens = lex.tokens.len(), "scan finished");
    Ok(TokenStream::new(lex.tokens))
}
