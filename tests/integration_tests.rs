//! Integration tests for end-to-end scanning.
//!
//! These tests drive the public API the way a parser would: scan a whole
//! program, then walk the resulting stream.

use scanner::{
    format_error, scan, scan_with, ErrorImpl, Position, ScanConfig, Token, TokenKind,
};

const PROGRAM: &str = "\
let pi = 3.14;
let radius = 2;
let area = pi * radius * radius; // area of the circle

if (area > 10.0) {
\tprint(area);
}

/* helpers */ func circleArea(r) {
\treturn pi * r * r;
}

class Circle {
\tlet r;
\tfunc getArea() { return 3.14 * this.r * this.r; }
}

let c = new Circle(5);
let circle_area = c.getArea();
";

fn find<'a>(tokens: &'a [Token], value: &str) -> &'a Token {
    tokens
        .iter()
        .find(|t| t.value() == value)
        .unwrap_or_else(|| panic!("no token {:?}", value))
}

#[test]
fn test_scan_program() {
    let tokens = scan(PROGRAM).unwrap();

    assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
    assert_eq!(tokens.eof().position(), Position::new(21, 1));

    let keywords: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind() == TokenKind::Keyword)
        .map(Token::value)
        .collect();
    assert_eq!(
        keywords,
        [
            "let", "let", "let", "if", "func", "return", "class", "let", "func", "return",
            "let", "new", "let"
        ]
    );

    assert!(tokens.iter().all(|t| !t.value().contains("helpers")));
}

#[test]
fn test_scan_program_positions() {
    let tokens = scan(PROGRAM).unwrap();

    let radius = find(&tokens, "2.0");
    assert_eq!(radius.kind(), TokenKind::FloatLiteral);
    assert_eq!(radius.position(), Position::new(2, 14));

    let print = find(&tokens, "print");
    assert_eq!(print.position(), Position::new(6, 2));

    let circle_area = find(&tokens, "circleArea");
    assert_eq!(circle_area.position(), Position::new(9, 20));

    let five = find(&tokens, "5.0");
    assert_eq!(five.position(), Position::new(18, 20));

    for pair in tokens.windows(2) {
        assert!(pair[0].position() < pair[1].position());
    }
}

#[test]
fn test_scan_program_member_access() {
    let tokens = scan(PROGRAM).unwrap();
    let last_line: Vec<(TokenKind, &str)> = tokens
        .iter()
        .filter(|t| t.line() == 19)
        .map(|t| (t.kind(), t.value()))
        .collect();

    assert_eq!(
        last_line,
        [
            (TokenKind::Keyword, "let"),
            (TokenKind::Identifier, "circle_area"),
            (TokenKind::Operator, "="),
            (TokenKind::Identifier, "c"),
            (TokenKind::Operator, "."),
            (TokenKind::Identifier, "getArea"),
            (TokenKind::Punctuator, "("),
            (TokenKind::Punctuator, ")"),
            (TokenKind::Punctuator, ";"),
        ]
    );
}

#[test]
fn test_scan_program_with_multiline_comment_fails() {
    let source = format!("{}/*\nThis is a\nmulti-line comment.\n*/\n", PROGRAM);
    let error = scan(&source).unwrap_err();

    assert_eq!(error.kind(), &ErrorImpl::UnterminatedComment);
    assert_eq!(error.get_position(), &Position::new(20, 1));
}

#[test]
fn test_compound_operators_only_change_operators() {
    let source = "if (a >= 1 != b) { return a == b; }";
    let plain = scan(source).unwrap();
    let compound = scan_with(source, &ScanConfig::new().with_compound_operators(true)).unwrap();

    assert_eq!(plain.len(), compound.len() + 3);

    let without_operators = |tokens: &[Token]| -> Vec<String> {
        tokens
            .iter()
            .filter(|t| t.kind() != TokenKind::Operator)
            .map(|t| format!("{}@{}", t.value(), t.position()))
            .collect()
    };
    assert_eq!(without_operators(&plain[..]), without_operators(&compound[..]));
}

#[test]
fn test_error_rendering_end_to_end() {
    let source = "let a = 1;\n  let b = a ^ 2;\n";
    let error = scan(source).unwrap_err();

    assert_eq!(error.to_string(), "unexpected character '^' at line 2, column 13");
    assert_eq!(
        format_error(&error, source, "main.lang"),
        "Error: UnexpectedCharacter\n-> main.lang\n  |\n2 | let b = a ^ 2;\n  | ----------^\n"
    );
}
