//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorStage, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::NoPrefixRule {
            token: ")".to_string(),
        },
        Position(42),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_error_stage() {
    let lex = Error::new(
        ErrorImpl::NumberParseError {
            token: "12a".to_string(),
        },
        Position(0),
    );
    let parse = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "EOF".to_string(),
            expected: TokenKind::CloseParen,
        },
        Position(0),
    );

    assert_eq!(lex.stage(), ErrorStage::Lexer);
    assert_eq!(parse.stage(), ErrorStage::Parser);
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::NoPrefixRule {
            token: "+".to_string(),
        },
        Position(2),
    );

    assert_eq!(
        error.to_string(),
        "ParseError: no prefix rule for token: \"+\" at offset 2"
    );
}

#[test]
fn test_unexpected_token_display() {
    let error = ErrorImpl::UnexpectedToken {
        token: "EOF".to_string(),
        expected: TokenKind::CloseParen,
    };

    assert_eq!(
        error.to_string(),
        "unexpected token: \"EOF\", expected CloseParen"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_expected_close_paren() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "EOF".to_string(),
            expected: TokenKind::CloseParen,
        },
        Position(0),
    );

    assert_eq!(
        error.get_tip().to_string(),
        "Unexpected token: `EOF`, expected `)`"
    );
}

#[test]
fn test_error_tip_expected_end_of_input() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "3".to_string(),
            expected: TokenKind::EOF,
        },
        Position(0),
    );

    assert_eq!(
        error.get_tip().to_string(),
        "Unexpected token: `3`, expected end of input"
    );
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_nesting_too_deep() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 256 }, Position(512));

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.stage(), ErrorStage::Parser);
    assert_eq!(
        error.to_string(),
        "ParseError: expression nests deeper than 256 levels at offset 512"
    );
    assert_eq!(
        error.get_tip().to_string(),
        "Expression nests deeper than 256 levels, split it up or raise --max-depth"
    );
}
