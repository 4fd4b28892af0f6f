//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Operators and punctuation
//! - Integer literals
//! - Token spans
//! - Error cases

use crate::{errors::errors::ErrorImpl, Position};

use super::{
    lexer::tokenize,
    tokens::{TokenKind, TokenValue},
};

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("+ - * / ^ ! ( )").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Plus);
    assert_eq!(tokens[1].kind, TokenKind::Minus);
    assert_eq!(tokens[2].kind, TokenKind::Star);
    assert_eq!(tokens[3].kind, TokenKind::Slash);
    assert_eq!(tokens[4].kind, TokenKind::Caret);
    assert_eq!(tokens[5].kind, TokenKind::Bang);
    assert_eq!(tokens[6].kind, TokenKind::OpenParen);
    assert_eq!(tokens[7].kind, TokenKind::CloseParen);
    assert_eq!(tokens[8].kind, TokenKind::EOF);
    assert_eq!(tokens.len(), 9);
}

#[test]
fn test_tokenize_keeps_operator_character() {
    let tokens = tokenize("^ !").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Caret);
    assert_eq!(tokens[0].value, TokenValue::Operator('^'));
    assert_eq!(tokens[1].kind, TokenKind::Bang);
    assert_eq!(tokens[1].value, TokenValue::Operator('!'));
    assert_eq!(tokens[2].value, TokenValue::None);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 0 007 18446744073709551615").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, TokenValue::Number(42));
    assert_eq!(tokens[1].value, TokenValue::Number(0));
    assert_eq!(tokens[2].value, TokenValue::Number(7));
    assert_eq!(tokens[3].value, TokenValue::Number(u64::MAX));
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_simple_expression() {
    let tokens = tokenize("3 * ( 1 + 2 )").unwrap();

    assert_eq!(tokens.len(), 8); // 3, *, (, 1, +, 2, ), EOF
    assert_eq!(tokens[0].value, TokenValue::Number(3));
    assert_eq!(tokens[1].kind, TokenKind::Star);
    assert_eq!(tokens[2].kind, TokenKind::OpenParen);
    assert_eq!(tokens[3].value, TokenValue::Number(1));
    assert_eq!(tokens[4].kind, TokenKind::Plus);
    assert_eq!(tokens[5].value, TokenValue::Number(2));
    assert_eq!(tokens[6].kind, TokenKind::CloseParen);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_spans() {
    let tokens = tokenize("12 + 345").unwrap();

    assert_eq!(tokens[0].span.start, Position(0));
    assert_eq!(tokens[0].span.end, Position(2));
    assert_eq!(tokens[1].span.start, Position(3));
    assert_eq!(tokens[2].span.start, Position(5));
    assert_eq!(tokens[2].span.end, Position(8));
    assert_eq!(tokens[3].span.start, Position(8));
    assert_eq!(tokens[3].span.end, Position(8));
}

#[test]
fn test_tokenize_unrecognized_token() {
    let error = tokenize("@").unwrap_err();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::UnrecognisedToken {
            token: "@".to_string()
        }
    );
    assert_eq!(error.get_position(), &Position(0));
}

#[test]
fn test_tokenize_unrecognized_token_position() {
    let error = tokenize("1 + x").unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position(), &Position(4));
}

#[test]
fn test_tokenize_operator_lookalikes() {
    // Only exact operator words are operators, anything else is not a token.
    for word in ["+-", "(1", "!!", "--", ")("] {
        let error = tokenize(word).unwrap_err();

        assert_eq!(error.get_error_name(), "UnrecognisedToken", "{}", word);
        assert_eq!(error.get_position(), &Position(0));
    }
}

#[test]
fn test_tokenize_multi_character_operator() {
    let error = tokenize("1 ** 2").unwrap_err();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::UnrecognisedToken {
            token: "**".to_string()
        }
    );
}

#[test]
fn test_tokenize_unspaced_input() {
    // Words are only ever split on spaces.
    let error = tokenize("1+2").unwrap_err();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::NumberParseError {
            token: "1+2".to_string()
        }
    );
}

#[test]
fn test_tokenize_negative_literal() {
    let error = tokenize("-5").unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_tokenize_number_overflow() {
    let error = tokenize("18446744073709551616").unwrap_err();

    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_tokenize_double_space() {
    let error = tokenize("1  + 2").unwrap_err();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::UnrecognisedToken {
            token: String::new()
        }
    );
    assert_eq!(error.get_position(), &Position(2));
}

#[test]
fn test_tokenize_other_whitespace() {
    assert!(tokenize("1\t+ 2").is_err());
    assert!(tokenize("1 + 2\n").is_err());
    assert!(tokenize(" 1").is_err());
}

#[test]
fn test_tokenize_empty_string() {
    let error = tokenize("").unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_token_debug() {
    let tokens = tokenize("7 !").unwrap();

    assert_eq!(tokens[0].debug(), "Number (7)");
    assert_eq!(tokens[1].debug(), "Bang ()");
    assert_eq!(tokens[2].debug(), "EOF ()");
}
