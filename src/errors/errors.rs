use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn stage(&self) -> ErrorStage {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } | ErrorImpl::NumberParseError { .. } => {
                ErrorStage::Lexer
            }
            ErrorImpl::NoPrefixRule { .. }
            | ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::NestingTooDeep { .. } => ErrorStage::Parser,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::NoPrefixRule { .. } => "NoPrefixRule",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::NoPrefixRule { token } => ErrorTip::Suggestion(format!(
                "`{}` cannot start an expression, expected a number, `-` or `(`",
                token
            )),
            ErrorImpl::UnexpectedToken {
                token,
                expected: TokenKind::EOF,
            } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected end of input",
                token
            )),
            ErrorImpl::UnexpectedToken { token, expected } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected `{}`",
                token,
                expected.symbol()
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Expression nests deeper than {} levels, split it up or raise --max-depth",
                limit
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} at offset {}",
            self.stage(),
            self.internal_error,
            self.position.0
        )
    }
}

impl std::error::Error for Error {}

/// Which half of the pipeline rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStage {
    Lexer,
    Parser,
}

impl Display for ErrorStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorStage::Lexer => write!(f, "LexError"),
            ErrorStage::Parser => write!(f, "ParseError"),
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
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("no prefix rule for token: {token:?}")]
    NoPrefixRule { token: String },
    #[error("unexpected token: {token:?}, expected {expected}")]
    UnexpectedToken { token: String, expected: TokenKind },
    #[error("expression nests deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
