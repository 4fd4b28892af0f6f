use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref OPERATOR_LOOKUP: HashMap<&'static str, (TokenKind, char)> = {
        let mut map = HashMap::new();
        map.insert("+", (TokenKind::Plus, '+'));
        map.insert("-", (TokenKind::Minus, '-'));
        map.insert("*", (TokenKind::Star, '*'));
        map.insert("/", (TokenKind::Slash, '/'));
        map.insert("^", (TokenKind::Caret, '^'));
        map.insert("!", (TokenKind::Bang, '!'));
        map.insert("(", (TokenKind::OpenParen, '('));
        map.insert(")", (TokenKind::CloseParen, ')'));
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,

    OpenParen,
    CloseParen,

    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^
    Bang,  // !
}

impl TokenKind {
    /// Text shown to the user when a token of this kind is expected.
    pub fn symbol(&self) -> &'static str {
        match self {
            TokenKind::EOF => "EOF",
            TokenKind::Number => "number",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Caret => "^",
            TokenKind::Bang => "!",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenValue {
    Number(u64),
    Operator(char),
    None,
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Number(value) => write!(f, "{}", value),
            TokenValue::Operator(operator) => write!(f, "{}", operator),
            TokenValue::None => write!(f, "EOF"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub span: Span,
}

impl Token {
    pub fn debug(&self) -> String {
        match self.kind {
            TokenKind::Number => format!("{} ({})", self.kind, self.value),
            _ => format!("{} ()", self.kind),
        }
    }
}
