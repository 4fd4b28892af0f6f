use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_SPAN, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, TokenValue, OPERATOR_LOOKUP};

lazy_static! {
    // A word starting with a digit must be a whole number literal.
    static ref NUMBER_START: Regex = Regex::new(r"^[0-9]").unwrap();
}

pub struct Lexer {
    tokens: Vec<Token>,
    pos: usize,
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexer {
    pub fn new() -> Lexer {
        Lexer {
            tokens: vec![],
            pos: 0,
        }
    }

    pub fn push(&mut self, token: Token) {
        log::trace!("token {} at {}", token.debug(), self.pos);
        self.tokens.push(token);
    }

    pub fn get_position(&self) -> Position {
        Position(self.pos as u32)
    }

    /// Moves past `word` and the single space separator that follows it.
    fn advance_word(&mut self, word: &str) {
        self.pos += word.len() + 1;
    }
}

fn operator_handler(lexer: &mut Lexer, word: &str, kind: TokenKind, operator: char) {
    lexer.push(MK_TOKEN!(
        kind,
        TokenValue::Operator(operator),
        MK_SPAN!(lexer.pos, word.len())
    ));
}

fn number_handler(lexer: &mut Lexer, word: &str) -> Result<(), Error> {
    match word.parse::<u64>() {
        Ok(value) => {
            lexer.push(MK_TOKEN!(
                TokenKind::Number,
                TokenValue::Number(value),
                MK_SPAN!(lexer.pos, word.len())
            ));
            Ok(())
        }
        Err(_) => Err(Error::new(
            ErrorImpl::NumberParseError {
                token: word.to_string(),
            },
            lexer.get_position(),
        )),
    }
}

/// Splits `source` on single spaces and classifies every word, appending an
/// `EOF` token at the end.
///
/// Consecutive, leading or trailing spaces produce an empty word, which is
/// rejected like any other unrecognised token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    log::trace!("BEGIN: tokenize {:?}", source);
    let mut lex = Lexer::new();

    for word in source.split(' ') {
        if let Some((kind, operator)) = OPERATOR_LOOKUP.get(word) {
            operator_handler(&mut lex, word, *kind, *operator);
        } else if NUMBER_START.is_match(word) {
            number_handler(&mut lex, word)?;
        } else {
            return Err(Error::new(
                ErrorImpl::UnrecognisedToken {
                    token: word.to_string(),
                },
                lex.get_position(),
            ));
        }

        lex.advance_word(word);
    }

    let end = source.len();
    lex.push(MK_TOKEN!(TokenKind::EOF, TokenValue::None, MK_SPAN!(end, 0)));
    log::trace!("END: tokenize, {} tokens", lex.tokens.len());

    Ok(lex.tokens)
}
