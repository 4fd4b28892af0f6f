//! Parser implementation for building the expression tree.
//!
//! This module contains the main Parser struct and the top level parse
//! entry points. Expression parsing itself lives in `expr`, driven by the
//! prefix and infix rule tables in `lookups`.

use crate::{
    ast::expressions::Expr,
    config::{ParserConfig, TrailingPolicy},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind, TokenValue},
    Position, Span,
};

use super::{expr::parse_expr, lookups::Precedence};

/// The parsing state: the token stream, a cursor into it and the current
/// nesting depth.
///
/// The stream always ends with an `EOF` token and the cursor never moves
/// past it, so there is always a token to look at.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Nested `parse_expr` calls currently active
    depth: usize,
    max_depth: usize,
}

impl Parser {
    /// Creates a new Parser instance that nests at most `max_depth` levels.
    ///
    /// An `EOF` token is appended if the stream does not already end with one.
    pub fn new(mut tokens: Vec<Token>, max_depth: usize) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens.last().map(|token| token.span.end).unwrap_or(Position(0));
            tokens.push(Token {
                kind: TokenKind::EOF,
                value: TokenValue::None,
                span: Span { start: end, end },
            });
        }

        Parser {
            tokens,
            pos: 0,
            depth: 0,
            max_depth,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// Once the cursor reaches `EOF` it stays there.
    pub fn advance(&mut self) -> &Token {
        let pos = self.pos;
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[pos]
    }

    /// Expects a token of the specified kind and consumes it.
    ///
    /// The cursor only moves when the current token matches.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: token.value.to_string(),
                    expected: expected_kind,
                },
                token.span.start,
            ));
        }

        Ok(self.advance().clone())
    }

    /// Steps one level deeper, failing once the depth limit is passed.
    pub fn enter(&mut self) -> Result<(), Error> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(self.too_deep(self.get_position()));
        }
        Ok(())
    }

    pub fn leave(&mut self) {
        self.depth -= 1;
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn too_deep(&self, position: Position) -> Error {
        Error::new(
            ErrorImpl::NestingTooDeep {
                limit: self.max_depth,
            },
            position,
        )
    }

    /// Checks if there are tokens other than `EOF` left to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Index of the current token.
    pub fn cursor(&self) -> usize {
        self.pos
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start
    }
}

/// Parses a stream of tokens into a single expression tree, ignoring any
/// tokens left after it.
pub fn parse(tokens: Vec<Token>) -> Result<Expr, Error> {
    parse_with_config(tokens, &ParserConfig::default())
}

/// Parses a stream of tokens into a single expression tree, applying the
/// trailing token policy from `config` once the top level expression ends.
///
/// Inputs that nest deeper than `config.max_depth`, whether through
/// recursion (`- - - 1`, `( ( 1 ) )`) or through a long left leaning chain
/// (`1 + 1 + 1`), fail with `NestingTooDeep` instead of building the tree.
pub fn parse_with_config(tokens: Vec<Token>, config: &ParserConfig) -> Result<Expr, Error> {
    log::debug!("BEGIN: parse {} tokens", tokens.len());
    let mut parser = Parser::new(tokens, config.max_depth);

    let expr = parse_expr(&mut parser, Precedence::Min)?;

    if parser.has_tokens() {
        match config.trailing {
            TrailingPolicy::Ignore => {
                log::debug!(
                    "ignoring trailing tokens from {}: {}",
                    parser.cursor(),
                    parser.current_token().debug()
                );
            }
            TrailingPolicy::Reject => {
                parser.expect(TokenKind::EOF)?;
            }
        }
    }

    log::debug!("END: parse, {} nodes", expr.node_count());
    Ok(expr)
}
