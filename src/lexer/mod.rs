//! Lexical analysis module for the expression parser.
//!
//! This module contains the lexer (tokenizer) that converts an expression
//! into a stream of tokens for parsing. It handles:
//!
//! - Splitting on single spaces
//! - Recognition of operators, parentheses and integer literals
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
