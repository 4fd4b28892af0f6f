//! Error types and error handling for the expression parser.
//!
//! This module defines the error types raised while turning an expression
//! into a tree. It includes:
//!
//! - An error structure carrying the byte offset of the offending token
//! - Lexer errors (unrecognised substrings, bad number literals)
//! - Parser errors (no prefix rule, unexpected token)
//! - Helpful tips for the command line diagnostics

pub mod errors;

#[cfg(test)]
mod tests;
