//! Parser module for building an expression tree.
//!
//! This module contains the parser that transforms a stream of tokens
//! into an expression tree. It is a Pratt parser:
//!
//! - Prefix (NUD) handlers start an expression: numbers, negation, groups
//! - Infix (LED) handlers extend one: binary operators and postfix `!`
//! - Precedence and associativity come from the rule tables in `lookups`

pub mod expr;
pub mod lookups;
pub mod parser;
