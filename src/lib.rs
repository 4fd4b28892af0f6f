#![allow(clippy::module_inception)]

use crate::{
    ast::expressions::Expr,
    config::ParserConfig,
    errors::errors::{Error, ErrorTip},
};

pub mod ast;
pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// Byte offset into the expression being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Tokenizes and parses `source` with the default configuration.
pub fn parse_str(source: &str) -> Result<Expr, Error> {
    parse_str_with_config(source, &ParserConfig::default())
}

pub fn parse_str_with_config(source: &str, config: &ParserConfig) -> Result<Expr, Error> {
    let tokens = lexer::lexer::tokenize(source)?;
    parser::parser::parse_with_config(tokens, config)
}

/// Renders the `"<input>"  =>  "<canonical>"` line printed by the CLI.
pub fn format_result(source: &str, expr: &Expr) -> String {
    format!("\"{}\"  =>  \"{}\"", source, expr)
}

pub fn get_column_at_position(source: &str, position: u32) -> usize {
    let pos = (position as usize).min(source.len());

    // Offsets are in bytes, the caret is drawn in chars.
    source
        .char_indices()
        .take_while(|(index, _)| *index < pos)
        .count()
}


pub fn display_error(error: &Error, source: &str) -> String {
    /*
        Error: message
        -> <expression>
          |
        1 | 3 + @
          | ----^
    */

    let position = error.get_position();
    let line_pos = get_column_at_position(source, position.0);

    let line_string = String::from("1");
    let padding = line_string.len() + 2;

    let mut out = String::new();
    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str("-> <expression>\n");
    out.push_str(&format!("{:>padding$}\n", "|"));
    out.push_str(&format!("{} | {}\n", line_string, source));

    let arrows = line_pos + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}
