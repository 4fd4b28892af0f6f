use std::process;

use clap::Parser;

use pratt::{
    ast::pretty::pretty_print,
    config::{ParserConfig, TrailingPolicy, DEFAULT_MAX_DEPTH},
    display_error, format_result,
    lexer::lexer::tokenize,
    parser::parser::parse_with_config,
};

/// Expressions checked when no expression is given, with their expected trees.
const SELF_CHECK: [(&str, &str); 3] = [
    (
        "3 * - ( - 1 + - 6 ! ) ^ 7 ^ 2 + 8 * 9",
        "(+ (* 3 (^ (- (+ (- 1) (- (! 6)))) (^ 7 2))) (* 8 9))",
    ),
    ("3 ^ - 5 !", "(^ 3 (- (! 5)))"),
    (
        "1 / 3 / - 2 ! / 4 / 5",
        "(/ (/ (/ (/ 1 3) (- (! 2))) 4) 5)",
    ),
];

const PRETTY_WIDTH: usize = 60;

#[derive(Parser)]
#[command(name = "pratt")]
#[command(about = "Parses a space separated arithmetic expression and prints its tree", long_about = None)]
struct Cli {
    /// What to do with tokens left over after a complete expression
    #[arg(long, value_enum, default_value_t = TrailingPolicy::Ignore)]
    trailing: TrailingPolicy,

    /// Deepest nesting accepted before giving up
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Print the token stream before parsing
    #[arg(long)]
    tokens: bool,

    /// Also print the tree one node per line
    #[arg(long)]
    pretty: bool,

    /// Expression words, joined with single spaces.
    ///
    /// Options must come before the expression: every argument from the
    /// first expression word on is part of it, so `1 + 2 --pretty` parses
    /// `--pretty` as a word and fails to tokenize.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expression: Vec<String>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = ParserConfig {
        trailing: cli.trailing,
        max_depth: cli.max_depth,
    };

    if cli.expression.is_empty() {
        self_check(&cli, &config);
    } else {
        let source = cli.expression.join(" ");
        if let Err(code) = run(&source, &cli, &config) {
            process::exit(code);
        }
    }
}

fn run(source: &str, cli: &Cli, config: &ParserConfig) -> Result<String, i32> {
    let tokens = match tokenize(source) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprint!("{}", display_error(&error, source));
            return Err(1);
        }
    };

    if cli.tokens {
        for token in &tokens {
            println!("{}", token.debug());
        }
    }

    let expr = match parse_with_config(tokens, config) {
        Ok(expr) => expr,
        Err(error) => {
            eprint!("{}", display_error(&error, source));
            return Err(1);
        }
    };

    println!("{}", format_result(source, &expr));
    if cli.pretty {
        println!("{}", pretty_print(&expr, PRETTY_WIDTH));
    }

    Ok(expr.to_string())
}

fn self_check(cli: &Cli, config: &ParserConfig) {
    log::info!("running {} self-check expressions", SELF_CHECK.len());

    for (source, expected) in SELF_CHECK {
        let canonical = match run(source, cli, config) {
            Ok(canonical) => canonical,
            Err(code) => process::exit(code),
        };

        if canonical != expected {
            eprintln!(
                "Self-check failed for \"{}\": expected \"{}\", got \"{}\"",
                source, expected, canonical
            );
            process::exit(1);
        }
    }
}
