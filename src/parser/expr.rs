use crate::{
    ast::expressions::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind, TokenValue},
    Position,
};

use super::{
    lookups::{
        infix_rule, prefix_rule, right_operand_precedence, Associativity, InfixRule, PrefixRule,
        Precedence,
    },
    parser::Parser,
};

/// A parsed subtree together with its height, so long left leaning chains
/// are caught without walking the tree again.
struct Node {
    expr: Expr,
    height: usize,
}

fn grow(parser: &Parser, expr: Expr, height: usize, position: Position) -> Result<Node, Error> {
    if height > parser.max_depth() {
        return Err(parser.too_deep(position));
    }
    Ok(Node { expr, height })
}

pub fn parse_expr(parser: &mut Parser, precedence: Precedence) -> Result<Expr, Error> {
    parse_node(parser, precedence).map(|node| node.expr)
}

fn parse_node(parser: &mut Parser, precedence: Precedence) -> Result<Node, Error> {
    log::trace!("parse_expr at {} with {:?}", parser.cursor(), precedence);
    parser.enter()?;

    // First parse NUD
    let Some(rule) = prefix_rule(parser.current_token_kind()) else {
        return Err(Error::new(
            ErrorImpl::NoPrefixRule {
                token: parser.current_token().value.to_string(),
            },
            parser.get_position(),
        ));
    };

    let token = parser.advance().clone();
    let mut left = parse_prefix(parser, token, rule)?;

    // While LED and the bound is lower than the operator's precedence, keep extending lhs
    while let Some(rule) = infix_rule(parser.current_token_kind()) {
        if precedence >= rule.precedence() {
            break;
        }

        let token = parser.advance().clone();
        left = parse_infix(parser, left, token, rule)?;
    }

    parser.leave();
    Ok(left)
}

fn parse_prefix(parser: &mut Parser, token: Token, rule: PrefixRule) -> Result<Node, Error> {
    match rule {
        PrefixRule::Literal => parse_number_expr(parser, token),
        PrefixRule::Negation => parse_prefix_expr(parser, token),
        PrefixRule::Grouping => parse_grouping_expr(parser),
    }
}

fn parse_infix(
    parser: &mut Parser,
    left: Node,
    token: Token,
    rule: InfixRule,
) -> Result<Node, Error> {
    match rule {
        InfixRule::Postfix { operator } => parse_postfix_expr(parser, left, token, operator),
        InfixRule::Binary {
            operator,
            precedence,
            associativity,
        } => parse_binary_expr(parser, left, token, operator, precedence, associativity),
    }
}

fn parse_number_expr(parser: &Parser, token: Token) -> Result<Node, Error> {
    match token.value {
        TokenValue::Number(value) => grow(parser, Expr::number(value), 1, token.span.start),
        // Only reachable with a hand built token stream
        TokenValue::Operator(_) | TokenValue::None => Err(Error::new(
            ErrorImpl::NoPrefixRule {
                token: token.value.to_string(),
            },
            token.span.start,
        )),
    }
}

fn parse_prefix_expr(parser: &mut Parser, token: Token) -> Result<Node, Error> {
    // Only a postfix operator binds tighter than negation.
    let operand = parse_node(parser, Precedence::Prefix)?;

    grow(
        parser,
        Expr::unary('-', operand.expr),
        operand.height + 1,
        token.span.start,
    )
}

fn parse_grouping_expr(parser: &mut Parser) -> Result<Node, Error> {
    if parser.current_token_kind() == TokenKind::EOF {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().value.to_string(),
                expected: TokenKind::CloseParen,
            },
            parser.get_position(),
        ));
    }

    let node = parse_node(parser, Precedence::Min)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(node)
}

fn parse_postfix_expr(
    parser: &Parser,
    left: Node,
    token: Token,
    operator: char,
) -> Result<Node, Error> {
    grow(
        parser,
        Expr::unary(operator, left.expr),
        left.height + 1,
        token.span.start,
    )
}

fn parse_binary_expr(
    parser: &mut Parser,
    left: Node,
    token: Token,
    operator: char,
    precedence: Precedence,
    associativity: Associativity,
) -> Result<Node, Error> {
    let right = parse_node(parser, right_operand_precedence(precedence, associativity))?;
    let height = left.height.max(right.height) + 1;

    grow(
        parser,
        Expr::binary(left.expr, operator, right.expr),
        height,
        token.span.start,
    )
}
