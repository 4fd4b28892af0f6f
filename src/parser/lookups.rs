use crate::lexer::tokens::TokenKind;

/// Binding power of an operator, lowest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Precedence {
    Min,
    Sum,
    Product,
    Exponent,
    Prefix,
    Postfix,
}

impl Precedence {
    /// The next lower level. `Min` has nothing below it and maps to itself.
    pub fn lower(&self) -> Precedence {
        match self {
            Precedence::Min | Precedence::Sum => Precedence::Min,
            Precedence::Product => Precedence::Sum,
            Precedence::Exponent => Precedence::Product,
            Precedence::Prefix => Precedence::Exponent,
            Precedence::Postfix => Precedence::Prefix,
        }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Associativity {
    Left,
    Right,
}

/// How a token starts an expression.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum PrefixRule {
    Literal,
    /// Binds its operand at `Precedence::Prefix`.
    Negation,
    Grouping,
}

/// How a token continues an already parsed expression.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum InfixRule {
    Binary {
        operator: char,
        precedence: Precedence,
        associativity: Associativity,
    },
    /// Takes no right operand.
    Postfix { operator: char },
}

impl InfixRule {
    const fn binary(operator: char, precedence: Precedence, associativity: Associativity) -> Self {
        InfixRule::Binary {
            operator,
            precedence,
            associativity,
        }
    }

    pub fn precedence(&self) -> Precedence {
        match self {
            InfixRule::Binary { precedence, .. } => *precedence,
            InfixRule::Postfix { .. } => Precedence::Postfix,
        }
    }
}

/// Bound passed down when parsing the right operand of a binary operator.
/// Lowering it by one for right associative operators lets the operand
/// absorb another operator of the same level.
pub fn right_operand_precedence(
    precedence: Precedence,
    associativity: Associativity,
) -> Precedence {
    match associativity {
        Associativity::Left => precedence,
        Associativity::Right => precedence.lower(),
    }
}

/// Rules for tokens that can start an expression.
pub fn prefix_rule(kind: TokenKind) -> Option<PrefixRule> {
    match kind {
        TokenKind::Number => Some(PrefixRule::Literal),
        TokenKind::Minus => Some(PrefixRule::Negation),
        TokenKind::OpenParen => Some(PrefixRule::Grouping),

        TokenKind::EOF
        | TokenKind::CloseParen
        | TokenKind::Plus
        | TokenKind::Star
        | TokenKind::Slash
        | TokenKind::Caret
        | TokenKind::Bang => None,
    }
}

/// Rules for tokens that can continue an already parsed expression.
pub fn infix_rule(kind: TokenKind) -> Option<InfixRule> {
    use Associativity::*;
    use Precedence::*;

    match kind {
        // Additive and multiplicative
        TokenKind::Plus => Some(InfixRule::binary('+', Sum, Left)),
        TokenKind::Minus => Some(InfixRule::binary('-', Sum, Left)),
        TokenKind::Star => Some(InfixRule::binary('*', Product, Left)),
        TokenKind::Slash => Some(InfixRule::binary('/', Product, Left)),

        TokenKind::Caret => Some(InfixRule::binary('^', Exponent, Right)),

        // Factorial shares the infix loop
        TokenKind::Bang => Some(InfixRule::Postfix { operator: '!' }),

        TokenKind::EOF | TokenKind::Number | TokenKind::OpenParen | TokenKind::CloseParen => None,
    }
}
