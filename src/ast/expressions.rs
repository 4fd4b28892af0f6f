use std::fmt::Display;

/// A node of the expression tree.
///
/// Every child is owned by its parent, so a tree never shares or cycles
/// back into its own subtrees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Number Expression
    /// Represents a non-negative integer literal.
    NumberLiteral { value: u64 },

    /// Unary Expression
    /// Represents both prefix negation (`-`) and postfix factorial (`!`).
    UnaryExpression { operator: char, operand: Box<Expr> },

    /// Binary Expression
    /// Represents an infix operation between two expressions.
    BinaryExpression {
        left: Box<Expr>,
        operator: char,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn number(value: u64) -> Self {
        Expr::NumberLiteral { value }
    }

    pub fn unary(operator: char, operand: Expr) -> Self {
        Expr::UnaryExpression {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn binary(left: Expr, operator: char, right: Expr) -> Self {
        Expr::BinaryExpression {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    /// Number of nodes in the tree rooted here.
    pub fn node_count(&self) -> usize {
        match self {
            Expr::NumberLiteral { .. } => 1,
            Expr::UnaryExpression { operand, .. } => 1 + operand.node_count(),
            Expr::BinaryExpression { left, right, .. } => {
                1 + left.node_count() + right.node_count()
            }
        }
    }
}

/// Canonical prefix rendering: `7`, `(- 7)`, `(+ 1 2)`.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::NumberLiteral { value } => write!(f, "{}", value),
            Expr::UnaryExpression { operator, operand } => {
                write!(f, "({} {})", operator, operand)
            }
            Expr::BinaryExpression {
                left,
                operator,
                right,
            } => write!(f, "({} {} {})", operator, left, right),
        }
    }
}
