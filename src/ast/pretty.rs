use super::expressions::Expr;

/// Renders `expr` one node per line, children indented two spaces under their
/// operator and closing parentheses kept on the last child's line:
///
/// ```text
/// (+
///   1
///   (* 2 3))
/// ```
///
/// Subtrees whose canonical form fits in `width` columns stay on one line.
pub fn pretty_print(expr: &Expr, width: usize) -> String {
    let mut result = String::new();
    write_node(expr, 0, width, &mut result);
    result
}

fn write_node(expr: &Expr, indent: usize, width: usize, result: &mut String) {
    let flat = expr.to_string();
    if indent * 2 + flat.len() <= width {
        result.push_str(&flat);
        return;
    }

    let (operator, children): (char, Vec<&Expr>) = match expr {
        Expr::NumberLiteral { .. } => {
            result.push_str(&flat);
            return;
        }
        Expr::UnaryExpression { operator, operand } => (*operator, vec![operand.as_ref()]),
        Expr::BinaryExpression {
            left,
            operator,
            right,
        } => (*operator, vec![left.as_ref(), right.as_ref()]),
    };

    result.push('(');
    result.push(operator);
    for child in children {
        result.push('\n');
        result.push_str(&"  ".repeat(indent + 1));
        write_node(child, indent + 1, width, result);
    }
    result.push(')');
}
