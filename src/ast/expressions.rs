use std::{fmt::Display, mem};

use crate::lexer::tokens::TokenKind;

/// Operator of a binary expression.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Multiply,
}

impl BinaryOperator {
    /// Maps an operator token kind to its operator, `None` for any other kind.
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(BinaryOperator::Plus),
            TokenKind::Minus => Some(BinaryOperator::Minus),
            TokenKind::Star => Some(BinaryOperator::Multiply),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Plus => "+",
            BinaryOperator::Minus => "-",
            BinaryOperator::Multiply => "*",
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Expression node of the syntax tree.
///
/// Children are owned through `Box`, so a tree has exactly one owner per node.
///
/// Operator chains build trees as deep as the chain is long, so equality,
/// display, the size queries and drop walk the tree with an explicit stack.
/// `Clone` and `Debug` are derived and still recurse.
#[derive(Debug, Clone)]
pub enum Expr {
    Integer(i64),
    Boolean(bool),
    Binary {
        left: Box<Expr>,
        operator: BinaryOperator,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn binary(left: Expr, operator: BinaryOperator, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    /// Number of literal leaves in the tree.
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            match node {
                Expr::Integer(_) | Expr::Boolean(_) => count += 1,
                Expr::Binary { left, right, .. } => {
                    stack.push(&**left);
                    stack.push(&**right);
                }
            }
        }

        count
    }

    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];

        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);

            if let Expr::Binary { left, right, .. } = node {
                stack.push((&**left, level + 1));
                stack.push((&**right, level + 1));
            }
        }

        deepest
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];

        while let Some(pair) = stack.pop() {
            match pair {
                (Expr::Integer(a), Expr::Integer(b)) if a == b => {}
                (Expr::Boolean(a), Expr::Boolean(b)) if a == b => {}
                (
                    Expr::Binary {
                        left: left_a,
                        operator: operator_a,
                        right: right_a,
                    },
                    Expr::Binary {
                        left: left_b,
                        operator: operator_b,
                        right: right_b,
                    },
                ) if operator_a == operator_b => {
                    stack.push((&**left_a, &**left_b));
                    stack.push((&**right_a, &**right_b));
                }
                _ => return false,
            }
        }

        true
    }
}

impl Eq for Expr {}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        detach_children(self, &mut stack);

        // Each popped node has its children detached before it is dropped
        while let Some(mut node) = stack.pop() {
            detach_children(&mut node, &mut stack);
        }
    }
}

fn detach_children(node: &mut Expr, stack: &mut Vec<Expr>) {
    if let Expr::Binary { left, right, .. } = node {
        stack.push(mem::replace(&mut **left, Expr::Integer(0)));
        stack.push(mem::replace(&mut **right, Expr::Integer(0)));
    }
}

enum Frame<'a> {
    Node(&'a Expr),
    Text(&'static str),
}

// Prefix form, e.g. `(+ (* 2 3) 4)`
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut stack = vec![Frame::Node(self)];

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Text(text) => f.write_str(text)?,
                Frame::Node(Expr::Integer(value)) => write!(f, "{}", value)?,
                Frame::Node(Expr::Boolean(value)) => write!(f, "{}", value)?,
                Frame::Node(Expr::Binary {
                    left,
                    operator,
                    right,
                }) => {
                    write!(f, "({} ", operator)?;
                    stack.push(Frame::Text(")"));
                    stack.push(Frame::Node(&**right));
                    stack.push(Frame::Text(" "));
                    stack.push(Frame::Node(&**left));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{BinaryOperator, Expr};

    /// `1 + 1 + ... + 1`, folded left the way the parser builds it.
    fn left_chain(operands: usize) -> Expr {
        let mut expr = Expr::Integer(1);
        for _ in 1..operands {
            expr = Expr::binary(expr, BinaryOperator::Plus, Expr::Integer(1));
        }
        expr
    }

    #[test]
    fn test_leaf_count_and_depth() {
        let expr = Expr::binary(
            Expr::binary(Expr::Integer(2), BinaryOperator::Multiply, Expr::Integer(3)),
            BinaryOperator::Plus,
            Expr::Boolean(true),
        );

        assert_eq!(expr.leaf_count(), 3);
        assert_eq!(expr.depth(), 3);
        assert_eq!(Expr::Integer(4).depth(), 1);
    }

    #[test]
    fn test_equality_checks_operator_and_leaves() {
        let plus = Expr::binary(Expr::Integer(1), BinaryOperator::Plus, Expr::Integer(2));
        let minus = Expr::binary(Expr::Integer(1), BinaryOperator::Minus, Expr::Integer(2));
        let swapped = Expr::binary(Expr::Integer(2), BinaryOperator::Plus, Expr::Integer(1));

        assert_eq!(plus, plus.clone());
        assert_ne!(plus, minus);
        assert_ne!(plus, swapped);
        assert_ne!(Expr::Integer(1), Expr::Boolean(true));
    }

    #[test]
    fn test_display_prefix_form() {
        let expr = Expr::binary(
            Expr::binary(Expr::Integer(10), BinaryOperator::Minus, Expr::Integer(3)),
            BinaryOperator::Multiply,
            Expr::Boolean(false),
        );

        assert_eq!(expr.to_string(), "(* (- 10 3) false)");
    }

    #[test]
    fn test_long_chain_walks_without_recursion() {
        // Run on a small stack so any recursive walk over the chain overflows
        let handle = std::thread::Builder::new()
            .stack_size(256 * 1024)
            .spawn(|| {
                let operands = 100_000;
                let first = left_chain(operands);
                let second = left_chain(operands);

                assert_eq!(first.leaf_count(), operands);
                assert_eq!(first.depth(), operands);
                assert_eq!(first, second);

                let text = first.to_string();
                assert!(text.starts_with("(+ (+ "));
                assert!(text.ends_with(" 1)"));
            })
            .unwrap();

        handle.join().unwrap();
    }
}
