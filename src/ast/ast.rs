use std::fmt::{Debug, Display};

use crate::{stack::ensure_sufficient_stack, tokens::tokens::Literal};

/// Expression tree node.
///
/// Nodes form a strict tree: every non-terminal owns its children and
/// nothing is shared.
///
/// A flat operator chain nests one level per operator, so tree depth is
/// not bounded by parenthesis nesting. Dropping, displaying and measuring
/// walk the tree with a heap worklist; `Clone`, `PartialEq` and `Debug`
/// recurse under `ensure_sufficient_stack`.
pub enum Node {
    /// Terminal holding the literal payload verbatim
    Literal(Literal),
    /// Prefix operator applied to one operand
    Unary { op: String, operand: Box<Node> },
    /// Infix operator applied to two operands
    Binary {
        op: String,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn literal(literal: Literal) -> Self {
        Node::Literal(literal)
    }

    pub fn unary(op: impl Into<String>, operand: Node) -> Self {
        Node::Unary {
            op: op.into(),
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: impl Into<String>, left: Node, right: Node) -> Self {
        Node::Binary {
            op: op.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Height of the tree. A lone literal has depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];

        while let Some((node, level)) = pending.pop() {
            deepest = deepest.max(level);
            match node {
                Node::Literal(_) => {}
                Node::Unary { operand, .. } => pending.push((operand.as_ref(), level + 1)),
                Node::Binary { left, right, .. } => {
                    pending.push((left.as_ref(), level + 1));
                    pending.push((right.as_ref(), level + 1));
                }
            }
        }

        deepest
    }

    /// Total number of nodes in the tree.
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];

        while let Some(node) = pending.pop() {
            count += 1;
            match node {
                Node::Literal(_) => {}
                Node::Unary { operand, .. } => pending.push(operand.as_ref()),
                Node::Binary { left, right, .. } => {
                    pending.push(left.as_ref());
                    pending.push(right.as_ref());
                }
            }
        }

        count
    }

    /// Returns the operator symbol for non-terminal nodes.
    pub fn operator(&self) -> Option<&str> {
        match self {
            Node::Literal(_) => None,
            Node::Unary { op, .. } | Node::Binary { op, .. } => Some(op),
        }
    }

    /// Moves this node's children into `out`, leaving placeholder leaves behind.
    fn take_children(&mut self, out: &mut Vec<Node>) {
        match self {
            Node::Literal(_) => {}
            Node::Unary { operand, .. } => out.push(take_node(operand)),
            Node::Binary { left, right, .. } => {
                out.push(take_node(left));
                out.push(take_node(right));
            }
        }
    }
}

fn take_node(slot: &mut Node) -> Node {
    std::mem::replace(slot, Node::Literal(Literal::Null))
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = vec![];
        self.take_children(&mut pending);

        // Each popped node is emptied before it is dropped
        while let Some(mut node) = pending.pop() {
            node.take_children(&mut pending);
        }
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| match self {
            Node::Literal(literal) => Node::Literal(literal.clone()),
            Node::Unary { op, operand } => Node::Unary {
                op: op.clone(),
                operand: operand.clone(),
            },
            Node::Binary { op, left, right } => Node::Binary {
                op: op.clone(),
                left: left.clone(),
                right: right.clone(),
            },
        })
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| match (self, other) {
            (Node::Literal(a), Node::Literal(b)) => a == b,
            (
                Node::Unary { op, operand },
                Node::Unary {
                    op: other_op,
                    operand: other_operand,
                },
            ) => op == other_op && operand == other_operand,
            (
                Node::Binary { op, left, right },
                Node::Binary {
                    op: other_op,
                    left: other_left,
                    right: other_right,
                },
            ) => op == other_op && left == other_left && right == other_right,
            _ => false,
        })
    }
}

impl Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        ensure_sufficient_stack(|| match self {
            Node::Literal(literal) => f.debug_tuple("Literal").field(literal).finish(),
            Node::Unary { op, operand } => f
                .debug_struct("Unary")
                .field("op", op)
                .field("operand", operand)
                .finish(),
            Node::Binary { op, left, right } => f
                .debug_struct("Binary")
                .field("op", op)
                .field("left", left)
                .field("right", right)
                .finish(),
        })
    }
}

/// Pending output while rendering a tree.
enum Piece<'a> {
    Node(&'a Node),
    Text(&'static str),
}

/// Renders the tree as a fully parenthesized prefix form, e.g. `(+ 1 (* 2 3))`.
impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut pending = vec![Piece::Node(self)];

        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Node(Node::Literal(literal)) => write!(f, "{}", literal)?,
                Piece::Node(Node::Unary { op, operand }) => {
                    write!(f, "({} ", op)?;
                    pending.push(Piece::Text(")"));
                    pending.push(Piece::Node(operand));
                }
                Piece::Node(Node::Binary { op, left, right }) => {
                    write!(f, "({} ", op)?;
                    pending.push(Piece::Text(")"));
                    pending.push(Piece::Node(right));
                    pending.push(Piece::Text(" "));
                    pending.push(Piece::Node(left));
                }
            }
        }

        Ok(())
    }
}

impl From<Literal> for Node {
    fn from(literal: Literal) -> Self {
        Node::Literal(literal)
    }
}
