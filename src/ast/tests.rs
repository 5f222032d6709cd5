//! Unit tests for the expression tree.

use super::ast::Node;
use crate::tokens::tokens::Literal;

fn int(value: &str) -> Node {
    Node::literal(Literal::Integer(value.to_string()))
}

#[test]
fn test_display_nested() {
    let node = Node::binary("+", int("1"), Node::binary("*", int("2"), int("3")));

    assert_eq!(node.to_string(), "(+ 1 (* 2 3))");
}

#[test]
fn test_display_unary() {
    let node = Node::unary("-", Node::unary("-", int("2")));

    assert_eq!(node.to_string(), "(- (- 2))");
}

#[test]
fn test_depth_and_size() {
    let node = Node::binary(
        "-",
        Node::binary("-", int("4"), int("2")),
        int("1"),
    );

    assert_eq!(node.depth(), 3);
    assert_eq!(node.size(), 5);
    assert_eq!(int("9").depth(), 1);
}

#[test]
fn test_operator() {
    assert_eq!(Node::unary("!", int("0")).operator(), Some("!"));
    assert_eq!(int("0").operator(), None);
}

#[test]
fn test_literal_payload_is_verbatim() {
    let node = Node::from(Literal::Float("1.50".to_string()));

    assert_eq!(node.to_string(), "1.50");
}

#[test]
fn test_drop_deep_tree() {
    let mut node = int("0");
    for _ in 0..500_000 {
        node = Node::binary("*", node, int("1"));
    }

    assert_eq!(node.depth(), 500_001);
    drop(node);
}

#[test]
fn test_debug_matches_structure() {
    let node = Node::unary("-", int("2"));

    assert_eq!(
        format!("{:?}", node),
        "Unary { op: \"-\", operand: Literal(Integer(\"2\")) }"
    );
}
