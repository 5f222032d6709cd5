//! Unit tests for the token model and cursor.

use super::cursor::TokenCursor;
use super::tokens::{Literal, Punctuation, Token, TokenKind};
use crate::MK_TOKEN;

#[test]
fn test_peek_does_not_consume() {
    let cursor = TokenCursor::new(vec![Token::integer("1")]);

    assert_eq!(cursor.peek(), Some(&Token::integer("1")));
    assert_eq!(cursor.peek(), Some(&Token::integer("1")));
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_advance_walks_in_order() {
    let mut cursor = TokenCursor::new(vec![Token::integer("1"), Token::operator("+")]);

    assert_eq!(cursor.advance(), Some(&Token::integer("1")));
    assert_eq!(cursor.position(), 1);
    assert_eq!(cursor.advance(), Some(&Token::operator("+")));
    assert!(cursor.is_at_end());
}

#[test]
fn test_end_of_input() {
    let mut cursor = TokenCursor::new(vec![]);

    assert!(cursor.peek().is_none());
    assert!(cursor.advance().is_none());
    assert_eq!(cursor.position(), 0);
    assert_eq!(cursor.remaining(), 0);
}

#[test]
fn test_advance_past_end_keeps_position() {
    let mut cursor = TokenCursor::new(vec![Token::integer("7")]);
    cursor.advance();

    assert!(cursor.advance().is_none());
    assert_eq!(cursor.position(), 1);
}

#[test]
fn test_remaining() {
    let mut cursor = TokenCursor::from(MK_TOKEN![1, "+", 2]);
    assert_eq!(cursor.remaining(), 3);

    cursor.advance();
    assert_eq!(cursor.remaining(), 2);
}

#[test]
fn test_is_punctuation() {
    let token = Token::punctuation(Punctuation::OpenParen);

    assert!(token.is_punctuation(Punctuation::OpenParen));
    assert!(!token.is_punctuation(Punctuation::CloseParen));
    assert!(!Token::operator("(").is_punctuation(Punctuation::OpenParen));
}

#[test]
fn test_token_display() {
    assert_eq!(Token::integer("42").to_string(), "42");
    assert_eq!(Token::operator("<<=").to_string(), "<<=");
    assert_eq!(Token::punctuation(Punctuation::Semicolon).to_string(), ";");
    assert_eq!(Token::literal(Literal::String("hi".to_string())).to_string(), "\"hi\"");
    assert_eq!(Token::literal(Literal::Char("a".to_string())).to_string(), "'a'");
    assert_eq!(Token::literal(Literal::Null).to_string(), "null");
}

#[test]
fn test_mk_token_classifies_entries() {
    let tokens = MK_TOKEN!["(", 1.5, "*", x, ")", ";", true];

    assert_eq!(
        tokens,
        vec![
            Token::punctuation(Punctuation::OpenParen),
            Token::literal(Literal::Float("1.5".to_string())),
            Token::operator("*"),
            Token::identifier("x"),
            Token::punctuation(Punctuation::CloseParen),
            Token::punctuation(Punctuation::Semicolon),
            Token::literal(Literal::Bool(true)),
        ]
    );
    assert!(matches!(tokens[2].kind, TokenKind::Operator(_)));
}
