#![allow(clippy::module_inception)]

//! Operator-precedence expression parser.
//!
//! Turns an already-lexed token sequence into a `Node` tree, honouring
//! operator precedence, associativity, prefix operators and parenthesized
//! groups.

pub mod ast;
pub mod errors;
pub mod macros;
pub mod parser;
pub mod stack;
pub mod tokens;

pub use ast::ast::Node;
pub use errors::errors::{Error, ErrorImpl, ErrorTip, ParseErrorKind};
pub use parser::{
    config::ParserConfig,
    lookups::{Associativity, BindingPower, Fixity, OperatorInfo, PrecedenceTable},
    parser::{parse_expression, Parser},
};
pub use tokens::{
    cursor::TokenCursor,
    tokens::{Literal, Punctuation, Token, TokenKind},
};

/// Parses a whole token sequence as one expression.
///
/// Parsing stops at the first terminator; anything after it is ignored.
pub fn parse_tokens(tokens: Vec<Token>) -> Result<Node, Error> {
    let mut cursor = TokenCursor::new(tokens);
    parse_expression(&mut cursor)
}
