//! Operator-precedence expression parser.
//!
//! This module contains the `Parser` struct and the `parse_expression`
//! entry points. Expressions are parsed shunting-yard style with an
//! explicit output stack of finished sub-trees and a separate operator
//! stack. Parenthesized groups are parsed by recursion, so the operator
//! stack never holds grouping markers.

use lazy_static::lazy_static;
use tracing::{debug, trace};

use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    tokens::{
        cursor::TokenCursor,
        tokens::{Punctuation, TokenKind},
    },
};

use super::{
    config::ParserConfig,
    lookups::{Associativity, BindingPower, OperatorInfo},
};

/// An operator waiting on the operator stack.
///
/// Arity is fixed when the operator is pushed and never re-derived.
#[derive(Debug)]
struct PendingOperator {
    symbol: String,
    binding_power: BindingPower,
    unary: bool,
    /// Index of the operator token in the input
    position: usize,
}

impl PendingOperator {
    /// Whether this stacked operator must be reduced before `incoming` is pushed.
    fn binds_before(&self, incoming: &OperatorInfo) -> bool {
        match incoming.associativity {
            Associativity::Left => self.binding_power >= incoming.binding_power,
            Associativity::Right => self.binding_power > incoming.binding_power,
        }
    }
}

/// Expression parser.
///
/// Holds only configuration; every call to `parse_expression` starts
/// from empty stacks, so one parser can be reused freely.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Creates a new Parser with the given configuration.
    pub fn new(config: ParserConfig) -> Self {
        Parser { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses one expression from the cursor.
    ///
    /// Scanning stops at end of input, at a configured terminator, or at a
    /// `)` closing an enclosing group. None of these are consumed.
    ///
    /// # Returns
    ///
    /// The root node, or the first error encountered. No partial tree is
    /// returned on failure.
    pub fn parse_expression(&self, cursor: &mut TokenCursor) -> Result<Node, Error> {
        debug!(pos = cursor.position(), "parse_expression");

        let result = self.parse_group(cursor, 0);

        match &result {
            Ok(node) => debug!(pos = cursor.position(), tree = %node, "parsed expression"),
            Err(error) => debug!(
                pos = cursor.position(),
                error = %error,
                "failed to parse expression"
            ),
        }

        result
    }

    fn parse_group(&self, cursor: &mut TokenCursor, depth: usize) -> Result<Node, Error> {
        let mut output: Vec<Node> = vec![];
        let mut operators: Vec<PendingOperator> = vec![];
        // True until an operand has been produced at the current position
        let mut expect_operand = true;

        while let Some(token) = cursor.peek().cloned() {
            let position = cursor.position();

            match token.kind {
                TokenKind::Punctuation(punctuation) if self.config.is_terminator(punctuation) => {
                    break;
                }
                TokenKind::Punctuation(Punctuation::CloseParen) => {
                    if depth == 0 {
                        return Err(Error::new(ErrorImpl::UnmatchedCloseParen, Some(position)));
                    }

                    break;
                }
                TokenKind::Punctuation(Punctuation::OpenParen) => {
                    if !expect_operand {
                        return Err(missing_operator(position));
                    }

                    if depth >= self.config.max_depth {
                        return Err(Error::new(
                            ErrorImpl::NestingTooDeep {
                                limit: self.config.max_depth,
                            },
                            Some(position),
                        ));
                    }

                    cursor.advance();
                    let group = self.parse_group(cursor, depth + 1)?;

                    match cursor.peek() {
                        Some(close) if close.is_punctuation(Punctuation::CloseParen) => {
                            cursor.advance();
                        }
                        _ => {
                            return Err(Error::new(ErrorImpl::UnmatchedOpenParen, Some(position)))
                        }
                    }

                    output.push(group);
                    expect_operand = false;
                }
                TokenKind::Punctuation(punctuation) => {
                    return Err(Error::new(
                        ErrorImpl::UnexpectedToken {
                            token: punctuation.to_string(),
                        },
                        Some(position),
                    ));
                }
                TokenKind::Literal(literal) => {
                    if !expect_operand {
                        return Err(missing_operator(position));
                    }

                    cursor.advance();
                    output.push(Node::Literal(literal));
                    expect_operand = false;
                }
                TokenKind::Operator(symbol) => {
                    let info = match self.config.table.get(&symbol) {
                        Some(info) => *info,
                        None => {
                            return Err(Error::new(
                                ErrorImpl::UnknownOperator { operator: symbol },
                                Some(position),
                            ))
                        }
                    };

                    cursor.advance();

                    if expect_operand {
                        if !info.fixity.allows_prefix() {
                            return Err(Error::new(
                                ErrorImpl::InvalidFixity {
                                    operator: symbol,
                                    prefix: true,
                                },
                                Some(position),
                            ));
                        }

                        // Prefix operators have no left operand, so nothing is reduced
                        operators.push(PendingOperator {
                            symbol,
                            binding_power: BindingPower::Unary,
                            unary: true,
                            position,
                        });
                    } else {
                        if !info.fixity.allows_infix() {
                            return Err(Error::new(
                                ErrorImpl::InvalidFixity {
                                    operator: symbol,
                                    prefix: false,
                                },
                                Some(position),
                            ));
                        }

                        while operators
                            .last()
                            .is_some_and(|top| top.binds_before(&info))
                        {
                            if let Some(top) = operators.pop() {
                                reduce(&mut output, top)?;
                            }
                        }

                        operators.push(PendingOperator {
                            symbol,
                            binding_power: info.binding_power,
                            unary: false,
                            position,
                        });
                        expect_operand = true;
                    }
                }
            }
        }

        while let Some(operator) = operators.pop() {
            reduce(&mut output, operator)?;
        }

        let root = output.pop().ok_or_else(|| {
            Error::new(
                ErrorImpl::EmptyExpression,
                cursor.peek().map(|_| cursor.position()),
            )
        })?;
        // Operands and operators alternate, so exactly one node remains
        debug_assert!(output.is_empty());

        Ok(root)
    }
}

/// An operand appeared where an operator was expected.
fn missing_operator(position: usize) -> Error {
    Error::new(ErrorImpl::MissingOperator, Some(position))
}

/// Folds one operator into the output stack.
///
/// Binary operators take the most recently pushed node as the right operand.
fn reduce(output: &mut Vec<Node>, operator: PendingOperator) -> Result<(), Error> {
    trace!(
        op = %operator.symbol,
        unary = operator.unary,
        operands = output.len(),
        "reduce"
    );

    let missing_operand = || {
        Error::new(
            ErrorImpl::MissingOperand {
                operator: operator.symbol.clone(),
            },
            Some(operator.position),
        )
    };

    if operator.unary {
        let operand = output.pop().ok_or_else(missing_operand)?;
        output.push(Node::unary(operator.symbol, operand));
        return Ok(());
    }

    if output.len() < 2 {
        return Err(missing_operand());
    }

    let (Some(right), Some(left)) = (output.pop(), output.pop()) else {
        return Err(missing_operand());
    };
    output.push(Node::binary(operator.symbol, left, right));

    Ok(())
}

lazy_static! {
    static ref DEFAULT_PARSER: Parser = Parser::default();
}

/// Parses one expression using the default configuration.
///
/// # Arguments
///
/// * `cursor` - Cursor positioned at the first token of the expression
///
/// # Returns
///
/// The root node, or the error that ended the parse.
pub fn parse_expression(cursor: &mut TokenCursor) -> Result<Node, Error> {
    DEFAULT_PARSER.parse_expression(cursor)
}
