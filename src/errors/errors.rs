use std::fmt::Display;

use thiserror::Error;

/// Coarse failure classes reported to callers.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ParseErrorKind {
    /// `(` without a matching `)`, or `)` without a matching `(`
    UnmatchedParenthesis,
    /// Operand/operator arity mismatch, empty input, adjacent operands
    MalformedExpression,
    /// Operator symbol absent from the precedence table
    UnknownOperator,
}

impl Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A failed `parse_expression` call.
///
/// `position` is the index of the offending token in the input sequence,
/// when one can be named.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Option<usize>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Option<usize>) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> Option<usize> {
        self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ParseErrorKind {
        match &self.internal_error {
            ErrorImpl::UnmatchedOpenParen | ErrorImpl::UnmatchedCloseParen => {
                ParseErrorKind::UnmatchedParenthesis
            }
            ErrorImpl::UnknownOperator { .. } => ParseErrorKind::UnknownOperator,
            ErrorImpl::MissingOperand { .. }
            | ErrorImpl::EmptyExpression
            | ErrorImpl::MissingOperator
            | ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::InvalidFixity { .. }
            | ErrorImpl::NestingTooDeep { .. } => ParseErrorKind::MalformedExpression,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnmatchedOpenParen => "UnmatchedOpenParen",
            ErrorImpl::UnmatchedCloseParen => "UnmatchedCloseParen",
            ErrorImpl::MissingOperand { .. } => "MissingOperand",
            ErrorImpl::EmptyExpression => "EmptyExpression",
            ErrorImpl::MissingOperator => "MissingOperator",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::InvalidFixity { .. } => "InvalidFixity",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::UnknownOperator { .. } => "UnknownOperator",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnmatchedOpenParen => {
                ErrorTip::Suggestion(String::from("Expected `)` to close this group"))
            }
            ErrorImpl::UnmatchedCloseParen => {
                ErrorTip::Suggestion(String::from("Found `)` with no matching `(`"))
            }
            ErrorImpl::MissingOperand { operator } => ErrorTip::Suggestion(format!(
                "Operator `{}` is missing an operand",
                operator
            )),
            ErrorImpl::EmptyExpression => ErrorTip::None,
            ErrorImpl::MissingOperator => ErrorTip::Suggestion(String::from(
                "Found two operands with no operator between them, did you miss an operator?",
            )),
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a terminator?",
                token
            )),
            ErrorImpl::InvalidFixity { operator, prefix } => {
                if *prefix {
                    ErrorTip::Suggestion(format!(
                        "Operator `{}` needs a left operand",
                        operator
                    ))
                } else {
                    ErrorTip::Suggestion(format!(
                        "Operator `{}` can only be used as a prefix",
                        operator
                    ))
                }
            }
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Groups may be nested at most {} levels deep",
                limit
            )),
            ErrorImpl::UnknownOperator { operator } => {
                ErrorTip::Suggestion(format!("Operator `{}` is not defined", operator))
            }
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unmatched opening parenthesis")]
    UnmatchedOpenParen,
    #[error("unmatched closing parenthesis")]
    UnmatchedCloseParen,
    #[error("missing operand for operator {operator:?}")]
    MissingOperand { operator: String },
    #[error("expected an expression")]
    EmptyExpression,
    #[error("expected an operator between operands")]
    MissingOperator,
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("operator {operator:?} used in the wrong position (prefix: {prefix:?})")]
    InvalidFixity { operator: String, prefix: bool },
    #[error("expression nested deeper than {limit:?} levels")]
    NestingTooDeep { limit: usize },
    #[error("unknown operator: {operator:?}")]
    UnknownOperator { operator: String },
}
