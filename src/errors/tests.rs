//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip, ParseErrorKind};

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnknownOperator {
            operator: "@".to_string(),
        },
        Some(3),
    );

    assert_eq!(error.get_error_name(), "UnknownOperator");
    assert_eq!(error.kind(), ParseErrorKind::UnknownOperator);
}

#[test]
fn test_error_position() {
    let error = Error::new(ErrorImpl::UnmatchedCloseParen, Some(42));
    assert_eq!(error.get_position(), Some(42));

    let error = Error::new(ErrorImpl::EmptyExpression, None);
    assert_eq!(error.get_position(), None);
}

#[test]
fn test_parenthesis_errors_share_kind() {
    let open = Error::new(ErrorImpl::UnmatchedOpenParen, None);
    let close = Error::new(ErrorImpl::UnmatchedCloseParen, Some(0));

    assert_eq!(open.kind(), ParseErrorKind::UnmatchedParenthesis);
    assert_eq!(close.kind(), ParseErrorKind::UnmatchedParenthesis);
}

#[test]
fn test_arity_errors_are_malformed() {
    let errors = [
        ErrorImpl::MissingOperand {
            operator: "+".to_string(),
        },
        ErrorImpl::EmptyExpression,
        ErrorImpl::MissingOperator,
        ErrorImpl::UnexpectedToken {
            token: "{".to_string(),
        },
        ErrorImpl::InvalidFixity {
            operator: "!".to_string(),
            prefix: false,
        },
        ErrorImpl::NestingTooDeep { limit: 8 },
    ];

    for error_impl in errors {
        let error = Error::new(error_impl, None);
        assert_eq!(error.kind(), ParseErrorKind::MalformedExpression);
    }
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::MissingOperand {
            operator: "*".to_string(),
        },
        Some(1),
    );

    assert_eq!(error.to_string(), "missing operand for operator \"*\"");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(ErrorImpl::EmptyExpression, None);

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(ErrorImpl::MissingOperator, Some(1));

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("two operands")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_fixity_tip_depends_on_position() {
    let prefix = Error::new(
        ErrorImpl::InvalidFixity {
            operator: "=".to_string(),
            prefix: true,
        },
        Some(0),
    );
    let infix = Error::new(
        ErrorImpl::InvalidFixity {
            operator: "!".to_string(),
            prefix: false,
        },
        Some(1),
    );

    assert_eq!(prefix.get_tip().to_string(), "Operator `=` needs a left operand");
    assert_eq!(
        infix.get_tip().to_string(),
        "Operator `!` can only be used as a prefix"
    );
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
