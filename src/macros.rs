//! Utility macros for building token sequences.
//!
//! - `MK_TOKEN!` - Builds a `Vec<Token>` from source-like spellings
//!
//! Tokens normally come from an external lexer; these helpers exist so
//! callers and tests can write expressions without one.

use crate::tokens::tokens::{Literal, Punctuation, Token};

/// Builds a `Vec<Token>` from a list of source-like items.
///
/// Each item is classified by its spelling:
///
/// * quoted punctuation (`"("`, `";"`, ...) becomes a punctuation token
/// * any other quoted text (`"+"`, `"<<="`, ...) becomes an operator token
/// * numbers become integer or float literals
/// * `true`, `false` and `null` become keyword literals
/// * bare identifiers become identifier literals
///
/// # Example
///
/// ```ignore
/// let tokens = MK_TOKEN!["(", 1, "+", x, ")", "*", 3];
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($($item:tt),* $(,)?) => {
        vec![$($crate::macros::token_from_spelling(stringify!($item))),*]
    };
}

/// Classifies one `MK_TOKEN!` item. See the macro for the rules.
pub fn token_from_spelling(spelling: &str) -> Token {
    if let Some(quoted) = spelling
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        return match punctuation_from_symbol(quoted) {
            Some(punctuation) => Token::punctuation(punctuation),
            None => Token::operator(quoted),
        };
    }

    match spelling {
        "true" => return Token::literal(Literal::Bool(true)),
        "false" => return Token::literal(Literal::Bool(false)),
        "null" => return Token::literal(Literal::Null),
        _ => {}
    }

    if spelling.starts_with(|c: char| c.is_ascii_digit()) {
        if spelling.contains('.') {
            Token::literal(Literal::Float(spelling.to_string()))
        } else {
            Token::integer(spelling)
        }
    } else {
        Token::identifier(spelling)
    }
}

pub fn punctuation_from_symbol(symbol: &str) -> Option<Punctuation> {
    let punctuation = match symbol {
        "(" => Punctuation::OpenParen,
        ")" => Punctuation::CloseParen,
        "{" => Punctuation::OpenCurly,
        "}" => Punctuation::CloseCurly,
        "[" => Punctuation::OpenBracket,
        "]" => Punctuation::CloseBracket,
        "," => Punctuation::Comma,
        ";" => Punctuation::Semicolon,
        ":" => Punctuation::Colon,
        "." => Punctuation::Dot,
        _ => return None,
    };

    Some(punctuation)
}
