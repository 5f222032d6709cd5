use std::fmt::Display;

/// Terminal values produced by the lexer.
///
/// Textual payloads are kept exactly as the lexer spelled them; the parser
/// never interprets them.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum Literal {
    Integer(String),
    Float(String),
    String(String),
    Char(String),
    Bool(bool),
    Null,
    Identifier(String),
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Integer(value) | Literal::Float(value) | Literal::Identifier(value) => {
                write!(f, "{}", value)
            }
            Literal::String(value) => write!(f, "{:?}", value),
            Literal::Char(value) => write!(f, "'{}'", value),
            Literal::Bool(value) => write!(f, "{}", value),
            Literal::Null => write!(f, "null"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Punctuation {
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,
    Comma,
    Semicolon,
    Colon,
    Dot,
}

impl Punctuation {
    pub fn symbol(&self) -> &'static str {
        match self {
            Punctuation::OpenParen => "(",
            Punctuation::CloseParen => ")",
            Punctuation::OpenCurly => "{",
            Punctuation::CloseCurly => "}",
            Punctuation::OpenBracket => "[",
            Punctuation::CloseBracket => "]",
            Punctuation::Comma => ",",
            Punctuation::Semicolon => ";",
            Punctuation::Colon => ":",
            Punctuation::Dot => ".",
        }
    }
}

impl Display for Punctuation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum TokenKind {
    Literal(Literal),
    /// Operator symbol as written, e.g. `+` or `<<=`.
    Operator(String),
    Punctuation(Punctuation),
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Literal(literal) => write!(f, "{}", literal),
            TokenKind::Operator(symbol) => write!(f, "{}", symbol),
            TokenKind::Punctuation(punctuation) => write!(f, "{}", punctuation),
        }
    }
}

/// A single lexed token. Immutable once built.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct Token {
    pub kind: TokenKind,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl Token {
    pub fn new(kind: TokenKind) -> Self {
        Token { kind }
    }

    pub fn literal(literal: Literal) -> Self {
        Token::new(TokenKind::Literal(literal))
    }

    pub fn operator(symbol: impl Into<String>) -> Self {
        Token::new(TokenKind::Operator(symbol.into()))
    }

    pub fn punctuation(punctuation: Punctuation) -> Self {
        Token::new(TokenKind::Punctuation(punctuation))
    }

    pub fn integer(value: impl Into<String>) -> Self {
        Token::literal(Literal::Integer(value.into()))
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Token::literal(Literal::Identifier(name.into()))
    }

    pub fn is_punctuation(&self, punctuation: Punctuation) -> bool {
        matches!(&self.kind, TokenKind::Punctuation(p) if *p == punctuation)
    }
}
