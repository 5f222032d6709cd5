//! Forward-only cursor over a finished token sequence.

use tracing::trace;

use super::tokens::Token;

/// Read-only cursor with one token of lookahead.
///
/// The cursor owns the token sequence for the duration of a parse. It is
/// not meant to be shared; the only state it keeps is its position.
pub struct TokenCursor {
    /// The tokens to walk
    tokens: Vec<Token>,
    /// Index of the next token to be returned
    pos: usize,
}

impl TokenCursor {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenCursor { tokens, pos: 0 }
    }

    /// Returns the next token without consuming it.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Consumes the next token and returns it.
    ///
    /// At end of input nothing is consumed and `None` is returned.
    pub fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos)?;
        trace!(pos = self.pos, token = %token, "advance");
        self.pos += 1;
        Some(token)
    }

    /// Index of the next token in the input sequence.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Number of tokens not yet consumed.
    pub fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.pos)
    }
}

impl From<Vec<Token>> for TokenCursor {
    fn from(tokens: Vec<Token>) -> Self {
        TokenCursor::new(tokens)
    }
}
