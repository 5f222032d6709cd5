//! Token model and cursor consumed by the parser.
//!
//! Tokens arrive already lexed. This module only describes them and
//! provides a forward cursor with one token of lookahead:
//!
//! - Literal, operator and punctuation token kinds
//! - A cursor exposing `peek` and `advance`

pub mod cursor;
pub mod tokens;

#[cfg(test)]
mod tests;
