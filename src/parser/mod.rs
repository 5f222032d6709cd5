//! Parser module for building expression trees.
//!
//! This module contains the parser that transforms a stream of tokens
//! into a `Node` tree. It uses an operator-precedence (shunting-yard)
//! algorithm and handles:
//!
//! - Operator precedence and associativity from a lookup table
//! - Unary versus binary disambiguation by operand position
//! - Parenthesized groups through recursion, with a nesting limit
//! - Arity validation and error reporting
//!
//! Binding power decides when pending operators are reduced.

pub mod config;
pub mod lookups;
pub mod parser;
