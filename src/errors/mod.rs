//! Error types for expression parsing.
//!
//! This module defines the failure model of the parser:
//!
//! - An error structure carrying the offending token position
//! - Detailed variants, each belonging to one coarse failure kind
//! - Helpful suggestions for diagnostics

pub mod errors;

#[cfg(test)]
mod tests;
