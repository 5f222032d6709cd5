use crate::tokens::tokens::Punctuation;

use super::lookups::PrecedenceTable;

/// Default limit on parenthesis nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Settings for a `Parser`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserConfig {
    /// Maximum parenthesis nesting before the parse is rejected
    pub max_depth: usize,
    /// Punctuation that ends an expression without being consumed
    pub terminators: Vec<Punctuation>,
    /// Operators accepted in expression position
    pub table: PrecedenceTable,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_depth: DEFAULT_MAX_DEPTH,
            terminators: vec![Punctuation::Semicolon],
            table: PrecedenceTable::default(),
        }
    }
}

impl ParserConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_terminators(mut self, terminators: Vec<Punctuation>) -> Self {
        self.terminators = terminators;
        self
    }

    pub fn with_table(mut self, table: PrecedenceTable) -> Self {
        self.table = table;
        self
    }

    pub fn is_terminator(&self, punctuation: Punctuation) -> bool {
        self.terminators.contains(&punctuation)
    }
}
