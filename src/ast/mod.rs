/// AST (Abstract Syntax Tree) module
/// Contains the expression tree produced by the parser
///
/// Submodules:
/// - ast: The closed `Node` variant type and its helpers
pub mod ast;

#[cfg(test)]
mod tests;
