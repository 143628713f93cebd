/// AST (Abstract Syntax Tree) module
///
/// Submodules:
/// - expressions: the expression tree produced by the parser
pub mod expressions;
