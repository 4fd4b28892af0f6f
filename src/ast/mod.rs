/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the expression tree
///
/// Submodules:
/// - expressions: The expression node variants and their canonical rendering
/// - pretty: Indented multi-line rendering used by the command line
pub mod expressions;
pub mod pretty;
