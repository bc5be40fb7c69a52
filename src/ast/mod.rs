/// AST (Abstract Syntax Tree) module
/// Contains the node types produced by the parser
///
/// Submodules:
/// - ast: The `Node` sum type
/// - expressions: The number literal and binary operation nodes
pub mod ast;
pub mod expressions;
