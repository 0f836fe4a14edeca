/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The program root, node kinds and the JSON view shared by all nodes
/// - expressions: Definitions for the expression nodes
/// - statements: Definitions for the statement nodes
/// - printer: Renders a tree back into source text
pub mod ast;
pub mod expressions;
pub mod printer;
pub mod statements;
