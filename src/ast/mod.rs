/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - expressions: Definitions for value expression nodes
/// - statements: Definitions for top-level declaration nodes
/// - types: Definitions for type expression representations (stubbed)
pub mod expressions;
pub mod statements;
pub mod types;
